//! Collection query builder.

/// Path of the public category listing.
pub const CATEGORIES_PATH: &str = "/public/categories";

/// Path of the public product listing.
pub const PRODUCTS_PATH: &str = "/public/products";

/// One remote listing: where it lives, how it is filtered, and which
/// envelope field carries the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    path: String,
    field: &'static str,
    params: Vec<(String, String)>,
}

impl CollectionQuery {
    /// Create a query for an arbitrary listing.
    pub fn new(path: impl Into<String>, field: &'static str) -> Self {
        Self {
            path: path.into(),
            field,
            params: Vec::new(),
        }
    }

    /// `GET /public/categories` → `data.categories`.
    pub fn categories() -> Self {
        Self::new(CATEGORIES_PATH, "categories")
    }

    /// `GET /public/products` → `data.products`.
    pub fn products() -> Self {
        Self::new(PRODUCTS_PATH, "products")
    }

    /// Add a query parameter. A key already present is replaced in place.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Only featured items.
    pub fn featured(self, featured: bool) -> Self {
        self.param("featured", featured.to_string())
    }

    /// Cap the number of items returned.
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit.to_string())
    }

    /// Free-text search. Blank terms are ignored.
    pub fn search(self, term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            self
        } else {
            self.param("search", term)
        }
    }

    /// Restrict to one category, keyed by slug. Blank slugs are ignored.
    pub fn category(self, slug: &str) -> Self {
        let slug = slug.trim();
        if slug.is_empty() {
            self
        } else {
            self.param("category", slug)
        }
    }

    /// The listing path, without query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Envelope field holding the collection under `data`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Query parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render `path?k=v&...` with percent-encoded keys and values.
    pub fn path_and_query(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}
