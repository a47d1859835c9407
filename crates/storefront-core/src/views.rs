//! The listing views of the storefront, each one query plus its render options.

use storefront_data::CollectionQuery;

use crate::render::ViewOptions;

/// Number of products on the home page carousel.
pub const FEATURED_PRODUCT_LIMIT: u32 = 8;

/// What a view fetches and how it renders while doing so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSpec {
    pub query: CollectionQuery,
    pub options: ViewOptions,
}

impl ListingSpec {
    pub fn new(query: CollectionQuery, options: ViewOptions) -> Self {
        Self { query, options }
    }

    /// `/categories` page grid.
    pub fn categories_page() -> Self {
        Self::new(CollectionQuery::categories(), ViewOptions::categories_page())
    }

    /// Category carousel on the home page.
    pub fn featured_categories() -> Self {
        Self::new(
            CollectionQuery::categories(),
            ViewOptions::featured_categories(),
        )
    }

    /// Categories listed in the navbar dropdown.
    pub fn nav_categories() -> Self {
        Self::featured_categories()
    }

    /// Featured products carousel on the home page.
    pub fn featured_products() -> Self {
        Self::new(
            CollectionQuery::products()
                .featured(true)
                .limit(FEATURED_PRODUCT_LIMIT),
            ViewOptions::featured_products(),
        )
    }

    /// `/products`, optionally filtered by search term and category slug.
    pub fn product_listing(search: Option<&str>, category: Option<&str>) -> Self {
        let mut query = CollectionQuery::products();
        if let Some(term) = search {
            query = query.search(term);
        }
        if let Some(slug) = category {
            query = query.category(slug);
        }
        Self::new(query, ViewOptions::product_listing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_products_query() {
        let spec = ListingSpec::featured_products();
        assert_eq!(
            spec.query.path_and_query(),
            "/public/products?featured=true&limit=8"
        );
        assert_eq!(spec.options.placeholders, 4);
    }

    #[test]
    fn test_product_listing_filters() {
        let spec = ListingSpec::product_listing(Some("creatine"), Some("supplements"));
        assert_eq!(
            spec.query.path_and_query(),
            "/public/products?search=creatine&category=supplements"
        );

        let unfiltered = ListingSpec::product_listing(Some(" "), None);
        assert_eq!(unfiltered.query.path_and_query(), "/public/products");
    }

    #[test]
    fn test_categories_page_falls_back_to_products() {
        let spec = ListingSpec::categories_page();
        assert_eq!(spec.query.field(), "categories");
        assert_eq!(spec.options.empty.href, "/products");
        assert_eq!(spec.options.placeholders, 6);
    }
}
