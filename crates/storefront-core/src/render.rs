//! Render-mode selection for async views.
//!
//! The mode is a pure function of the resource's `(status, data, error)`;
//! views call [`select`] on every render and draw whatever it says.

use crate::resource::{AsyncResource, ResourceStatus};

/// Navigational fallback offered by an empty view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyFallback {
    pub title: &'static str,
    pub message: &'static str,
    pub link_label: &'static str,
    pub href: &'static str,
}

/// Per-view rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Skeleton units drawn while loading; matches the grid shape.
    pub placeholders: usize,
    pub empty: EmptyFallback,
}

impl ViewOptions {
    /// Build options; at least one placeholder is always drawn.
    pub fn new(placeholders: usize, empty: EmptyFallback) -> Self {
        Self {
            placeholders: placeholders.max(1),
            empty,
        }
    }

    /// The full categories page.
    pub fn categories_page() -> Self {
        Self::new(
            6,
            EmptyFallback {
                title: "No Categories Found",
                message: "Please check back later for our exciting categories.",
                link_label: "Browse All Products",
                href: "/products",
            },
        )
    }

    /// Featured categories carousel on the home page.
    pub fn featured_categories() -> Self {
        Self::new(
            4,
            EmptyFallback {
                title: "No Categories Yet",
                message: "Our collections are being curated.",
                link_label: "View All Categories",
                href: "/categories",
            },
        )
    }

    /// Featured products carousel on the home page.
    pub fn featured_products() -> Self {
        Self::new(
            4,
            EmptyFallback {
                title: "No Featured Products",
                message: "Nothing is featured right now.",
                link_label: "View All Products",
                href: "/products",
            },
        )
    }

    /// Product listing and search results.
    pub fn product_listing() -> Self {
        Self::new(
            8,
            EmptyFallback {
                title: "No Products Found",
                message: "Try a different search or browse everything we carry.",
                link_label: "Browse All Products",
                href: "/products",
            },
        )
    }
}

/// What a view should draw right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Skeleton grid with a fixed number of units.
    Loading { placeholders: usize },
    /// Failure reason shown to the user.
    Error { reason: String },
    /// Valid response with zero items.
    Empty { fallback: EmptyFallback },
    /// One presenter unit per item.
    Populated { count: usize },
}

impl RenderMode {
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Loading { .. } => "loading",
            RenderMode::Error { .. } => "error",
            RenderMode::Empty { .. } => "empty",
            RenderMode::Populated { .. } => "populated",
        }
    }
}

/// Select the render mode for a resource.
///
/// An idle resource renders as loading: every view starts its fetch on
/// mount, so idle is only ever observed for the instant before that.
pub fn select<T>(resource: &AsyncResource<T>, options: &ViewOptions) -> RenderMode {
    match resource.status() {
        ResourceStatus::Idle | ResourceStatus::Loading => RenderMode::Loading {
            placeholders: options.placeholders,
        },
        ResourceStatus::Failure => RenderMode::Error {
            reason: resource.error().unwrap_or_default().to_string(),
        },
        ResourceStatus::Success if resource.data().is_empty() => RenderMode::Empty {
            fallback: options.empty.clone(),
        },
        ResourceStatus::Success => RenderMode::Populated {
            count: resource.data().len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled<T>(payload: Result<Vec<T>, &str>) -> AsyncResource<T> {
        let mut r = AsyncResource::new();
        let t = r.begin();
        match payload {
            Ok(items) => r.succeed(t, items),
            Err(reason) => r.fail(t, reason),
        };
        r
    }

    #[test]
    fn test_idle_and_loading_render_skeleton() {
        let options = ViewOptions::categories_page();
        let mut r: AsyncResource<u8> = AsyncResource::new();
        assert_eq!(select(&r, &options), RenderMode::Loading { placeholders: 6 });
        r.begin();
        assert_eq!(select(&r, &options), RenderMode::Loading { placeholders: 6 });
    }

    #[test]
    fn test_failure_renders_reason() {
        let r = settled::<u8>(Err("Network down"));
        assert_eq!(
            select(&r, &ViewOptions::featured_products()),
            RenderMode::Error {
                reason: "Network down".to_string()
            }
        );
    }

    #[test]
    fn test_empty_offers_fallback() {
        let r = settled::<u8>(Ok(vec![]));
        match select(&r, &ViewOptions::categories_page()) {
            RenderMode::Empty { fallback } => assert_eq!(fallback.href, "/products"),
            other => panic!("expected empty, got {:?}", other),
        }
    }

    #[test]
    fn test_populated_counts_items() {
        let r = settled(Ok(vec![1, 2, 3]));
        let mode = select(&r, &ViewOptions::product_listing());
        assert_eq!(mode, RenderMode::Populated { count: 3 });
        assert_eq!(mode.name(), "populated");
    }

    #[test]
    fn test_select_is_idempotent() {
        let r = settled(Ok(vec![1]));
        let options = ViewOptions::featured_categories();
        let first = select(&r, &options);
        for _ in 0..5 {
            assert_eq!(select(&r, &options), first);
        }
    }

    #[test]
    fn test_at_least_one_placeholder() {
        let options = ViewOptions::new(0, ViewOptions::categories_page().empty);
        assert_eq!(options.placeholders, 1);
    }
}
