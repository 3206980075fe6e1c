//! Page math for catalog listings.
//!
//! Mirrors lenient paginator semantics: a missing, garbage, zero, or
//! out-of-range page number clamps to the nearest valid page instead of
//! erroring, and an empty result set is a single empty page.

/// One page of results plus enough metadata to render pagination links.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number, already clamped into range.
    pub number: u32,
    /// Total number of pages, always >= 1.
    pub total_pages: u32,
    /// Total number of matching items across all pages.
    pub total_items: u64,
}

impl<T> Page<T> {
    /// True if a page precedes this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// True if a page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Number of pages needed for `total_items` at `per_page` items each.
///
/// An empty result set still has one (empty) page.
#[must_use]
pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total_items.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Build a listing URL for a page number, preserving the search query.
#[must_use]
pub fn page_url(base_path: &str, search: Option<&str>, page: u32) -> String {
    match search.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("{base_path}?q={}&page={page}", urlencoding::encode(q)),
        None => format!("{base_path}?page={page}"),
    }
}

/// Resolve a raw `?page=` parameter against the page count.
///
/// Missing, unparseable, or zero values resolve to the first page;
/// values past the end clamp to the last page.
#[must_use]
pub fn resolve_page(raw: Option<&str>, total_pages: u32) -> u32 {
    let requested = raw
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1);
    requested.min(total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(16, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
    }

    #[test]
    fn test_resolve_page_defaults_to_first() {
        assert_eq!(resolve_page(None, 5), 1);
        assert_eq!(resolve_page(Some(""), 5), 1);
        assert_eq!(resolve_page(Some("abc"), 5), 1);
        assert_eq!(resolve_page(Some("0"), 5), 1);
        assert_eq!(resolve_page(Some("-3"), 5), 1);
    }

    #[test]
    fn test_resolve_page_clamps_to_last() {
        assert_eq!(resolve_page(Some("99"), 2), 2);
        assert_eq!(resolve_page(Some("2"), 2), 2);
        assert_eq!(resolve_page(Some("1"), 2), 1);
    }

    #[test]
    fn test_empty_set_is_one_empty_page() {
        assert_eq!(resolve_page(Some("7"), total_pages(0, 8)), 1);
    }

    #[test]
    fn test_page_url_encodes_query() {
        assert_eq!(page_url("/products", None, 2), "/products?page=2");
        assert_eq!(
            page_url("/products", Some("coffee mug"), 1),
            "/products?q=coffee%20mug&page=1"
        );
        assert_eq!(page_url("/products", Some("  "), 3), "/products?page=3");
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = Page::<u32> {
            items: vec![],
            number: 2,
            total_pages: 3,
            total_items: 17,
        };
        assert!(page.has_previous());
        assert!(page.has_next());

        let only = Page::<u32> {
            items: vec![],
            number: 1,
            total_pages: 1,
            total_items: 0,
        };
        assert!(!only.has_previous());
        assert!(!only.has_next());
    }
}
