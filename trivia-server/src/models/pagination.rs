//! Pagination types

use serde::Deserialize;

/// Maximum items per page accepted from configuration
pub const MAX_PER_PAGE: u32 = 100;

/// Default items per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Pagination parameters
///
/// Pages are 1-indexed. A page below 1 is kept as-is so the store
/// returns nothing for it and the caller reports not-found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination; per page is clamped to 1..=100.
    pub fn new(page: i64, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Whether this page can hold any rows at all.
    pub fn is_in_range(&self) -> bool {
        self.page >= 1
    }

    /// SQL OFFSET value; saturates instead of overflowing on huge pages.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.per_page as i64)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        if self.is_in_range() {
            self.per_page as i64
        } else {
            0
        }
    }

    /// Slice an already-ordered collection to this page.
    pub fn window<T>(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit()).unwrap_or(0);
        items.iter().skip(start).take(limit).cloned().collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Paginated result
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query parameters for pagination
///
/// `page` stays textual: a value that is not an integer falls back to
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Resolve to a [`Pagination`] with the configured page size.
    pub fn resolve(&self, per_page: u32) -> Pagination {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Pagination::new(page, per_page)
    }
}
