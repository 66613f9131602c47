//! Pagination over the qualifying set.

use serde::{Deserialize, Serialize};

/// A requested page.
///
/// Page numbers are 1-based. Both fields are clamped to a minimum of 1 on
/// construction, so a `PageRequest` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    /// Create a page request, clamping both values to at least 1.
    #[must_use]
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    /// Number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items skipped before this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_number.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` items.
    #[must_use]
    pub const fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// The slice of `items` that falls on this page.
    ///
    /// Out-of-range pages yield an empty slice.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of screening results.
///
/// `total_count` and `total_pages` describe the whole qualifying set, not
/// the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Number of qualifying companies across all pages.
    pub total_count: usize,
    /// The 1-based page number.
    pub page_number: usize,
    /// Requested page size.
    pub page_size: usize,
    /// `ceil(total_count / page_size)`.
    pub total_pages: usize,
}

impl<T> PaginatedResult<T> {
    /// Assemble a page from its items and the size of the full set.
    #[must_use]
    pub fn new(items: Vec<T>, total_count: usize, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_pages: request.total_pages(total_count),
        }
    }

    /// Whether there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
