//! Pagination primitives: lenient parameter normalization and the
//! pagination envelope returned by list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalized pagination request.
///
/// Built from raw query-string values with [`PageRequest::from_raw`];
/// malformed input falls back to defaults instead of failing, so list
/// endpoints never reject a request over its paging parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Lenient parse of raw string parameters.
    ///
    /// - `page`: parse failure or a value below 1 falls back to 1. No upper
    ///   bound is enforced.
    /// - `limit`: parse failure or a non-positive value falls back to 10.
    ///   No upper bound is enforced; arbitrarily large pages are the
    ///   caller's problem.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(Self::DEFAULT_PAGE);
        let limit = limit
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(Self::DEFAULT_LIMIT);
        Self { page, limit }
    }

    /// Row offset of the first item on this page. Offsets past the end of
    /// the result set are legal and simply yield an empty page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata returned alongside a page of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page number as requested (1-based).
    pub page: u64,
    /// Page size as requested.
    pub limit: u64,
    /// Total rows matching the filter, ignoring pagination.
    pub total: u64,
    /// `ceil(total / limit)`; 0 when there are no matching rows.
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    /// Compute the envelope for `total` matching rows. `limit` must be
    /// positive (guaranteed by [`PageRequest`] normalization).
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: PageRequest::DEFAULT_PAGE,
            limit: PageRequest::DEFAULT_LIMIT,
            total: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

/// A page of items plus its pagination metadata, as produced by a
/// repository list query.
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        Self {
            items,
            pagination: PageInfo::new(page, limit, total),
        }
    }
}
