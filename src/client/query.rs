//! Query-param building and display-range arithmetic for table clients.

use std::collections::BTreeMap;

use crate::domain::SortOrder;
use crate::shared::PageInfo;

/// Parameters for fetching one page of members.
#[derive(Debug, Clone)]
pub struct FetchMembersParams {
    pub page: u64,
    pub limit: u64,
    pub search: String,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
}

impl Default for FetchMembersParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: String::new(),
            sort_by: None,
            sort_order: SortOrder::Asc,
        }
    }
}

/// Serialize fetch parameters into string query params.
///
/// `page`, `limit` and `search` are always present; `sortBy` and
/// `sortOrder` are emitted together and only when a sort column is set.
pub fn build_query_params(params: &FetchMembersParams) -> BTreeMap<&'static str, String> {
    let mut query = BTreeMap::new();
    query.insert("page", params.page.to_string());
    query.insert("limit", params.limit.to_string());
    query.insert("search", params.search.clone());

    if let Some(sort_by) = &params.sort_by {
        query.insert("sortBy", sort_by.clone());
        query.insert("sortOrder", params.sort_order.as_str().to_string());
    }

    query
}

/// 1-based index range of the rows shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    pub start: u64,
    pub end: u64,
}

/// Compute the "showing X–Y of Z" range. An empty result yields
/// `start = 1, end = 0`.
pub fn calculate_display_range(pagination: &PageInfo) -> DisplayRange {
    let start = (pagination.page - 1) * pagination.limit + 1;
    let end = (pagination.page * pagination.limit).min(pagination.total);
    DisplayRange { start, end }
}
