use super::{MemberSortKey, SortOrder};
use crate::shared::PageRequest;

/// Normalized list query: the result of running the raw request
/// parameters through lenient parsing, sort-key resolution and sort-order
/// defaulting. Construction cannot fail.
#[derive(Debug, Clone)]
pub struct ListMembersDto {
    pub page: u64,
    pub limit: u64,
    /// Raw search text; empty means no filter. No trimming is applied.
    pub search: String,
    pub sort_key: MemberSortKey,
    pub sort_order: SortOrder,
}

impl ListMembersDto {
    /// Build from raw, possibly absent query-string values.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        search: Option<String>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        let page_req = PageRequest::from_raw(page, limit);
        Self {
            page: page_req.page,
            limit: page_req.limit,
            search: search.unwrap_or_default(),
            sort_key: MemberSortKey::resolve(sort_by),
            sort_order: SortOrder::parse_or_default(sort_order),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for ListMembersDto {
    fn default() -> Self {
        Self::from_raw(None, None, None, None, None)
    }
}
