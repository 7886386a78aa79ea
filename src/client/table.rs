//! Table state machine for paginated member listings.

use super::query::FetchMembersParams;
use crate::domain::SortOrder;
use crate::shared::PageInfo;

/// Interactive state for a members table: current page, search text, page
/// size and sort selection, plus the last pagination envelope the server
/// returned. Owned by whatever renders the table; there is no global
/// instance.
#[derive(Debug, Clone)]
pub struct MembersTable {
    pub current_page: u64,
    pub search_query: String,
    pub items_per_page: u64,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub pagination: PageInfo,
}

impl Default for MembersTable {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_query: String::new(),
            items_per_page: 10,
            sort_by: None,
            sort_order: SortOrder::Asc,
            pagination: PageInfo::default(),
        }
    }
}

impl MembersTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle sorting: clicking the current column flips asc↔desc, a new
    /// column resets to ascending. Always returns to the first page.
    pub fn handle_sort(&mut self, column: &str) {
        if self.sort_by.as_deref() == Some(column) {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_by = Some(column.to_string());
            self.sort_order = SortOrder::Asc;
        }
        self.current_page = 1;
    }

    /// A new search always starts from the first page.
    pub fn handle_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Changing the page size restarts from the first page.
    pub fn handle_items_per_page_change(&mut self, limit: u64) {
        self.items_per_page = limit;
        self.current_page = 1;
    }

    /// Advance one page if the server reported more; returns whether the
    /// page changed.
    pub fn next_page(&mut self) -> bool {
        if self.pagination.has_next {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page if there is one; returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.pagination.has_prev {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to_page(&mut self, page: u64) {
        self.current_page = page;
    }

    /// Record the pagination envelope from the latest server response.
    pub fn apply_pagination(&mut self, pagination: PageInfo) {
        self.pagination = pagination;
    }

    /// Fetch parameters for the current state.
    pub fn fetch_params(&self) -> FetchMembersParams {
        FetchMembersParams {
            page: self.current_page,
            limit: self.items_per_page,
            search: self.search_query.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_defaults() {
        let table = MembersTable::new();
        assert_eq!(table.current_page, 1);
        assert_eq!(table.search_query, "");
        assert_eq!(table.items_per_page, 10);
        assert_eq!(table.sort_by, None);
        assert_eq!(table.sort_order, SortOrder::Asc);
        assert_eq!(table.pagination.total, 0);
        assert_eq!(table.pagination.total_pages, 0);
        assert!(!table.pagination.has_next);
        assert!(!table.pagination.has_prev);
    }

    #[test]
    fn first_click_sorts_ascending() {
        let mut table = MembersTable::new();
        table.handle_sort("firstName");

        assert_eq!(table.sort_by.as_deref(), Some("firstName"));
        assert_eq!(table.sort_order, SortOrder::Asc);
        assert_eq!(table.current_page, 1);
    }

    #[test]
    fn same_column_toggles_asc_desc_asc() {
        let mut table = MembersTable::new();

        table.handle_sort("firstName");
        assert_eq!(table.sort_order, SortOrder::Asc);

        table.handle_sort("firstName");
        assert_eq!(table.sort_order, SortOrder::Desc);

        table.handle_sort("firstName");
        assert_eq!(table.sort_order, SortOrder::Asc);
    }

    #[test]
    fn different_column_resets_to_ascending() {
        let mut table = MembersTable::new();
        table.handle_sort("firstName");
        table.handle_sort("firstName"); // now desc
        assert_eq!(table.sort_order, SortOrder::Desc);

        table.handle_sort("lastName");
        assert_eq!(table.sort_by.as_deref(), Some("lastName"));
        assert_eq!(table.sort_order, SortOrder::Asc);
    }

    #[test]
    fn sorting_returns_to_the_first_page() {
        let mut table = MembersTable::new();
        table.current_page = 5;
        table.handle_sort("age");
        assert_eq!(table.current_page, 1);
    }

    #[test]
    fn search_and_page_size_reset_the_page() {
        let mut table = MembersTable::new();
        table.current_page = 4;
        table.handle_search("ada");
        assert_eq!(table.current_page, 1);
        assert_eq!(table.search_query, "ada");

        table.current_page = 4;
        table.handle_items_per_page_change(25);
        assert_eq!(table.current_page, 1);
        assert_eq!(table.items_per_page, 25);
    }

    #[test]
    fn paging_honors_the_server_flags() {
        let mut table = MembersTable::new();

        // nothing loaded: both directions refuse
        assert!(!table.next_page());
        assert!(!table.prev_page());
        assert_eq!(table.current_page, 1);

        table.apply_pagination(PageInfo::new(2, 10, 50));
        table.current_page = 2;

        assert!(table.next_page());
        assert_eq!(table.current_page, 3);

        assert!(table.prev_page());
        assert_eq!(table.current_page, 2);
    }

    #[test]
    fn fetch_params_mirror_the_state() {
        let mut table = MembersTable::new();
        table.handle_search("test");
        table.handle_sort("email");
        table.go_to_page(3);

        let params = table.fetch_params();
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 10);
        assert_eq!(params.search, "test");
        assert_eq!(params.sort_by.as_deref(), Some("email"));
        assert_eq!(params.sort_order, SortOrder::Asc);
    }
}
