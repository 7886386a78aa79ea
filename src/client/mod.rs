//! Client-side table helpers
//!
//! State and query helpers for consumers that render the paginated members
//! table (web UI, TUI, scripts). They mirror the server's pagination
//! contract so both sides agree on what a page is.

pub mod query;
pub mod table;

pub use query::{build_query_params, calculate_display_range, DisplayRange, FetchMembersParams};
pub use table::MembersTable;
