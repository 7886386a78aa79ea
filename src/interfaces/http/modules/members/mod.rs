//! Members module — CRUD with pagination, search and sorting

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
