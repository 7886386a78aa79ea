pub mod pagination;
pub mod patch;

pub use pagination::{PageInfo, PageRequest, PaginatedResult};
pub use patch::Patch;
