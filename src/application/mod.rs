//! Application layer: use-case orchestration on top of the domain.

pub mod members;

pub use members::{parse_member_id, MemberService};
