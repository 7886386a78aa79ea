//! Member use-cases

pub mod service;

pub use service::{parse_member_id, MemberService};
