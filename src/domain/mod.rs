//! Domain layer: core entities, value objects and repository interfaces.

pub mod error;
pub mod member;

pub use error::{DomainError, DomainResult};
pub use member::{
    CreateMemberDto, ListMembersDto, Member, MemberRepositoryInterface, MemberSortKey,
    MemberStatus, SortOrder, UpdateMemberPatch,
};
