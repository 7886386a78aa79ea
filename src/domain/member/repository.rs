use async_trait::async_trait;

use super::{CreateMemberDto, ListMembersDto, Member, UpdateMemberPatch};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait MemberRepositoryInterface: Send + Sync {
    /// List members with search, sorting and pagination. The count and the
    /// page query must evaluate the same filter.
    async fn list_members(&self, dto: ListMembersDto) -> DomainResult<PaginatedResult<Member>>;

    async fn get_member_by_id(&self, id: i32) -> DomainResult<Option<Member>>;

    /// Insert a new member. A duplicate email yields `Conflict`.
    async fn create_member(&self, dto: CreateMemberDto) -> DomainResult<Member>;

    /// Apply a partial update; returns `None` when the id has no row.
    async fn update_member(&self, id: i32, patch: UpdateMemberPatch)
        -> DomainResult<Option<Member>>;

    /// Remove a member; a missing id yields `NotFound`.
    async fn delete_member(&self, id: i32) -> DomainResult<()>;
}
