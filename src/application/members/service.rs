//! Member management service — application-layer orchestration
//!
//! All member-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    CreateMemberDto, DomainError, DomainResult, ListMembersDto, Member,
    MemberRepositoryInterface, UpdateMemberPatch,
};
use crate::shared::PaginatedResult;

/// Member service — orchestrates all member use-cases.
///
/// Generic over `R: MemberRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct MemberService<R: MemberRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: MemberRepositoryInterface> MemberService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List members with search, sorting and pagination.
    pub async fn list_members(&self, dto: ListMembersDto) -> DomainResult<PaginatedResult<Member>> {
        self.repo.list_members(dto).await
    }

    /// Get a single member by ID.
    pub async fn get_member(&self, id: i32) -> DomainResult<Option<Member>> {
        self.repo.get_member_by_id(id).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a new member. A duplicate email surfaces as `Conflict`.
    pub async fn create_member(&self, dto: CreateMemberDto) -> DomainResult<Member> {
        let member = self.repo.create_member(dto).await?;
        info!(member_id = member.id, email = %member.email, "Member created");
        Ok(member)
    }

    /// Apply a partial update. Returns `None` when the id has no row.
    pub async fn update_member(
        &self,
        id: i32,
        patch: UpdateMemberPatch,
    ) -> DomainResult<Option<Member>> {
        let updated = self.repo.update_member(id, patch).await?;
        if updated.is_some() {
            info!(member_id = id, "Member updated");
        }
        Ok(updated)
    }

    /// Delete a member by ID.
    pub async fn delete_member(&self, id: i32) -> DomainResult<()> {
        self.repo.delete_member(id).await?;
        info!(member_id = id, "Member deleted");
        Ok(())
    }
}

// ── Helpers ─────────────────────────────────────────────────────

/// Parse a path identifier into a positive member id.
///
/// Unlike the lenient pagination parameters, a malformed id is a caller
/// error and is rejected.
pub fn parse_member_id(raw: &str) -> DomainResult<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DomainError::InvalidArgument(format!("Invalid member id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_member_id("1").unwrap(), 1);
        assert_eq!(parse_member_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!(
            parse_member_id("abc"),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_member_id("1.5"),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_member_id(""),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_non_positive_ids() {
        assert!(matches!(
            parse_member_id("0"),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_member_id("-7"),
            Err(DomainError::InvalidArgument(_))
        ));
    }
}
