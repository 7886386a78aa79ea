//! SeaORM-backed member repository.
//!
//! Owns the query-building half of the list contract: the disjunctive
//! substring filter, the ORDER BY derived from the resolved sort key, and
//! the count + page pair that always evaluates one shared filter.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    CreateMemberDto, DomainError, DomainResult, ListMembersDto, Member,
    MemberRepositoryInterface, MemberSortKey, MemberStatus, SortOrder, UpdateMemberPatch,
};
use crate::infrastructure::database::entities::member;
use crate::shared::{PaginatedResult, Patch};

pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: member::MemberStatus) -> MemberStatus {
    match status {
        member::MemberStatus::Active => MemberStatus::Active,
        member::MemberStatus::Inactive => MemberStatus::Inactive,
    }
}

fn domain_status_to_entity(status: MemberStatus) -> member::MemberStatus {
    match status {
        MemberStatus::Active => member::MemberStatus::Active,
        MemberStatus::Inactive => member::MemberStatus::Inactive,
    }
}

fn member_model_to_domain(model: member::Model) -> Member {
    Member {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        age: model.age,
        city: model.city,
        status: entity_status_to_domain(model.status),
        join_date: model.join_date,
        created_at: model.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate")
}

// ── Query building ──────────────────────────────────────────────

/// Escape LIKE metacharacters so user input always matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Disjunctive substring filter over the four searchable text columns:
/// first name, last name, email, city.
fn search_condition(search: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(search));
    let like = |col: member::Column| {
        Expr::col(col).like(LikeExpr::new(pattern.clone()).escape('\\'))
    };
    Condition::any()
        .add(like(member::Column::FirstName))
        .add(like(member::Column::LastName))
        .add(like(member::Column::Email))
        .add(like(member::Column::City))
}

fn sort_column(key: MemberSortKey) -> member::Column {
    match key {
        MemberSortKey::Id => member::Column::Id,
        MemberSortKey::FirstName => member::Column::FirstName,
        MemberSortKey::LastName => member::Column::LastName,
        MemberSortKey::Email => member::Column::Email,
        MemberSortKey::Phone => member::Column::Phone,
        MemberSortKey::Age => member::Column::Age,
        MemberSortKey::City => member::Column::City,
        MemberSortKey::Status => member::Column::Status,
        MemberSortKey::JoinDate => member::Column::JoinDate,
        MemberSortKey::CreatedAt => member::Column::CreatedAt,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl MemberRepositoryInterface for MemberRepository {
    async fn list_members(&self, dto: ListMembersDto) -> DomainResult<PaginatedResult<Member>> {
        let mut query = member::Entity::find();

        if !dto.search.is_empty() {
            query = query.filter(search_condition(&dto.search));
        }

        let column = sort_column(dto.sort_key);
        query = match dto.sort_order {
            SortOrder::Asc => query.order_by_asc(column),
            SortOrder::Desc => query.order_by_desc(column),
        };

        // Count and page run against the same filter; totals stay
        // consistent with the returned rows within this request.
        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let models = query
            .offset(dto.offset())
            .limit(dto.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<Member> = models.into_iter().map(member_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, dto.page, dto.limit))
    }

    async fn get_member_by_id(&self, id: i32) -> DomainResult<Option<Member>> {
        let model = member::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(member_model_to_domain))
    }

    async fn create_member(&self, dto: CreateMemberDto) -> DomainResult<Member> {
        let now = Utc::now();
        let join_date = dto.join_date.unwrap_or_else(|| now.date_naive());
        let status = dto.status.unwrap_or_default();

        let new_member = member::ActiveModel {
            id: NotSet,
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email),
            phone: Set(dto.phone),
            age: Set(dto.age),
            city: Set(dto.city),
            status: Set(domain_status_to_entity(status)),
            join_date: Set(join_date),
            created_at: Set(now),
        };

        let created = new_member.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("Email already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(member_model_to_domain(created))
    }

    async fn update_member(
        &self,
        id: i32,
        patch: UpdateMemberPatch,
    ) -> DomainResult<Option<Member>> {
        let existing = member::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        // Nothing to apply; return the row as-is
        if patch.is_empty() {
            return Ok(Some(member_model_to_domain(existing)));
        }

        let mut active: member::ActiveModel = existing.into();

        if let Patch::Value(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Patch::Value(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Patch::Value(email) = patch.email {
            active.email = Set(email);
        }
        if let Patch::Value(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Patch::Value(age) = patch.age {
            active.age = Set(age);
        }
        if let Patch::Value(city) = patch.city {
            active.city = Set(city);
        }
        if let Patch::Value(status) = patch.status {
            active.status = Set(domain_status_to_entity(status));
        }
        if let Patch::Value(join_date) = patch.join_date {
            active.join_date = Set(join_date);
        }

        let updated = active.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("Email already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(Some(member_model_to_domain(updated)))
    }

    async fn delete_member(&self, id: i32) -> DomainResult<()> {
        let result = member::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Member",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn repo() -> MemberRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        MemberRepository::new(db)
    }

    fn dto(first: &str, last: &str, email: &str, city: &str) -> CreateMemberDto {
        CreateMemberDto {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: "0812345678".to_string(),
            age: 30,
            city: city.to_string(),
            status: None,
            join_date: None,
        }
    }

    fn list(search: &str, sort_by: Option<&str>, sort_order: Option<&str>) -> ListMembersDto {
        ListMembersDto::from_raw(
            None,
            None,
            Some(search.to_string()),
            sort_by,
            sort_order,
        )
    }

    #[test]
    fn escape_like_neutralizes_metacharacters() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let repo = repo().await;
        let member = repo
            .create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();

        assert!(member.id > 0);
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.join_date, member.created_at.date_naive());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = repo().await;
        repo.create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();

        let err = repo
            .create_member(dto("Grace", "Hopper", "ada@example.com", "Arlington"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // The losing insert must not have changed the table
        let result = repo.list_members(list("", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 1);
    }

    #[tokio::test]
    async fn search_matches_any_of_the_four_fields() {
        let repo = repo().await;
        repo.create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();
        repo.create_member(dto("Grace", "Hopper", "grace@example.com", "Arlington"))
            .await
            .unwrap();
        repo.create_member(dto("Linus", "Adams", "linus@example.com", "Helsinki"))
            .await
            .unwrap();

        // substring of a first name and of a last name
        let result = repo.list_members(list("Ada", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 2);

        // substring of a city only
        let result = repo.list_members(list("Helsin", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 1);
        assert_eq!(result.items[0].first_name, "Linus");

        // substring of an email
        let result = repo.list_members(list("grace@", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 1);

        // no match
        let result = repo.list_members(list("nobody", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 0);
        assert_eq!(result.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let repo = repo().await;
        repo.create_member(dto("Percy", "Cent", "percy@example.com", "100% City"))
            .await
            .unwrap();
        repo.create_member(dto("Una", "Score", "una@example.com", "Underscore"))
            .await
            .unwrap();

        // `%` must not act as a wildcard
        let result = repo.list_members(list("100%", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 1);
        assert_eq!(result.items[0].city, "100% City");

        // a bare `%` matches only rows literally containing one
        let result = repo.list_members(list("%", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 1);

        // `_` must not match arbitrary single characters
        let result = repo.list_members(list("U_a", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 0);
    }

    #[tokio::test]
    async fn unrecognized_sort_key_behaves_like_no_sort_key() {
        let repo = repo().await;
        repo.create_member(dto("Zoe", "Young", "zoe@example.com", "Zagreb"))
            .await
            .unwrap();
        repo.create_member(dto("Abe", "Old", "abe@example.com", "Austin"))
            .await
            .unwrap();

        let with_bogus = repo
            .list_members(list("", Some("invalidField"), None))
            .await
            .unwrap();
        let with_none = repo.list_members(list("", None, None)).await.unwrap();

        let bogus_ids: Vec<i32> = with_bogus.items.iter().map(|m| m.id).collect();
        let none_ids: Vec<i32> = with_none.items.iter().map(|m| m.id).collect();
        assert_eq!(bogus_ids, none_ids);
        // id-ascending fallback: insertion order
        assert!(none_ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn sorts_by_requested_column_and_order() {
        let repo = repo().await;
        let mut ages = vec![45, 23, 61];
        for (i, age) in ages.iter().enumerate() {
            let mut d = dto("M", "N", &format!("m{}@example.com", i), "Town");
            d.age = *age;
            repo.create_member(d).await.unwrap();
        }

        let result = repo
            .list_members(list("", Some("age"), Some("desc")))
            .await
            .unwrap();
        let sorted: Vec<i32> = result.items.iter().map(|m| m.age).collect();
        ages.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sorted, ages);
    }

    #[tokio::test]
    async fn pages_beyond_the_end_are_empty_not_errors() {
        let repo = repo().await;
        for i in 0..3 {
            repo.create_member(dto("A", "B", &format!("p{}@example.com", i), "Town"))
                .await
                .unwrap();
        }

        let dto = ListMembersDto::from_raw(Some("99"), Some("10"), None, None, None);
        let result = repo.list_members(dto).await.unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.pagination.total, 3);
        assert_eq!(result.pagination.page, 99);
        assert!(!result.pagination.has_next);
        assert!(result.pagination.has_prev);
    }

    #[tokio::test]
    async fn pagination_slices_rows() {
        let repo = repo().await;
        for i in 0..7 {
            repo.create_member(dto("A", "B", &format!("s{}@example.com", i), "Town"))
                .await
                .unwrap();
        }

        let page2 = ListMembersDto::from_raw(Some("2"), Some("3"), None, None, None);
        let result = repo.list_members(page2).await.unwrap();
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.pagination.total, 7);
        assert_eq!(result.pagination.total_pages, 3);
        assert!(result.pagination.has_next);
        assert!(result.pagination.has_prev);
        let ids: Vec<i32> = result.items.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let repo = repo().await;
        let created = repo
            .create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();

        let patch = UpdateMemberPatch {
            city: Patch::Value("Cambridge".to_string()),
            age: Patch::Value(37),
            ..Default::default()
        };
        let updated = repo.update_member(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.city, "Cambridge");
        assert_eq!(updated.age, 37);
        assert_eq!(updated.first_name, "Ada");
        assert_eq!(updated.email, "ada@example.com");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_member_returns_none() {
        let repo = repo().await;
        let patch = UpdateMemberPatch {
            city: Patch::Value("Nowhere".to_string()),
            ..Default::default()
        };
        assert!(repo.update_member(999, patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_to_taken_email_is_a_conflict() {
        let repo = repo().await;
        repo.create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();
        let other = repo
            .create_member(dto("Grace", "Hopper", "grace@example.com", "Arlington"))
            .await
            .unwrap();

        let patch = UpdateMemberPatch {
            email: Patch::Value("ada@example.com".to_string()),
            ..Default::default()
        };
        let err = repo.update_member(other.id, patch).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_missing_member_is_not_found() {
        let repo = repo().await;
        repo.create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();

        let err = repo.delete_member(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        // Table untouched
        let result = repo.list_members(list("", None, None)).await.unwrap();
        assert_eq!(result.pagination.total, 1);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = repo().await;
        let created = repo
            .create_member(dto("Ada", "Lovelace", "ada@example.com", "London"))
            .await
            .unwrap();

        repo.delete_member(created.id).await.unwrap();
        assert!(repo.get_member_by_id(created.id).await.unwrap().is_none());
    }
}
