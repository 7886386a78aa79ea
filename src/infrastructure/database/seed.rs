//! Demo data seeding
//!
//! Populates an empty members table with generated demo records so a fresh
//! checkout has something to page through.

use chrono::NaiveDate;
use rand::Rng;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::member;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Ben", "Carla", "David", "Emma", "Felix", "Grace", "Henry", "Iris", "Jonas",
];
const LAST_NAMES: &[&str] = &[
    "Anderson", "Brooks", "Carter", "Dawson", "Ellis", "Foster", "Grant", "Hayes", "Ingram",
    "Jensen",
];
const CITIES: &[&str] = &[
    "Bangkok", "Chiang Mai", "Phuket", "Khon Kaen", "Korat", "Hat Yai", "Udon Thani",
    "Surat Thani", "Rayong", "Chonburi",
];

/// Insert `count` generated members when the table is empty.
///
/// Returns the number of rows inserted (0 when the table already had data).
pub async fn seed_demo_members(db: &DatabaseConnection, count: u32) -> Result<u32, DbErr> {
    if count == 0 {
        return Ok(0);
    }

    let existing = member::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "Members table already populated, skipping seed");
        return Ok(0);
    }

    let now = chrono::Utc::now();

    // Scoped so the thread-local RNG is gone before the insert await
    let models = {
        let mut rng = rand::thread_rng();
        let mut models = Vec::with_capacity(count as usize);
        for i in 1..=count {
            let join_date = NaiveDate::from_ymd_opt(
                2020 + rng.gen_range(0..5),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .unwrap_or_default();

            models.push(member::ActiveModel {
                id: NotSet,
                first_name: Set(FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string()),
                last_name: Set(LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string()),
                email: Set(format!("member{}@example.com", i)),
                phone: Set(format!("08{:08}", rng.gen_range(0..100_000_000u32))),
                age: Set(rng.gen_range(20..70)),
                city: Set(CITIES[rng.gen_range(0..CITIES.len())].to_string()),
                status: Set(if rng.gen_bool(0.7) {
                    member::MemberStatus::Active
                } else {
                    member::MemberStatus::Inactive
                }),
                join_date: Set(join_date),
                created_at: Set(now),
            });
        }
        models
    };

    member::Entity::insert_many(models).exec(db).await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    #[tokio::test]
    async fn seeds_only_an_empty_table() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let inserted = seed_demo_members(&db, 25).await.unwrap();
        assert_eq!(inserted, 25);
        assert_eq!(member::Entity::find().count(&db).await.unwrap(), 25);

        // Second run is a no-op
        let inserted = seed_demo_members(&db, 25).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(member::Entity::find().count(&db).await.unwrap(), 25);
    }
}
