//! Migration to create members table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create members table
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Members::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Members::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Members::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Members::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Members::Phone).string_len(32).not_null())
                    .col(ColumnDef::new(Members::Age).integer().not_null())
                    .col(ColumnDef::new(Members::City).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Members::Status)
                            .string_len(10)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Members::JoinDate).date().not_null())
                    .col(
                        ColumnDef::new(Members::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique email; duplicate inserts surface as a constraint violation
        manager
            .create_index(
                Index::create()
                    .name("idx_members_email")
                    .table(Members::Table)
                    .col(Members::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_members_status")
                    .table(Members::Table)
                    .col(Members::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_members_join_date")
                    .table(Members::Table)
                    .col(Members::JoinDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    City,
    Status,
    JoinDate,
    CreatedAt,
}
