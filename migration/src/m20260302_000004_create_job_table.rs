use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::PostedBy))
                    .col(string(Job::Title))
                    .col(string(Job::Company))
                    .col(string_null(Job::Location))
                    .col(string_len(Job::JobType, 16))
                    .col(text(Job::Description))
                    .col(text_null(Job::Requirements))
                    .col(string_null(Job::Salary))
                    .col(timestamp_with_time_zone_null(Job::ApplicationDeadline))
                    .col(boolean(Job::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Job::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Job::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_posted_by")
                            .from(Job::Table, Job::PostedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing filters only ever look at active jobs of one type
        manager
            .create_index(
                Index::create()
                    .name("idx_job_active_type")
                    .table(Job::Table)
                    .col(Job::IsActive)
                    .col(Job::JobType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    PostedBy,
    Title,
    Company,
    Location,
    JobType,
    Description,
    Requirements,
    Salary,
    ApplicationDeadline,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
