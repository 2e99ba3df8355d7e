use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_user_table::User, m20260302_000004_create_job_table::Job};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplication::Id))
                    .col(integer(JobApplication::JobId))
                    .col(integer(JobApplication::StudentId))
                    .col(text_null(JobApplication::CoverLetter))
                    .col(string_len(JobApplication::Status, 16).default("applied"))
                    .col(
                        timestamp_with_time_zone(JobApplication::AppliedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_job_id")
                            .from(JobApplication::Table, JobApplication::JobId)
                            .to(Job::Table, Job::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_student_id")
                            .from(JobApplication::Table, JobApplication::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per student per job
        manager
            .create_index(
                Index::create()
                    .name("idx_job_application_unique")
                    .table(JobApplication::Table)
                    .col(JobApplication::JobId)
                    .col(JobApplication::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JobApplication {
    Table,
    Id,
    JobId,
    StudentId,
    CoverLetter,
    Status,
    AppliedAt,
}
