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
                    .table(Mentorship::Table)
                    .if_not_exists()
                    .col(pk_auto(Mentorship::Id))
                    .col(integer(Mentorship::MentorId))
                    .col(integer(Mentorship::MenteeId))
                    .col(string(Mentorship::Topic))
                    .col(text_null(Mentorship::Message))
                    .col(string_len(Mentorship::Status, 16).default("pending"))
                    .col(
                        timestamp_with_time_zone(Mentorship::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Mentorship::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentorship_mentor_id")
                            .from(Mentorship::Table, Mentorship::MentorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentorship_mentee_id")
                            .from(Mentorship::Table, Mentorship::MenteeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_mentor_id")
                    .table(Mentorship::Table)
                    .col(Mentorship::MentorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_mentee_id")
                    .table(Mentorship::Table)
                    .col(Mentorship::MenteeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentorship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mentorship {
    Table,
    Id,
    MentorId,
    MenteeId,
    Topic,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
