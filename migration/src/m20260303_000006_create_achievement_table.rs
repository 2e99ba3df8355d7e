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
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(pk_auto(Achievement::Id))
                    .col(integer(Achievement::UserId))
                    .col(string(Achievement::Title))
                    .col(text_null(Achievement::Description))
                    .col(string_null(Achievement::Category))
                    .col(date_null(Achievement::AchievedOn))
                    .col(boolean(Achievement::IsVisible).default(true))
                    .col(
                        timestamp_with_time_zone(Achievement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_achievement_user_id")
                            .from(Achievement::Table, Achievement::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Achievement {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Category,
    AchievedOn,
    IsVisible,
    CreatedAt,
}
