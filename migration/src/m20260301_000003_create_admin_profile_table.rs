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
                    .table(AdminProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminProfile::Id))
                    .col(integer_uniq(AdminProfile::UserId))
                    .col(string_null(AdminProfile::Department))
                    .col(string_null(AdminProfile::Designation))
                    .col(string_null(AdminProfile::Phone))
                    .col(
                        timestamp_with_time_zone(AdminProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(AdminProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_profile_user_id")
                            .from(AdminProfile::Table, AdminProfile::UserId)
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
            .drop_table(Table::drop().table(AdminProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminProfile {
    Table,
    Id,
    UserId,
    Department,
    Designation,
    Phone,
    CreatedAt,
    UpdatedAt,
}
