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
                    .table(AlumniProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(AlumniProfile::Id))
                    .col(integer_uniq(AlumniProfile::UserId))
                    .col(integer(AlumniProfile::GraduationYear))
                    .col(string_null(AlumniProfile::Degree))
                    .col(string_null(AlumniProfile::Department))
                    .col(string_null(AlumniProfile::CurrentCompany))
                    .col(string_null(AlumniProfile::JobTitle))
                    .col(string_null(AlumniProfile::Location))
                    .col(json(AlumniProfile::Skills))
                    .col(string_null(AlumniProfile::LinkedinUrl))
                    .col(text_null(AlumniProfile::Bio))
                    .col(boolean(AlumniProfile::IsVisible).default(true))
                    .col(
                        timestamp_with_time_zone(AlumniProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(AlumniProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alumni_profile_user_id")
                            .from(AlumniProfile::Table, AlumniProfile::UserId)
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
            .drop_table(Table::drop().table(AlumniProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AlumniProfile {
    Table,
    Id,
    UserId,
    GraduationYear,
    Degree,
    Department,
    CurrentCompany,
    JobTitle,
    Location,
    Skills,
    LinkedinUrl,
    Bio,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}
