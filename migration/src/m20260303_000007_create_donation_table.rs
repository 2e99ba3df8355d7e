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
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(integer(Donation::DonorId))
                    .col(big_integer(Donation::AmountCents))
                    .col(string(Donation::Purpose))
                    .col(text_null(Donation::Message))
                    .col(boolean(Donation::IsAnonymous).default(false))
                    .col(
                        timestamp_with_time_zone(Donation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donation_donor_id")
                            .from(Donation::Table, Donation::DonorId)
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
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    Table,
    Id,
    DonorId,
    AmountCents,
    Purpose,
    Message,
    IsAnonymous,
    CreatedAt,
}
