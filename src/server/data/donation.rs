//! Donation repository.
//!
//! Totals are summed in Rust from the selected `amount_cents` column.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::donation::{CreateDonationParams, Donation};

pub struct DonationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDonationParams) -> Result<Donation, DbErr> {
        let donation = entity::donation::ActiveModel {
            donor_id: ActiveValue::Set(params.donor_id),
            amount_cents: ActiveValue::Set(params.amount_cents),
            purpose: ActiveValue::Set(params.purpose),
            message: ActiveValue::Set(params.message),
            is_anonymous: ActiveValue::Set(params.is_anonymous),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let donor = entity::prelude::User::find_by_id(donation.donor_id)
            .one(self.db)
            .await?;

        Ok(Donation::from_entity(donation, donor))
    }

    /// Gets a donor's donations, newest first.
    pub async fn get_by_donor(&self, donor_id: i32) -> Result<Vec<Donation>, DbErr> {
        let rows = entity::prelude::Donation::find()
            .filter(entity::donation::Column::DonorId.eq(donor_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::donation::Column::CreatedAt)
            .order_by_desc(entity::donation::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(donation, donor)| Donation::from_entity(donation, donor))
            .collect())
    }

    /// Gets every donation with its donor, newest first.
    pub async fn get_all(&self) -> Result<Vec<Donation>, DbErr> {
        let rows = entity::prelude::Donation::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::donation::Column::CreatedAt)
            .order_by_desc(entity::donation::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(donation, donor)| Donation::from_entity(donation, donor))
            .collect())
    }

    /// Sums all donated cents, optionally for a single donor.
    pub async fn total_cents(&self, donor_id: Option<i32>) -> Result<i64, DbErr> {
        let mut query = entity::prelude::Donation::find()
            .select_only()
            .column(entity::donation::Column::AmountCents);

        if let Some(donor_id) = donor_id {
            query = query.filter(entity::donation::Column::DonorId.eq(donor_id));
        }

        let amounts: Vec<i64> = query.into_tuple().all(self.db).await?;

        Ok(amounts.into_iter().sum())
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Donation::find().count(self.db).await
    }
}
