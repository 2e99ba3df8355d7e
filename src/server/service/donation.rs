use sea_orm::DatabaseConnection;

use crate::server::{
    data::donation::DonationRepository,
    error::AppError,
    model::{
        donation::{CreateDonationParams, Donation, DonationSummary},
        user::User,
    },
};

pub struct DonationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn donate(&self, params: CreateDonationParams) -> Result<Donation, AppError> {
        let donation = DonationRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} donated {} cents",
            donation.donor_id,
            donation.amount_cents
        );

        Ok(donation)
    }

    /// The caller's donations and their total.
    pub async fn get_mine(&self, user: &User) -> Result<DonationSummary, AppError> {
        let repo = DonationRepository::new(self.db);

        Ok(DonationSummary {
            donations: repo.get_by_donor(user.id).await?,
            total_cents: repo.total_cents(Some(user.id)).await?,
        })
    }

    /// Every donation and the grand total. Masking happens at the DTO boundary.
    pub async fn get_all(&self) -> Result<DonationSummary, AppError> {
        let repo = DonationRepository::new(self.db);

        Ok(DonationSummary {
            donations: repo.get_all().await?,
            total_cents: repo.total_cents(None).await?,
        })
    }
}
