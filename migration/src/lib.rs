pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_alumni_profile_table;
mod m20260301_000003_create_admin_profile_table;
mod m20260302_000004_create_job_table;
mod m20260302_000005_create_job_application_table;
mod m20260303_000006_create_achievement_table;
mod m20260303_000007_create_donation_table;
mod m20260304_000008_create_mentorship_table;
mod m20260305_000009_create_event_table;
mod m20260305_000010_create_event_registration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_alumni_profile_table::Migration),
            Box::new(m20260301_000003_create_admin_profile_table::Migration),
            Box::new(m20260302_000004_create_job_table::Migration),
            Box::new(m20260302_000005_create_job_application_table::Migration),
            Box::new(m20260303_000006_create_achievement_table::Migration),
            Box::new(m20260303_000007_create_donation_table::Migration),
            Box::new(m20260304_000008_create_mentorship_table::Migration),
            Box::new(m20260305_000009_create_event_table::Migration),
            Box::new(m20260305_000010_create_event_registration_table::Migration),
        ]
    }
}
