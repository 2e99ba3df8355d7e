//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, so
//! create parents first (SQLite enforces the foreign keys).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::user::create_student(&db).await?;
//!
//!     // Create with dependencies
//!     let (poster, job) = factory::helpers::create_job_with_poster(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ada@example.com")
//!     .role(UserRole::Alumni)
//!     .active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users of any role
//! - `alumni_profile` / `admin_profile` - 1:1 role profiles
//! - `job` / `job_application` - Job board postings and applications
//! - `achievement` - Alumni achievements
//! - `donation` - Alumni donations
//! - `mentorship` - Mentorship requests
//! - `event` - Events and registrations
//! - `helpers` - Unique id generation and entities with dependencies

pub mod achievement;
pub mod admin_profile;
pub mod alumni_profile;
pub mod donation;
pub mod event;
pub mod helpers;
pub mod job;
pub mod job_application;
pub mod mentorship;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use achievement::create_achievement;
pub use admin_profile::create_admin_profile;
pub use alumni_profile::create_alumni_profile;
pub use donation::create_donation;
pub use event::{create_event, create_registration};
pub use job::create_job;
pub use job_application::create_application;
pub use mentorship::create_mentorship;
pub use user::{create_admin, create_alumni, create_student, create_user};
