//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation that needs the database, ownership and role rules
//! - **Orchestration**: Coordinating multiple repository calls for one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod achievement;
pub mod admin;
pub mod alumni;
pub mod auth;
pub mod donation;
pub mod event;
pub mod job;
pub mod mentorship;

#[cfg(test)]
mod test;
