//! Request and response DTOs shared by every client of the API.
//!
//! These types define the JSON contract of the REST surface. Every response is an
//! envelope carrying `success`, an optional `message` and the entity payload, with
//! camelCase field names.

pub mod achievement;
pub mod admin;
pub mod alumni;
pub mod api;
pub mod auth;
pub mod donation;
pub mod event;
pub mod job;
pub mod mentorship;
pub mod user;
