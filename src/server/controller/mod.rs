//! HTTP request handlers.
//!
//! Controllers extract the request, authenticate it with `AuthGuard`, convert DTOs to
//! domain parameters, call the service layer and wrap the result in a response
//! envelope. Business rules live in the services.

pub mod achievement;
pub mod admin;
pub mod alumni;
pub mod auth;
pub mod donation;
pub mod event;
pub mod extract;
pub mod health;
pub mod job;
pub mod mentorship;

#[cfg(test)]
mod test;
