//! Helpers shared by the service and middleware layers.

pub mod jwt;
pub mod password;
