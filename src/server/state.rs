//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed
//! by the request handlers. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT keys for issuing and verifying bearer tokens

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::util::jwt::JwtKeys;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<JwtKeys>` is a reference-counted pointer to the signing keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for bearer tokens.
    pub jwt: Arc<JwtKeys>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Keys built from the configured secret and token lifetime
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
        }
    }
}
