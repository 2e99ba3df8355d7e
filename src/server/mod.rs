//! REST backend for the alumni network.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, role checks, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and ownership checks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database and JWT keys)
//! - **Startup** (`startup`) - Tracing, database, admin bootstrap, CORS, and shutdown
//! - **Router** (`router`) - Axum route table and Swagger UI
//! - **Doc** (`doc`) - OpenAPI document
//! - **Util** (`util`) - Password hashing and token signing
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates the caller through `AuthGuard` and converts the DTO to params
//! 3. **Service** applies business rules and calls the data layer
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO wrapped in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
