use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, AlumniProfile};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(AlumniProfile)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference) since SQLite enforces foreign keys.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table together with both profile tables.
    ///
    /// Use this when testing authentication, profile, or admin user management
    /// functionality.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(AlumniProfile)
            .with_table(AdminProfile)
    }

    /// Adds the tables required for job board operations.
    ///
    /// Adds `User`, `Job` and `JobApplication` in dependency order.
    pub fn with_job_tables(self) -> Self {
        self.with_table(User)
            .with_table(Job)
            .with_table(JobApplication)
    }

    /// Adds the tables required for event operations.
    ///
    /// Adds `User`, `Event` and `EventRegistration` in dependency order.
    pub fn with_event_tables(self) -> Self {
        self.with_table(User)
            .with_table(Event)
            .with_table(EventRegistration)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Used by router-level tests and the admin dashboard statistics, which touch
    /// every entity.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Job)
            .with_table(JobApplication)
            .with_table(Achievement)
            .with_table(Donation)
            .with_table(Mentorship)
            .with_table(Event)
            .with_table(EventRegistration)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
