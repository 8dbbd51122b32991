//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` wraps a connection to a fresh in-memory SQLite
//! database. Fixture helpers hang off the context, see [`crate::fixtures`].

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_country_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert fixtures
/// let europe = test.continent().insert_continent("Europe", "EU").await?;
/// test.country().insert_mock_country("France", europe.id, "user-1").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context without tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Execute CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
