//! Declarative test builder.
//!
//! Tables and fixtures are queued on the builder and created during the final `build()` call,
//! in the order they were added.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    continents: Vec<(String, String)>,
    favourites: Vec<(String, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder without tables or fixtures.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            continents: Vec::new(),
            favourites: Vec::new(),
        }
    }

    /// Add a custom entity table to the test database.
    ///
    /// Tables referenced by foreign keys must be added first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use countryapi_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), countryapi_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Continent)
    ///     .with_table(Country)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add all four tables: continent, country, favourite & visited.
    pub fn with_country_tables(self) -> Self {
        self.with_table(entity::prelude::Continent)
            .with_table(entity::prelude::Country)
            .with_table(entity::prelude::Favourite)
            .with_table(entity::prelude::Visited)
    }

    /// Queue a continent to be inserted during `build()`.
    pub fn with_continent(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.continents.push((name.into(), alias.into()));
        self
    }

    /// Queue a favourite of `user_id` to be inserted during `build()`.
    pub fn with_favourite(
        mut self,
        country_name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        self.favourites.push((country_name.into(), user_id.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with tables created and fixtures inserted
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;
        test.with_tables(self.tables).await?;

        for (name, alias) in &self.continents {
            test.continent().insert_continent(name, alias).await?;
        }

        for (country_name, user_id) in &self.favourites {
            test.favourite()
                .insert_favourite(country_name, user_id)
                .await?;
        }

        Ok(test)
    }
}
