use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory::{DEFAULT_AREA, DEFAULT_INHABITANTS, DEFAULT_LANGUAGE, DEFAULT_PKB},
    TestContext,
};

impl TestContext {
    pub fn country(&self) -> CountryFixtures<'_> {
        CountryFixtures { test: self }
    }
}

pub struct CountryFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> CountryFixtures<'a> {
    /// Insert a country with the given statistics
    ///
    /// The continent must already exist.
    pub async fn insert_country(
        &self,
        name: &str,
        continent_id: i32,
        user_id: &str,
        inhabitants: i64,
        area: i64,
        pkb: i64,
    ) -> Result<entity::country::Model, TestError> {
        Ok(
            entity::prelude::Country::insert(entity::country::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                inhabitants: ActiveValue::Set(inhabitants),
                language: ActiveValue::Set(DEFAULT_LANGUAGE.to_string()),
                area: ActiveValue::Set(area),
                pkb: ActiveValue::Set(pkb),
                continent_id: ActiveValue::Set(continent_id),
                user_id: ActiveValue::Set(user_id.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a country with default statistics
    pub async fn insert_mock_country(
        &self,
        name: &str,
        continent_id: i32,
        user_id: &str,
    ) -> Result<entity::country::Model, TestError> {
        self.insert_country(
            name,
            continent_id,
            user_id,
            DEFAULT_INHABITANTS,
            DEFAULT_AREA,
            DEFAULT_PKB,
        )
        .await
    }
}
