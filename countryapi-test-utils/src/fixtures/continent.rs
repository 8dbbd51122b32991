use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn continent(&self) -> ContinentFixtures<'_> {
        ContinentFixtures { test: self }
    }
}

pub struct ContinentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ContinentFixtures<'a> {
    pub async fn insert_continent(
        &self,
        name: &str,
        alias: &str,
    ) -> Result<entity::continent::Model, TestError> {
        Ok(
            entity::prelude::Continent::insert(entity::continent::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                alias: ActiveValue::Set(alias.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
