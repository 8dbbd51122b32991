use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn visited(&self) -> VisitedFixtures<'_> {
        VisitedFixtures { test: self }
    }
}

pub struct VisitedFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> VisitedFixtures<'a> {
    pub async fn insert_visited(
        &self,
        country_name: &str,
        user_id: &str,
    ) -> Result<entity::visited::Model, TestError> {
        Ok(
            entity::prelude::Visited::insert(entity::visited::ActiveModel {
                country_name: ActiveValue::Set(country_name.to_string()),
                user_id: ActiveValue::Set(user_id.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
