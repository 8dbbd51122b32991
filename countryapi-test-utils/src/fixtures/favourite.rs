use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favourite(&self) -> FavouriteFixtures<'_> {
        FavouriteFixtures { test: self }
    }
}

pub struct FavouriteFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> FavouriteFixtures<'a> {
    /// Insert a favourite directly, bypassing the one-per-user check
    pub async fn insert_favourite(
        &self,
        country_name: &str,
        user_id: &str,
    ) -> Result<entity::favourite::Model, TestError> {
        Ok(
            entity::prelude::Favourite::insert(entity::favourite::ActiveModel {
                country_name: ActiveValue::Set(country_name.to_string()),
                user_id: ActiveValue::Set(user_id.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
