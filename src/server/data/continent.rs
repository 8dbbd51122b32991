use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::continent::ContinentInDto, server::model::db::ContinentModel};

/// Persistence operations for continents
#[async_trait]
pub trait ContinentStore: Send + Sync {
    async fn get_by_id(&self, continent_id: i32) -> Result<Option<ContinentModel>, DbErr>;

    async fn get_by_name(&self, name: &str) -> Result<Option<ContinentModel>, DbErr>;

    async fn get_by_alias(&self, alias: &str) -> Result<Option<ContinentModel>, DbErr>;

    /// All continents ordered by name ascending
    async fn get_all(&self) -> Result<Vec<ContinentModel>, DbErr>;

    async fn create(&self, continent: ContinentInDto) -> Result<ContinentModel, DbErr>;

    /// Replaces name & alias, returns `None` if the continent does not exist
    async fn update(
        &self,
        continent_id: i32,
        continent: ContinentInDto,
    ) -> Result<Option<ContinentModel>, DbErr>;

    /// Deletes a continent
    ///
    /// Returns OK regardless of the continent existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    async fn delete(&self, continent_id: i32) -> Result<DeleteResult, DbErr>;
}

pub struct ContinentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContinentRepository<'a, C> {
    /// Creates a new instance of [`ContinentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> ContinentStore for ContinentRepository<'a, C> {
    async fn get_by_id(&self, continent_id: i32) -> Result<Option<ContinentModel>, DbErr> {
        entity::prelude::Continent::find_by_id(continent_id)
            .one(self.db)
            .await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<ContinentModel>, DbErr> {
        entity::prelude::Continent::find()
            .filter(entity::continent::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Option<ContinentModel>, DbErr> {
        entity::prelude::Continent::find()
            .filter(entity::continent::Column::Alias.eq(alias))
            .one(self.db)
            .await
    }

    async fn get_all(&self) -> Result<Vec<ContinentModel>, DbErr> {
        entity::prelude::Continent::find()
            .order_by_asc(entity::continent::Column::Name)
            .all(self.db)
            .await
    }

    async fn create(&self, continent: ContinentInDto) -> Result<ContinentModel, DbErr> {
        let continent = entity::continent::ActiveModel {
            name: ActiveValue::Set(continent.name),
            alias: ActiveValue::Set(continent.alias),
            ..Default::default()
        };

        continent.insert(self.db).await
    }

    async fn update(
        &self,
        continent_id: i32,
        continent: ContinentInDto,
    ) -> Result<Option<ContinentModel>, DbErr> {
        let Some(existing) = entity::prelude::Continent::find_by_id(continent_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut continent_am = existing.into_active_model();
        continent_am.name = ActiveValue::Set(continent.name);
        continent_am.alias = ActiveValue::Set(continent.alias);

        let continent = continent_am.update(self.db).await?;

        Ok(Some(continent))
    }

    async fn delete(&self, continent_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Continent::delete_by_id(continent_id)
            .exec(self.db)
            .await
    }
}
