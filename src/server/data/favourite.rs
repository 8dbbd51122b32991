use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::favourite::FavouriteInDto, server::model::db::FavouriteModel};

/// Persistence operations for favourite countries
#[async_trait]
pub trait FavouriteStore: Send + Sync {
    async fn get_by_id(&self, favourite_id: i32) -> Result<Option<FavouriteModel>, DbErr>;

    /// All favourites ordered by ID ascending
    async fn get_all(&self) -> Result<Vec<FavouriteModel>, DbErr>;

    async fn get_by_country(&self, country_name: &str) -> Result<Vec<FavouriteModel>, DbErr>;

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<FavouriteModel>, DbErr>;

    async fn create(
        &self,
        user_id: &str,
        favourite: FavouriteInDto,
    ) -> Result<FavouriteModel, DbErr>;

    async fn update(
        &self,
        favourite_id: i32,
        user_id: &str,
        favourite: FavouriteInDto,
    ) -> Result<Option<FavouriteModel>, DbErr>;

    async fn delete(&self, favourite_id: i32) -> Result<DeleteResult, DbErr>;
}

pub struct FavouriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavouriteRepository<'a, C> {
    /// Creates a new instance of [`FavouriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> FavouriteStore for FavouriteRepository<'a, C> {
    async fn get_by_id(&self, favourite_id: i32) -> Result<Option<FavouriteModel>, DbErr> {
        entity::prelude::Favourite::find_by_id(favourite_id)
            .one(self.db)
            .await
    }

    async fn get_all(&self) -> Result<Vec<FavouriteModel>, DbErr> {
        entity::prelude::Favourite::find()
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await
    }

    async fn get_by_country(&self, country_name: &str) -> Result<Vec<FavouriteModel>, DbErr> {
        entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::CountryName.eq(country_name))
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<FavouriteModel>, DbErr> {
        entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await
    }

    async fn create(
        &self,
        user_id: &str,
        favourite: FavouriteInDto,
    ) -> Result<FavouriteModel, DbErr> {
        let favourite = entity::favourite::ActiveModel {
            country_name: ActiveValue::Set(favourite.country_name),
            user_id: ActiveValue::Set(user_id.to_string()),
            ..Default::default()
        };

        favourite.insert(self.db).await
    }

    async fn update(
        &self,
        favourite_id: i32,
        user_id: &str,
        favourite: FavouriteInDto,
    ) -> Result<Option<FavouriteModel>, DbErr> {
        let Some(existing) = entity::prelude::Favourite::find_by_id(favourite_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut favourite_am = existing.into_active_model();
        favourite_am.country_name = ActiveValue::Set(favourite.country_name);
        favourite_am.user_id = ActiveValue::Set(user_id.to_string());

        let favourite = favourite_am.update(self.db).await?;

        Ok(Some(favourite))
    }

    async fn delete(&self, favourite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favourite::delete_by_id(favourite_id)
            .exec(self.db)
            .await
    }
}
