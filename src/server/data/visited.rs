use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::visited::VisitedInDto, server::model::db::VisitedModel};

/// Persistence operations for visited countries
#[async_trait]
pub trait VisitedStore: Send + Sync {
    async fn get_by_id(&self, visited_id: i32) -> Result<Option<VisitedModel>, DbErr>;

    /// All visited records ordered by ID ascending
    async fn get_all(&self) -> Result<Vec<VisitedModel>, DbErr>;

    async fn get_by_country(&self, country_name: &str) -> Result<Vec<VisitedModel>, DbErr>;

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<VisitedModel>, DbErr>;

    async fn create(
        &self,
        user_id: &str,
        visited: VisitedInDto,
    ) -> Result<VisitedModel, DbErr>;

    async fn update(
        &self,
        visited_id: i32,
        user_id: &str,
        visited: VisitedInDto,
    ) -> Result<Option<VisitedModel>, DbErr>;

    async fn delete(&self, visited_id: i32) -> Result<DeleteResult, DbErr>;
}

pub struct VisitedRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VisitedRepository<'a, C> {
    /// Creates a new instance of [`VisitedRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> VisitedStore for VisitedRepository<'a, C> {
    async fn get_by_id(&self, visited_id: i32) -> Result<Option<VisitedModel>, DbErr> {
        entity::prelude::Visited::find_by_id(visited_id)
            .one(self.db)
            .await
    }

    async fn get_all(&self) -> Result<Vec<VisitedModel>, DbErr> {
        entity::prelude::Visited::find()
            .order_by_asc(entity::visited::Column::Id)
            .all(self.db)
            .await
    }

    async fn get_by_country(&self, country_name: &str) -> Result<Vec<VisitedModel>, DbErr> {
        entity::prelude::Visited::find()
            .filter(entity::visited::Column::CountryName.eq(country_name))
            .order_by_asc(entity::visited::Column::Id)
            .all(self.db)
            .await
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<VisitedModel>, DbErr> {
        entity::prelude::Visited::find()
            .filter(entity::visited::Column::UserId.eq(user_id))
            .order_by_asc(entity::visited::Column::Id)
            .all(self.db)
            .await
    }

    async fn create(
        &self,
        user_id: &str,
        visited: VisitedInDto,
    ) -> Result<VisitedModel, DbErr> {
        let visited = entity::visited::ActiveModel {
            country_name: ActiveValue::Set(visited.country_name),
            user_id: ActiveValue::Set(user_id.to_string()),
            ..Default::default()
        };

        visited.insert(self.db).await
    }

    async fn update(
        &self,
        visited_id: i32,
        user_id: &str,
        visited: VisitedInDto,
    ) -> Result<Option<VisitedModel>, DbErr> {
        let Some(existing) = entity::prelude::Visited::find_by_id(visited_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut visited_am = existing.into_active_model();
        visited_am.country_name = ActiveValue::Set(visited.country_name);
        visited_am.user_id = ActiveValue::Set(user_id.to_string());

        let visited = visited_am.update(self.db).await?;

        Ok(Some(visited))
    }

    async fn delete(&self, visited_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Visited::delete_by_id(visited_id)
            .exec(self.db)
            .await
    }
}
