use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::country::CountryInDto,
    server::model::db::{ContinentModel, CountryModel},
};

/// Country with the continent it references, `None` only if the reference dangles
pub type CountryWithContinent = (CountryModel, Option<ContinentModel>);

/// Persistence operations for countries
///
/// Every list scan is ordered by country name ascending, range filters are inclusive on
/// both bounds.
#[async_trait]
pub trait CountryStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CountryWithContinent>, DbErr>;

    async fn get_by_id(&self, country_id: i32) -> Result<Option<CountryWithContinent>, DbErr>;

    async fn get_by_name(&self, name: &str) -> Result<Option<CountryWithContinent>, DbErr>;

    async fn get_by_continent(&self, continent_id: i32) -> Result<Vec<CountryModel>, DbErr>;

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<CountryModel>, DbErr>;

    async fn get_by_inhabitants(&self, inhabitants: i64) -> Result<Vec<CountryModel>, DbErr>;

    async fn get_by_language(&self, language: &str) -> Result<Vec<CountryModel>, DbErr>;

    async fn get_by_area(&self, area: i64) -> Result<Vec<CountryModel>, DbErr>;

    async fn get_by_pkb(&self, pkb: i64) -> Result<Vec<CountryModel>, DbErr>;

    async fn filter_by_inhabitants(&self, start: i64, stop: i64)
        -> Result<Vec<CountryModel>, DbErr>;

    async fn filter_by_area(&self, start: i64, stop: i64) -> Result<Vec<CountryModel>, DbErr>;

    async fn filter_by_pkb(&self, start: i64, stop: i64) -> Result<Vec<CountryModel>, DbErr>;

    /// Continent lookup backing the referential check on create & update
    async fn get_continent(&self, continent_id: i32) -> Result<Option<ContinentModel>, DbErr>;

    async fn create(&self, user_id: &str, country: CountryInDto) -> Result<CountryModel, DbErr>;

    /// Replaces every field and the owner, returns `None` if the country does not exist
    async fn update(
        &self,
        country_id: i32,
        user_id: &str,
        country: CountryInDto,
    ) -> Result<Option<CountryModel>, DbErr>;

    /// Deletes a country
    ///
    /// Returns OK regardless of the country existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    async fn delete(&self, country_id: i32) -> Result<DeleteResult, DbErr>;
}

pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    /// Creates a new instance of [`CountryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn find_where<F>(&self, condition: F) -> Result<Vec<CountryModel>, DbErr>
    where
        F: sea_orm::sea_query::IntoCondition + Send,
    {
        entity::prelude::Country::find()
            .filter(condition)
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> CountryStore for CountryRepository<'a, C> {
    async fn get_all(&self) -> Result<Vec<CountryWithContinent>, DbErr> {
        entity::prelude::Country::find()
            .find_also_related(entity::continent::Entity)
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await
    }

    async fn get_by_id(&self, country_id: i32) -> Result<Option<CountryWithContinent>, DbErr> {
        entity::prelude::Country::find_by_id(country_id)
            .find_also_related(entity::continent::Entity)
            .one(self.db)
            .await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<CountryWithContinent>, DbErr> {
        entity::prelude::Country::find()
            .filter(entity::country::Column::Name.eq(name))
            .find_also_related(entity::continent::Entity)
            .one(self.db)
            .await
    }

    async fn get_by_continent(&self, continent_id: i32) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::ContinentId.eq(continent_id))
            .await
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::UserId.eq(user_id))
            .await
    }

    async fn get_by_inhabitants(&self, inhabitants: i64) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Inhabitants.eq(inhabitants))
            .await
    }

    async fn get_by_language(&self, language: &str) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Language.eq(language))
            .await
    }

    async fn get_by_area(&self, area: i64) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Area.eq(area)).await
    }

    async fn get_by_pkb(&self, pkb: i64) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Pkb.eq(pkb)).await
    }

    async fn filter_by_inhabitants(
        &self,
        start: i64,
        stop: i64,
    ) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Inhabitants.between(start, stop))
            .await
    }

    async fn filter_by_area(&self, start: i64, stop: i64) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Area.between(start, stop))
            .await
    }

    async fn filter_by_pkb(&self, start: i64, stop: i64) -> Result<Vec<CountryModel>, DbErr> {
        self.find_where(entity::country::Column::Pkb.between(start, stop))
            .await
    }

    async fn get_continent(&self, continent_id: i32) -> Result<Option<ContinentModel>, DbErr> {
        entity::prelude::Continent::find_by_id(continent_id)
            .one(self.db)
            .await
    }

    async fn create(&self, user_id: &str, country: CountryInDto) -> Result<CountryModel, DbErr> {
        let country = entity::country::ActiveModel {
            name: ActiveValue::Set(country.name),
            inhabitants: ActiveValue::Set(country.inhabitants),
            language: ActiveValue::Set(country.language),
            area: ActiveValue::Set(country.area),
            pkb: ActiveValue::Set(country.pkb),
            continent_id: ActiveValue::Set(country.continent_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            ..Default::default()
        };

        country.insert(self.db).await
    }

    async fn update(
        &self,
        country_id: i32,
        user_id: &str,
        country: CountryInDto,
    ) -> Result<Option<CountryModel>, DbErr> {
        let Some(existing) = entity::prelude::Country::find_by_id(country_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut country_am = existing.into_active_model();
        country_am.name = ActiveValue::Set(country.name);
        country_am.inhabitants = ActiveValue::Set(country.inhabitants);
        country_am.language = ActiveValue::Set(country.language);
        country_am.area = ActiveValue::Set(country.area);
        country_am.pkb = ActiveValue::Set(country.pkb);
        country_am.continent_id = ActiveValue::Set(country.continent_id);
        country_am.user_id = ActiveValue::Set(user_id.to_string());

        let country = country_am.update(self.db).await?;

        Ok(Some(country))
    }

    async fn delete(&self, country_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Country::delete_by_id(country_id)
            .exec(self.db)
            .await
    }
}
