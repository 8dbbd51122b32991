use std::collections::BTreeMap;

use crate::{
    model::{
        country::{CountryDetailsDto, CountryDto, CountryInDto},
        summary::SummaryDto,
    },
    server::{
        data::country::{CountryStore, CountryWithContinent},
        error::{entity::EntityError, Error},
        model::db::CountryModel,
        service::{access, summary},
    },
};

fn country_exists() -> EntityError {
    EntityError::Conflict("Country already exist".to_string())
}

/// Rejects payloads with an empty name or negative statistics
fn validate(country: &CountryInDto) -> Result<(), EntityError> {
    if country.name.trim().is_empty() {
        return Err(EntityError::InvalidField {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    }

    for (field, value) in [
        ("inhabitants", country.inhabitants),
        ("area", country.area),
        ("pkb", country.pkb),
    ] {
        if value < 0 {
            return Err(EntityError::InvalidField {
                field,
                reason: format!("must not be negative, got {}", value),
            });
        }
    }

    Ok(())
}

fn into_details((country, continent): CountryWithContinent) -> Option<CountryDetailsDto> {
    match continent {
        Some(continent) => Some(CountryDetailsDto::new(country, continent)),
        None => {
            tracing::warn!(
                "Country ID {} references missing continent ID {}",
                country.id,
                country.continent_id
            );

            None
        }
    }
}

fn into_dtos(countries: Vec<CountryModel>) -> Vec<CountryDto> {
    countries.into_iter().map(CountryDto::from).collect()
}

/// Service for country lookups, owner-guarded writes and continent summaries
pub struct CountryService<S: CountryStore> {
    store: S,
}

impl<S: CountryStore> CountryService<S> {
    /// Creates a new instance of [`CountryService`]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All countries with their continent, ordered by name
    pub async fn get_all(&self) -> Result<Vec<CountryDetailsDto>, Error> {
        let countries = self.store.get_all().await?;

        Ok(countries.into_iter().filter_map(into_details).collect())
    }

    pub async fn get_by_id(&self, country_id: i32) -> Result<CountryDetailsDto, Error> {
        self.store
            .get_by_id(country_id)
            .await?
            .and_then(into_details)
            .ok_or(EntityError::NotFound("Country").into())
    }

    pub async fn get_by_name(&self, name: &str) -> Result<CountryDetailsDto, Error> {
        self.store
            .get_by_name(name)
            .await?
            .and_then(into_details)
            .ok_or(EntityError::NotFound("Country").into())
    }

    pub async fn get_by_continent(&self, continent_id: i32) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.get_by_continent(continent_id).await?))
    }

    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.get_by_user(user_id).await?))
    }

    pub async fn get_by_inhabitants(&self, inhabitants: i64) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.get_by_inhabitants(inhabitants).await?))
    }

    pub async fn get_by_language(&self, language: &str) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.get_by_language(language).await?))
    }

    pub async fn get_by_area(&self, area: i64) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.get_by_area(area).await?))
    }

    pub async fn get_by_pkb(&self, pkb: i64) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.get_by_pkb(pkb).await?))
    }

    pub async fn filter_by_inhabitants(
        &self,
        start: i64,
        stop: i64,
    ) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.filter_by_inhabitants(start, stop).await?))
    }

    pub async fn filter_by_area(&self, start: i64, stop: i64) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.filter_by_area(start, stop).await?))
    }

    pub async fn filter_by_pkb(&self, start: i64, stop: i64) -> Result<Vec<CountryDto>, Error> {
        Ok(into_dtos(self.store.filter_by_pkb(start, stop).await?))
    }

    /// Creates a country owned by the verified caller
    ///
    /// # Arguments
    /// - `verified_user_id` - Caller identity from the bearer token, `None` if unverified
    /// - `country` - Country payload
    ///
    /// # Returns
    /// - `Ok(CountryDto)` - The stored country
    /// - `Err(Error::AuthError)` - No verified caller
    /// - `Err(Error::EntityError(EntityError::InvalidField))` - Empty name or negative statistic
    /// - `Err(Error::EntityError(EntityError::ContinentNotFound))` - Referenced continent missing
    /// - `Err(Error::EntityError(EntityError::Conflict))` - Name already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        verified_user_id: Option<&str>,
        country: CountryInDto,
    ) -> Result<CountryDto, Error> {
        let user_id = access::authorize_mutation::<CountryModel>(verified_user_id, None)?;
        validate(&country)?;

        let continent_id = country.continent_id;
        if self.store.get_continent(continent_id).await?.is_none() {
            return Err(EntityError::ContinentNotFound(continent_id).into());
        }

        if self.store.get_by_name(&country.name).await?.is_some() {
            return Err(country_exists().into());
        }

        let country = self.store.create(user_id, country).await.map_err(|err| {
            EntityError::from_constraint_violation(err, country_exists, || {
                EntityError::ContinentNotFound(continent_id)
            })
        })?;

        Ok(country.into())
    }

    /// Replaces every field of a country owned by the verified caller
    ///
    /// # Returns
    /// - `Ok(CountryDto)` - The updated country
    /// - `Err(Error::AuthError)` - No verified caller, or the caller is not the owner
    /// - `Err(Error::EntityError(EntityError::NotFound))` - No such country
    /// - `Err(Error::EntityError(EntityError::InvalidField))` - Empty name or negative statistic
    /// - `Err(Error::EntityError(EntityError::InvalidContinent))` - Referenced continent missing
    /// - `Err(Error::EntityError(EntityError::Conflict))` - New name belongs to another country
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        verified_user_id: Option<&str>,
        country_id: i32,
        country: CountryInDto,
    ) -> Result<CountryDto, Error> {
        let verified_user_id = access::require_identity(verified_user_id)?;

        let Some((existing, _)) = self.store.get_by_id(country_id).await? else {
            return Err(EntityError::NotFound("Country").into());
        };
        let user_id = access::authorize_mutation(Some(verified_user_id), Some(&existing))?;
        validate(&country)?;

        let continent_id = country.continent_id;
        if self.store.get_continent(continent_id).await?.is_none() {
            return Err(EntityError::InvalidContinent(continent_id).into());
        }

        if let Some((other, _)) = self.store.get_by_name(&country.name).await? {
            if other.id != country_id {
                return Err(country_exists().into());
            }
        }

        let updated = self
            .store
            .update(country_id, user_id, country)
            .await
            .map_err(|err| {
                EntityError::from_constraint_violation(err, country_exists, || {
                    EntityError::InvalidContinent(continent_id)
                })
            })?;

        match updated {
            Some(country) => Ok(country.into()),
            None => {
                tracing::warn!(
                    "Country ID {} disappeared between lookup and update",
                    country_id
                );

                Err(EntityError::NotFound("Country").into())
            }
        }
    }

    /// Deletes a country owned by the verified caller
    pub async fn delete(&self, verified_user_id: Option<&str>, country_id: i32) -> Result<(), Error> {
        let verified_user_id = access::require_identity(verified_user_id)?;

        let Some((existing, _)) = self.store.get_by_id(country_id).await? else {
            return Err(EntityError::NotFound("Country").into());
        };
        access::authorize_mutation(Some(verified_user_id), Some(&existing))?;

        let result = self.store.delete(country_id).await?;
        if result.rows_affected == 0 {
            return Err(EntityError::NotFound("Country").into());
        }

        Ok(())
    }

    pub async fn get_summary_by_continent(&self, continent_id: i32) -> Result<SummaryDto, Error> {
        summary::summarize_by_continent(&self.store, continent_id).await
    }

    /// Summary for every continent that has at least one country, keyed by continent ID
    pub async fn get_summary_by_all_continents(&self) -> Result<BTreeMap<i32, SummaryDto>, Error> {
        let countries: Vec<CountryModel> = self
            .store
            .get_all()
            .await?
            .into_iter()
            .map(|(country, _)| country)
            .collect();

        summary::summarize_all_continents(&self.store, &countries).await
    }
}
