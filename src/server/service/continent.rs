use crate::{
    model::continent::{ContinentDto, ContinentInDto},
    server::{
        data::continent::ContinentStore,
        error::{entity::EntityError, Error},
    },
};

fn continent_exists() -> EntityError {
    EntityError::Conflict("Continent already exist".to_string())
}

/// Service for continent lookups and writes
///
/// Continent writes are not owner-guarded.
pub struct ContinentService<S: ContinentStore> {
    store: S,
}

impl<S: ContinentStore> ContinentService<S> {
    /// Creates a new instance of [`ContinentService`]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<ContinentDto>, Error> {
        let continents = self.store.get_all().await?;

        Ok(continents.into_iter().map(ContinentDto::from).collect())
    }

    pub async fn get_by_id(&self, continent_id: i32) -> Result<ContinentDto, Error> {
        self.store
            .get_by_id(continent_id)
            .await?
            .map(ContinentDto::from)
            .ok_or(EntityError::NotFound("Continent").into())
    }

    pub async fn get_by_name(&self, name: &str) -> Result<ContinentDto, Error> {
        self.store
            .get_by_name(name)
            .await?
            .map(ContinentDto::from)
            .ok_or(EntityError::NotFound("Continent").into())
    }

    pub async fn get_by_alias(&self, alias: &str) -> Result<ContinentDto, Error> {
        self.store
            .get_by_alias(alias)
            .await?
            .map(ContinentDto::from)
            .ok_or(EntityError::NotFound("Continent").into())
    }

    /// Creates a continent with a free name & alias
    ///
    /// # Returns
    /// - `Ok(ContinentDto)` - The stored continent
    /// - `Err(Error::EntityError(EntityError::Conflict))` - Name or alias already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, continent: ContinentInDto) -> Result<ContinentDto, Error> {
        if self.store.get_by_name(&continent.name).await?.is_some()
            || self.store.get_by_alias(&continent.alias).await?.is_some()
        {
            return Err(continent_exists().into());
        }

        let continent = self.store.create(continent).await.map_err(|err| {
            EntityError::from_constraint_violation(err, continent_exists, continent_exists)
        })?;

        Ok(continent.into())
    }

    pub async fn update(
        &self,
        continent_id: i32,
        continent: ContinentInDto,
    ) -> Result<ContinentDto, Error> {
        if self.store.get_by_id(continent_id).await?.is_none() {
            return Err(EntityError::NotFound("Continent").into());
        }

        let updated = self
            .store
            .update(continent_id, continent)
            .await
            .map_err(|err| {
                EntityError::from_constraint_violation(err, continent_exists, continent_exists)
            })?;

        match updated {
            Some(continent) => Ok(continent.into()),
            None => {
                tracing::warn!(
                    "Continent ID {} disappeared between lookup and update",
                    continent_id
                );

                Err(EntityError::NotFound("Continent").into())
            }
        }
    }

    /// Deletes a continent no country references
    ///
    /// # Returns
    /// - `Ok(())` - Continent deleted
    /// - `Err(Error::EntityError(EntityError::NotFound))` - No such continent
    /// - `Err(Error::EntityError(EntityError::Conflict))` - Countries still reference it
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, continent_id: i32) -> Result<(), Error> {
        if self.store.get_by_id(continent_id).await?.is_none() {
            return Err(EntityError::NotFound("Continent").into());
        }

        let still_referenced =
            || EntityError::Conflict("Continent is still referenced by countries".to_string());

        let result = self.store.delete(continent_id).await.map_err(|err| {
            EntityError::from_constraint_violation(err, still_referenced, still_referenced)
        })?;

        if result.rows_affected == 0 {
            return Err(EntityError::NotFound("Continent").into());
        }

        Ok(())
    }
}
