use crate::{
    model::visited::{VisitedDto, VisitedInDto},
    server::{
        data::visited::VisitedStore,
        error::{entity::EntityError, Error},
        model::db::VisitedModel,
        service::access,
    },
};

/// Service for visited countries
///
/// A user may record any number of visits, including the same country more than once.
pub struct VisitedService<S: VisitedStore> {
    store: S,
}

impl<S: VisitedStore> VisitedService<S> {
    /// Creates a new instance of [`VisitedService`]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_by_id(&self, visited_id: i32) -> Result<VisitedDto, Error> {
        self.store
            .get_by_id(visited_id)
            .await?
            .map(VisitedDto::from)
            .ok_or(EntityError::NotFound("Visited").into())
    }

    pub async fn get_all(&self) -> Result<Vec<VisitedDto>, Error> {
        Ok(self
            .store
            .get_all()
            .await?
            .into_iter()
            .map(VisitedDto::from)
            .collect())
    }

    pub async fn get_by_country(&self, country_name: &str) -> Result<Vec<VisitedDto>, Error> {
        Ok(self
            .store
            .get_by_country(country_name)
            .await?
            .into_iter()
            .map(VisitedDto::from)
            .collect())
    }

    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<VisitedDto>, Error> {
        Ok(self
            .store
            .get_by_user(user_id)
            .await?
            .into_iter()
            .map(VisitedDto::from)
            .collect())
    }

    pub async fn create(
        &self,
        verified_user_id: Option<&str>,
        visited: VisitedInDto,
    ) -> Result<VisitedDto, Error> {
        let user_id = access::authorize_mutation::<VisitedModel>(verified_user_id, None)?;

        let visited = self.store.create(user_id, visited).await?;

        Ok(visited.into())
    }

    pub async fn update(
        &self,
        verified_user_id: Option<&str>,
        visited_id: i32,
        visited: VisitedInDto,
    ) -> Result<VisitedDto, Error> {
        let verified_user_id = access::require_identity(verified_user_id)?;

        let Some(existing) = self.store.get_by_id(visited_id).await? else {
            return Err(EntityError::NotFound("Visited").into());
        };
        let user_id = access::authorize_mutation(Some(verified_user_id), Some(&existing))?;

        let Some(visited) = self.store.update(visited_id, user_id, visited).await? else {
            tracing::warn!(
                "Visited ID {} disappeared between lookup and update",
                visited_id
            );

            return Err(EntityError::NotFound("Visited").into());
        };

        Ok(visited.into())
    }

    pub async fn delete(&self, verified_user_id: Option<&str>, visited_id: i32) -> Result<(), Error> {
        let verified_user_id = access::require_identity(verified_user_id)?;

        let Some(existing) = self.store.get_by_id(visited_id).await? else {
            return Err(EntityError::NotFound("Visited").into());
        };
        access::authorize_mutation(Some(verified_user_id), Some(&existing))?;

        if self.store.delete(visited_id).await?.rows_affected == 0 {
            return Err(EntityError::NotFound("Visited").into());
        }

        Ok(())
    }
}
