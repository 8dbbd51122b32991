use crate::{
    model::favourite::{FavouriteDto, FavouriteInDto, RankingEntryDto},
    server::{
        data::favourite::FavouriteStore,
        error::{entity::EntityError, Error},
        model::db::FavouriteModel,
        service::{access, ranking},
    },
};

/// Service for favourite countries, at most one per user, and their ranking
pub struct FavouriteService<S: FavouriteStore> {
    store: S,
}

impl<S: FavouriteStore> FavouriteService<S> {
    /// Creates a new instance of [`FavouriteService`]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_by_id(&self, favourite_id: i32) -> Result<FavouriteDto, Error> {
        self.store
            .get_by_id(favourite_id)
            .await?
            .map(FavouriteDto::from)
            .ok_or(EntityError::NotFound("Favourite").into())
    }

    pub async fn get_all(&self) -> Result<Vec<FavouriteDto>, Error> {
        let favourites = self.store.get_all().await?;

        Ok(favourites.into_iter().map(FavouriteDto::from).collect())
    }

    pub async fn get_by_country(&self, country_name: &str) -> Result<Vec<FavouriteDto>, Error> {
        let favourites = self.store.get_by_country(country_name).await?;

        Ok(favourites.into_iter().map(FavouriteDto::from).collect())
    }

    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<FavouriteDto>, Error> {
        let favourites = self.store.get_by_user(user_id).await?;

        Ok(favourites.into_iter().map(FavouriteDto::from).collect())
    }

    /// Creates the caller's favourite unless they already have one
    ///
    /// The existence check and the insert are separate store calls without a lock, so two
    /// concurrent requests of the same user may both succeed.
    ///
    /// # Returns
    /// - `Ok(FavouriteDto)` - The stored favourite
    /// - `Err(Error::AuthError)` - No verified caller
    /// - `Err(Error::EntityError(EntityError::Conflict))` - Caller already has a favourite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        verified_user_id: Option<&str>,
        favourite: FavouriteInDto,
    ) -> Result<FavouriteDto, Error> {
        let user_id = access::authorize_mutation::<FavouriteModel>(verified_user_id, None)?;

        let existing = self.store.get_by_user(user_id).await?;
        access::authorize_single_favourite(user_id, &existing)?;

        let favourite = self.store.create(user_id, favourite).await?;

        Ok(favourite.into())
    }

    pub async fn update(
        &self,
        verified_user_id: Option<&str>,
        favourite_id: i32,
        favourite: FavouriteInDto,
    ) -> Result<FavouriteDto, Error> {
        let verified_user_id = access::require_identity(verified_user_id)?;

        let Some(existing) = self.store.get_by_id(favourite_id).await? else {
            return Err(EntityError::NotFound("Favourite").into());
        };
        let user_id = access::authorize_mutation(Some(verified_user_id), Some(&existing))?;

        match self.store.update(favourite_id, user_id, favourite).await? {
            Some(favourite) => Ok(favourite.into()),
            None => {
                tracing::warn!(
                    "Favourite ID {} disappeared between lookup and update",
                    favourite_id
                );

                Err(EntityError::NotFound("Favourite").into())
            }
        }
    }

    pub async fn delete(
        &self,
        verified_user_id: Option<&str>,
        favourite_id: i32,
    ) -> Result<(), Error> {
        let verified_user_id = access::require_identity(verified_user_id)?;

        let Some(existing) = self.store.get_by_id(favourite_id).await? else {
            return Err(EntityError::NotFound("Favourite").into());
        };
        access::authorize_mutation(Some(verified_user_id), Some(&existing))?;

        if self.store.delete(favourite_id).await?.rows_affected == 0 {
            return Err(EntityError::NotFound("Favourite").into());
        }

        Ok(())
    }

    /// Favourite countries by number of users, recomputed from all favourites on every call
    pub async fn get_ranking(&self) -> Result<Vec<RankingEntryDto>, Error> {
        let favourites = self.store.get_all().await?;

        Ok(ranking::rank(&favourites))
    }
}

#[cfg(test)]
mod tests {
    use countryapi_test_utils::prelude::*;

    use crate::{
        model::favourite::{FavouriteInDto, RankingEntryDto},
        server::{
            data::favourite::{FavouriteRepository, FavouriteStore},
            error::{auth::AuthError, entity::EntityError, Error},
            service::{access, favourite::FavouriteService},
        },
    };

    fn input(name: &str) -> FavouriteInDto {
        FavouriteInDto {
            country_name: name.to_string(),
        }
    }

    /// Expect Conflict for a user's second favourite
    #[tokio::test]
    async fn rejects_second_favourite() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Favourite)?;
        test.favourite().insert_favourite("France", "user-1").await?;

        let service = FavouriteService::new(FavouriteRepository::new(&test.db));
        let result = service.create(Some("user-1"), input("Japan")).await;

        assert!(matches!(
            result,
            Err(Error::EntityError(EntityError::Conflict(_)))
        ));
        assert_eq!(service.get_by_user("user-1").await.unwrap().len(), 1);

        Ok(())
    }

    /// Expect other users to pick the same country
    #[tokio::test]
    async fn allows_same_country_for_other_users() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Favourite)?;
        test.favourite().insert_favourite("France", "user-1").await?;

        let service = FavouriteService::new(FavouriteRepository::new(&test.db));
        let favourite = service
            .create(Some("user-2"), input("France"))
            .await
            .unwrap();

        assert_eq!(favourite.user_id, "user-2");
        assert_eq!(service.get_by_country("France").await.unwrap().len(), 2);

        Ok(())
    }

    /// Expect both of two interleaved creations to pass the check and be stored
    #[tokio::test]
    async fn interleaved_creations_both_pass_check() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Favourite)?;

        let store = FavouriteRepository::new(&test.db);

        // Both requests read before either writes
        let first_check = store.get_by_user("user-1").await?;
        let second_check = store.get_by_user("user-1").await?;

        assert!(access::authorize_single_favourite("user-1", &first_check).is_ok());
        assert!(access::authorize_single_favourite("user-1", &second_check).is_ok());

        store.create("user-1", input("France")).await?;
        store.create("user-1", input("Japan")).await?;

        assert_eq!(store.get_by_user("user-1").await?.len(), 2);

        Ok(())
    }

    /// Expect Denied for non-owners and NotFound for missing favourites
    #[tokio::test]
    async fn guards_update_and_delete() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Favourite)?;
        let favourite = test.favourite().insert_favourite("France", "user-1").await?;

        let service = FavouriteService::new(FavouriteRepository::new(&test.db));

        assert!(matches!(
            service
                .update(Some("user-2"), favourite.id, input("Spain"))
                .await,
            Err(Error::AuthError(AuthError::NotOwner { .. }))
        ));
        assert!(matches!(
            service.delete(Some("user-2"), favourite.id).await,
            Err(Error::AuthError(AuthError::NotOwner { .. }))
        ));
        let unchanged = service.get_by_id(favourite.id).await.unwrap();
        assert_eq!(unchanged.country_name, "France");
        assert_eq!(unchanged.user_id, "user-1");

        assert!(matches!(
            service.delete(Some("user-1"), favourite.id + 1).await,
            Err(Error::EntityError(EntityError::NotFound("Favourite")))
        ));

        let updated = service
            .update(Some("user-1"), favourite.id, input("Spain"))
            .await
            .unwrap();
        assert_eq!(updated.country_name, "Spain");

        service.delete(Some("user-1"), favourite.id).await.unwrap();
        assert!(service.get_all().await.unwrap().is_empty());

        Ok(())
    }

    /// Expect favourites of five users to rank X before Y
    #[tokio::test]
    async fn ranks_stored_favourites() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Favourite)?;
        for (user_id, name) in [("u1", "X"), ("u2", "X"), ("u3", "Y"), ("u4", "X"), ("u5", "Y")] {
            test.favourite().insert_favourite(name, user_id).await?;
        }

        let service = FavouriteService::new(FavouriteRepository::new(&test.db));
        let ranking = service.get_ranking().await.unwrap();

        assert_eq!(
            ranking,
            vec![
                RankingEntryDto {
                    country_name: "X".to_string(),
                    count: 3
                },
                RankingEntryDto {
                    country_name: "Y".to_string(),
                    count: 2
                },
            ]
        );

        Ok(())
    }
}
