use serde::{Deserialize, Serialize};

/// Favourite payload for create & update requests
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavouriteInDto {
    /// Free text, not required to match a stored country
    pub country_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavouriteDto {
    pub id: i32,
    pub country_name: String,
    pub user_id: String,
}

/// A single position in the favourites ranking
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RankingEntryDto {
    pub country_name: String,
    /// Number of favourites naming this country
    pub count: u64,
}

impl From<entity::favourite::Model> for FavouriteDto {
    fn from(favourite: entity::favourite::Model) -> Self {
        Self {
            id: favourite.id,
            country_name: favourite.country_name,
            user_id: favourite.user_id,
        }
    }
}
