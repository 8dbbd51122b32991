use serde::{Deserialize, Serialize};

use crate::model::continent::ContinentDto;

/// Country payload for create & update requests
///
/// The owner is never part of the payload, it is always taken from the caller's
/// verified identity.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CountryInDto {
    pub name: String,
    pub inhabitants: i64,
    pub language: String,
    pub area: i64,
    pub pkb: i64,
    pub continent_id: i32,
}

/// Country as stored, referencing its continent by ID
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub inhabitants: i64,
    pub language: String,
    pub area: i64,
    pub pkb: i64,
    pub continent_id: i32,
    pub user_id: String,
}

/// Country with its continent embedded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CountryDetailsDto {
    pub id: i32,
    pub name: String,
    pub inhabitants: i64,
    pub language: String,
    pub area: i64,
    pub pkb: i64,
    pub continent: ContinentDto,
    pub user_id: String,
}

impl From<entity::country::Model> for CountryDto {
    fn from(country: entity::country::Model) -> Self {
        Self {
            id: country.id,
            name: country.name,
            inhabitants: country.inhabitants,
            language: country.language,
            area: country.area,
            pkb: country.pkb,
            continent_id: country.continent_id,
            user_id: country.user_id,
        }
    }
}

impl CountryDetailsDto {
    pub fn new(country: entity::country::Model, continent: entity::continent::Model) -> Self {
        Self {
            id: country.id,
            name: country.name,
            inhabitants: country.inhabitants,
            language: country.language,
            area: country.area,
            pkb: country.pkb,
            continent: continent.into(),
            user_id: country.user_id,
        }
    }
}
