use serde::{Deserialize, Serialize};

/// Continent payload for create & update requests
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContinentInDto {
    pub name: String,
    pub alias: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContinentDto {
    pub id: i32,
    pub name: String,
    pub alias: String,
}

impl From<entity::continent::Model> for ContinentDto {
    fn from(continent: entity::continent::Model) -> Self {
        Self {
            id: continent.id,
            name: continent.name,
            alias: continent.alias,
        }
    }
}
