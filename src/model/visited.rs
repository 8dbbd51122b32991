use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VisitedInDto {
    pub country_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VisitedDto {
    pub id: i32,
    pub country_name: String,
    pub user_id: String,
}

impl From<entity::visited::Model> for VisitedDto {
    fn from(visited: entity::visited::Model) -> Self {
        Self {
            id: visited.id,
            country_name: visited.country_name,
            user_id: visited.user_id,
        }
    }
}
