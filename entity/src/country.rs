use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "country")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub inhabitants: i64,
    pub language: String,
    pub area: i64,
    pub pkb: i64,
    pub continent_id: i32,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::continent::Entity",
        from = "Column::ContinentId",
        to = "super::continent::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Continent,
}

impl Related<super::continent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Continent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
