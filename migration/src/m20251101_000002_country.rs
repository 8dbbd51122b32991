use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_continent::Continent;

static IDX_COUNTRY_CONTINENT_ID: &str = "idx_country_continent_id";
static IDX_COUNTRY_USER_ID: &str = "idx_country_user_id";
static FK_COUNTRY_CONTINENT_ID: &str = "fk_country_continent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(pk_auto(Country::Id))
                    .col(string_uniq(Country::Name))
                    .col(big_integer(Country::Inhabitants))
                    .col(string(Country::Language))
                    .col(big_integer(Country::Area))
                    .col(big_integer(Country::Pkb))
                    .col(integer(Country::ContinentId))
                    .col(string(Country::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_CONTINENT_ID)
                    .table(Country::Table)
                    .col(Country::ContinentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_USER_ID)
                    .table(Country::Table)
                    .col(Country::UserId)
                    .to_owned(),
            )
            .await?;

        // No cascade: deleting a continent that still has countries is rejected by the store
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COUNTRY_CONTINENT_ID)
                    .from_tbl(Country::Table)
                    .from_col(Country::ContinentId)
                    .to_tbl(Continent::Table)
                    .to_col(Continent::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COUNTRY_CONTINENT_ID)
                    .table(Country::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COUNTRY_USER_ID)
                    .table(Country::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COUNTRY_CONTINENT_ID)
                    .table(Country::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Country {
    Table,
    Id,
    Name,
    Inhabitants,
    Language,
    Area,
    Pkb,
    ContinentId,
    UserId,
}
