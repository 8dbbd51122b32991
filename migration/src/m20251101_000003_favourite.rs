use sea_orm_migration::{prelude::*, schema::*};

static IDX_FAVOURITE_USER_ID: &str = "idx_favourite_user_id";
static IDX_FAVOURITE_COUNTRY_NAME: &str = "idx_favourite_country_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favourite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favourite::Id))
                    .col(string(Favourite::CountryName))
                    .col(string(Favourite::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVOURITE_USER_ID)
                    .table(Favourite::Table)
                    .col(Favourite::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVOURITE_COUNTRY_NAME)
                    .table(Favourite::Table)
                    .col(Favourite::CountryName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVOURITE_COUNTRY_NAME)
                    .table(Favourite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVOURITE_USER_ID)
                    .table(Favourite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favourite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favourite {
    Table,
    Id,
    CountryName,
    UserId,
}
