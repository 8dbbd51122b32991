use sea_orm_migration::{prelude::*, schema::*};

static IDX_VISITED_USER_ID: &str = "idx_visited_user_id";
static IDX_VISITED_COUNTRY_NAME: &str = "idx_visited_country_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visited::Table)
                    .if_not_exists()
                    .col(pk_auto(Visited::Id))
                    .col(string(Visited::CountryName))
                    .col(string(Visited::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VISITED_USER_ID)
                    .table(Visited::Table)
                    .col(Visited::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VISITED_COUNTRY_NAME)
                    .table(Visited::Table)
                    .col(Visited::CountryName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VISITED_COUNTRY_NAME)
                    .table(Visited::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VISITED_USER_ID)
                    .table(Visited::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Visited::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Visited {
    Table,
    Id,
    CountryName,
    UserId,
}
