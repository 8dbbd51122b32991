use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Continent::Table)
                    .if_not_exists()
                    .col(pk_auto(Continent::Id))
                    .col(string_uniq(Continent::Name))
                    .col(string_uniq(Continent::Alias))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Continent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Continent {
    Table,
    Id,
    Name,
    Alias,
}
