pub use sea_orm_migration::prelude::*;

mod m20251101_000001_continent;
mod m20251101_000002_country;
mod m20251101_000003_favourite;
mod m20251101_000004_visited;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_continent::Migration),
            Box::new(m20251101_000002_country::Migration),
            Box::new(m20251101_000003_favourite::Migration),
            Box::new(m20251101_000004_visited::Migration),
        ]
    }
}
