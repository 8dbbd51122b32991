//! SeaORM entities for the country API tables.

pub mod prelude;

pub mod continent;
pub mod country;
pub mod favourite;
pub mod visited;
