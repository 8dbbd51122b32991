//! Data access layer.
//!
//! One store trait per entity kind, each with a SeaORM-backed repository borrowing a
//! database connection. Services are generic over the traits so the engines can be exercised
//! against any store.

pub mod continent;
pub mod country;
pub mod favourite;
pub mod visited;
