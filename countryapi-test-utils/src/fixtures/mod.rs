//! Test fixture modules.
//!
//! - `auth` - Bearer tokens signed with [`TEST_JWT_SECRET`](crate::constant::TEST_JWT_SECRET)
//! - `factory` - In-memory models with standard test values, nothing is stored
//! - `continent`, `country`, `favourite`, `visited` - Database inserts through the test context

pub mod auth;
pub mod continent;
pub mod country;
pub mod factory;
pub mod favourite;
pub mod visited;
