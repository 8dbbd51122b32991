//! REST backend for continents, countries, favourite and visited countries.
//!
//! The crate is split into transport [`model`]s shared by every endpoint and the
//! [`server`] itself (routing, services, repositories and the summary, ranking and
//! ownership logic).

pub mod model;
pub mod server;
