//! HTTP controller endpoints for the country API.
//!
//! Axum handlers for continents, countries, favourite and visited countries. Handlers extract
//! path, query, body and the caller's [`Identity`](util::identity::Identity), call the matching
//! service and map its result to a status code. All handlers are documented with utoipa.

pub mod continent;
pub mod country;
pub mod favourite;
pub mod util;
pub mod visited;
