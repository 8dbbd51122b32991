//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod continent;
pub mod country;
pub mod favourite;
pub mod summary;
pub mod visited;
