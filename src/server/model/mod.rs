//! Server application models and type definitions.
//!
//! Application state shared with every handler and type aliases for the database entity
//! models used across repositories and services.

pub mod app;
pub mod db;
