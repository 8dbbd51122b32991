//! Utilities shared by controllers.

pub mod identity;
