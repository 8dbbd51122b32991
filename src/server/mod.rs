//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing and controllers, the
//! service layer with the summary, ranking and ownership logic, the repositories over the
//! relational store, configuration and startup/shutdown of the process-wide database
//! connection.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
