//! Questables API — HTTP surface for objective validation.
//!
//! The service is stateless: callers post a payload together with the
//! referential context they already resolved, and get back either the
//! sanitized record or a structured rejection.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
