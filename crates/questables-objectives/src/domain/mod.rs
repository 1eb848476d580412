//! Domain layer for the Objectives context.

pub mod commands;
pub mod context;
pub mod error;
pub mod location;
pub mod payload;
pub mod sanitize;

mod coerce;
