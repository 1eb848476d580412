//! Application layer for the Objectives context.

pub mod command_handlers;
pub mod context_loader;
pub mod error;

pub use error::ObjectiveError;
