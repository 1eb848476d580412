//! Questables Core — shared domain abstractions.
//!
//! This crate defines the traits and types the objective context and the
//! HTTP service depend on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod store;
