//! Shared test mocks and utilities for the Questables campaign tool.

mod store;

pub use store::{FailingObjectiveStore, InMemoryObjectiveStore};
