//! Questables — Objectives bounded context.
//!
//! Responsible for turning untrusted objective payloads into canonical,
//! campaign-safe records: field sanitation, map-location shape checks, and
//! parent/ancestor integrity. The domain layer is pure and synchronous; the
//! application layer resolves hierarchy context through an
//! `ObjectiveStore` before validating.

pub mod application;
pub mod domain;
