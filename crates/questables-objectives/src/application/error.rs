//! Application-level error for objective commands.

use questables_core::error::DomainError;
use thiserror::Error;

use crate::domain::error::ObjectiveValidationError;

/// Failure of an objective command: either the payload was rejected, or
/// resolving its context failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectiveError {
    /// The payload failed sanitation.
    #[error(transparent)]
    Rejected(#[from] ObjectiveValidationError),

    /// Context resolution failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
