//! Read-only objective store abstraction.
//!
//! The validator never touches storage. Callers that need to resolve a
//! parent objective or its ancestor chain do so through this trait before
//! validating.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// The slice of a persisted objective row needed for hierarchy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveNode {
    /// Objective identifier.
    pub id: Uuid,
    /// Owning campaign.
    pub campaign_id: Uuid,
    /// Parent objective, if nested.
    pub parent_id: Option<Uuid>,
}

/// Lookup trait for objective hierarchy rows.
#[async_trait]
pub trait ObjectiveStore: Send + Sync {
    /// Load a single objective row by id. Returns `Ok(None)` when no row
    /// exists.
    async fn find_objective(
        &self,
        objective_id: Uuid,
    ) -> Result<Option<ObjectiveNode>, DomainError>;
}
