//! Test stores — mock `ObjectiveStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use questables_core::error::DomainError;
use questables_core::store::{ObjectiveNode, ObjectiveStore};
use uuid::Uuid;

/// An objective store backed by a `HashMap`. Records every lookup so tests
/// can assert which rows were read and in what order.
#[derive(Debug, Default)]
pub struct InMemoryObjectiveStore {
    objectives: HashMap<Uuid, ObjectiveNode>,
    lookups: Mutex<Vec<Uuid>>,
}

impl InMemoryObjectiveStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an objective row.
    #[must_use]
    pub fn with_objective(mut self, node: ObjectiveNode) -> Self {
        self.objectives.insert(node.id, node);
        self
    }

    /// Builds a linear hierarchy of `depth` objectives in `campaign_id`.
    ///
    /// Returns the store and the ids ordered root first; each id is the
    /// parent of the next.
    #[must_use]
    pub fn with_chain(campaign_id: Uuid, depth: usize) -> (Self, Vec<Uuid>) {
        let mut store = Self::new();
        let mut ids = Vec::with_capacity(depth);
        let mut parent_id = None;
        for _ in 0..depth {
            let id = Uuid::new_v4();
            store = store.with_objective(ObjectiveNode {
                id,
                campaign_id,
                parent_id,
            });
            ids.push(id);
            parent_id = Some(id);
        }
        (store, ids)
    }

    /// Returns the ids passed to `find_objective`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn lookups(&self) -> Vec<Uuid> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectiveStore for InMemoryObjectiveStore {
    async fn find_objective(
        &self,
        objective_id: Uuid,
    ) -> Result<Option<ObjectiveNode>, DomainError> {
        self.lookups.lock().unwrap().push(objective_id);
        Ok(self.objectives.get(&objective_id).copied())
    }
}

/// An objective store that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingObjectiveStore;

#[async_trait]
impl ObjectiveStore for FailingObjectiveStore {
    async fn find_objective(
        &self,
        _objective_id: Uuid,
    ) -> Result<Option<ObjectiveNode>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
