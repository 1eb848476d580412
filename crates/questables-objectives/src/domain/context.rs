//! Referential context supplied by the caller for a single validation.

use std::collections::HashSet;

use questables_core::store::ObjectiveNode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The parent row the caller resolved for `parentId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentObjective {
    /// Parent objective id.
    pub id: Uuid,
    /// Campaign owning the parent.
    pub campaign_id: Uuid,
}

impl From<ObjectiveNode> for ParentObjective {
    fn from(node: ObjectiveNode) -> Self {
        Self {
            id: node.id,
            campaign_id: node.campaign_id,
        }
    }
}

fn default_require_title() -> bool {
    true
}

/// Request-scoped context for sanitizing one objective payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    /// Campaign that owns the objective.
    pub campaign_id: Uuid,
    /// Whether a title is mandatory. `false` for partial updates.
    #[serde(default = "default_require_title")]
    pub require_title: bool,
    /// Id of the objective being edited, when it already exists.
    #[serde(default)]
    pub objective_id: Option<Uuid>,
    /// The resolved parent row, if any.
    #[serde(default)]
    pub parent_objective: Option<ParentObjective>,
    /// Ids already known to be ancestors of the prospective parent.
    #[serde(default)]
    pub ancestor_ids: HashSet<Uuid>,
}

impl ValidationContext {
    /// Context for creating a titled objective in `campaign_id`.
    #[must_use]
    pub fn new(campaign_id: Uuid) -> Self {
        Self {
            campaign_id,
            require_title: true,
            objective_id: None,
            parent_objective: None,
            ancestor_ids: HashSet::new(),
        }
    }

    /// Sets whether a title is required.
    #[must_use]
    pub fn with_require_title(mut self, require_title: bool) -> Self {
        self.require_title = require_title;
        self
    }

    /// Records the id of the objective being edited.
    #[must_use]
    pub fn with_objective_id(mut self, objective_id: Uuid) -> Self {
        self.objective_id = Some(objective_id);
        self
    }

    /// Attaches the resolved parent row.
    #[must_use]
    pub fn with_parent(mut self, parent: ParentObjective) -> Self {
        self.parent_objective = Some(parent);
        self
    }

    /// Adds ancestor ids of the prospective parent.
    #[must_use]
    pub fn with_ancestors(mut self, ancestor_ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.ancestor_ids.extend(ancestor_ids);
        self
    }
}
