//! Commands for the Objectives context.

use questables_core::command::Command;
use uuid::Uuid;

use super::payload::ObjectivePayload;

/// Command to sanitize an objective payload before it is written.
#[derive(Debug, Clone)]
pub struct SanitizeObjective {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The campaign that owns the objective.
    pub campaign_id: Uuid,
    /// The objective being edited; `None` when creating.
    pub objective_id: Option<Uuid>,
    /// Whether a title is required. `false` for partial updates.
    pub require_title: bool,
    /// The untrusted request payload.
    pub payload: ObjectivePayload,
}

impl Command for SanitizeObjective {
    fn command_type(&self) -> &'static str {
        "objectives.sanitize"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn campaign_id(&self) -> Uuid {
        self.campaign_id
    }
}
