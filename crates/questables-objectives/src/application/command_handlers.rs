//! Command handlers for the Objectives context.
//!
//! Handlers orchestrate the flow around the pure sanitizer: resolve the
//! hierarchy context through the store, then sanitize.

use questables_core::command::Command;
use questables_core::store::ObjectiveStore;
use tracing::{debug, info, instrument};

use super::context_loader::load_validation_context;
use super::error::ObjectiveError;
use crate::domain::commands::SanitizeObjective;
use crate::domain::sanitize::{SanitizedObjective, sanitize_objective_payload};

/// Handles the `SanitizeObjective` command: loads the parent and ancestor
/// context, then sanitizes the payload against it.
///
/// Nothing is written; the caller persists the returned record.
///
/// Context resolution runs first, so a lookup failure such as an unknown
/// parent is reported ahead of any payload rejection.
///
/// # Errors
///
/// Returns `ObjectiveError::Rejected` if the payload fails sanitation and
/// `ObjectiveError::Domain` if context resolution fails.
#[instrument(
    skip(command, store),
    fields(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        campaign_id = %command.campaign_id
    )
)]
pub async fn handle_sanitize_objective(
    command: &SanitizeObjective,
    store: &dyn ObjectiveStore,
    max_depth: usize,
) -> Result<SanitizedObjective, ObjectiveError> {
    let context = load_validation_context(command, store, max_depth).await?;

    match sanitize_objective_payload(&command.payload, &context) {
        Ok(objective) => {
            debug!(ancestors = context.ancestor_ids.len(), "objective payload accepted");
            Ok(objective)
        }
        Err(err) => {
            info!(
                reason = err.code(),
                referential = err.is_referential(),
                "objective payload rejected"
            );
            Err(err.into())
        }
    }
}
