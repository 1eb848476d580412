//! Resolves the referential context for a sanitize command.
//!
//! This is the caller side of the validator boundary: it reads the parent
//! row and its ancestor chain through an `ObjectiveStore` and packs them into
//! a `ValidationContext`. The snapshot is only as fresh as the reads; callers
//! that mutate the hierarchy must serialize those writes at the storage
//! layer.

use std::collections::HashSet;

use questables_core::error::DomainError;
use questables_core::store::{ObjectiveNode, ObjectiveStore};
use tracing::warn;
use uuid::Uuid;

use crate::domain::commands::SanitizeObjective;
use crate::domain::context::ValidationContext;

/// Default cap on the number of ancestors walked above a parent.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Builds the `ValidationContext` for `command`.
///
/// When the payload names a well-formed parent id, the parent row is loaded
/// and its ancestors are collected by following `parent_id` links upward.
/// A parent owned by another campaign is returned without ancestors.
/// Malformed parent ids are left for the sanitizer to reject.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the parent row does not exist,
/// `DomainError::Validation` if the ancestor chain is longer than
/// `max_depth`, and propagates store failures.
pub async fn load_validation_context(
    command: &SanitizeObjective,
    store: &dyn ObjectiveStore,
    max_depth: usize,
) -> Result<ValidationContext, DomainError> {
    let mut context =
        ValidationContext::new(command.campaign_id).with_require_title(command.require_title);
    if let Some(objective_id) = command.objective_id {
        context = context.with_objective_id(objective_id);
    }

    let Some(parent_id) = command.payload.parent_reference() else {
        return Ok(context);
    };

    let parent = store
        .find_objective(parent_id)
        .await?
        .ok_or(DomainError::NotFound(parent_id))?;

    // Foreign parents skip the walk; the sanitizer rejects them on campaign.
    if parent.campaign_id != command.campaign_id {
        return Ok(context.with_parent(parent.into()));
    }
    let ancestors = collect_ancestors(&parent, store, max_depth).await?;

    Ok(context.with_parent(parent.into()).with_ancestors(ancestors))
}

/// Walks `parent_id` links above `parent`.
///
/// A revisited id means the stored hierarchy already contains a loop; the
/// walk stops and the revisited id stays in the set. A link to a missing row
/// also ends the walk.
async fn collect_ancestors(
    parent: &ObjectiveNode,
    store: &dyn ObjectiveStore,
    max_depth: usize,
) -> Result<HashSet<Uuid>, DomainError> {
    let mut ancestors = HashSet::new();
    let mut next = parent.parent_id;

    while let Some(id) = next {
        if !ancestors.insert(id) {
            warn!(
                parent_id = %parent.id,
                objective_id = %id,
                "stored objective hierarchy contains a cycle"
            );
            break;
        }
        if ancestors.len() > max_depth {
            return Err(DomainError::Validation(format!(
                "objective hierarchy exceeds maximum depth of {max_depth}"
            )));
        }

        next = match store.find_objective(id).await? {
            Some(node) => node.parent_id,
            None => {
                warn!(
                    parent_id = %parent.id,
                    objective_id = %id,
                    "dangling parent link in objective hierarchy"
                );
                None
            }
        };
    }

    Ok(ancestors)
}
