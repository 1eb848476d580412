//! Routes for the Objectives bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};

use questables_objectives::domain::context::ValidationContext;
use questables_objectives::domain::location::{ObjectiveLocation, validate_location};
use questables_objectives::domain::payload::ObjectivePayload;
use questables_objectives::domain::sanitize::{SanitizedObjective, sanitize_objective_payload};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /sanitize.
#[derive(Debug, Deserialize)]
pub struct SanitizeRequest {
    /// The untrusted objective payload.
    pub payload: ObjectivePayload,
    /// Referential context resolved by the caller.
    pub context: ValidationContext,
}

/// POST /sanitize
#[instrument(skip(state, request), fields(campaign_id = %request.context.campaign_id))]
async fn sanitize(
    State(state): State<AppState>,
    Json(request): Json<SanitizeRequest>,
) -> Result<Json<SanitizedObjective>, ApiError> {
    let ancestors = request.context.ancestor_ids.len();
    if ancestors > state.max_ancestor_ids {
        return Err(ApiError::TooLarge(format!(
            "ancestorIds carries {ancestors} ids; at most {} are accepted",
            state.max_ancestor_ids
        )));
    }

    let objective = sanitize_objective_payload(&request.payload, &request.context)
        .inspect_err(|err| info!(reason = err.code(), "objective payload rejected"))?;

    info!(
        location_type = %objective.location.location_type(),
        has_parent = objective.parent_id.is_some(),
        "objective payload sanitized"
    );

    Ok(Json(objective))
}

/// POST /validate-location
#[instrument(skip(payload))]
async fn validate_location_only(
    Json(payload): Json<ObjectivePayload>,
) -> Result<Json<ObjectiveLocation>, ApiError> {
    let location = validate_location(&payload)
        .inspect_err(|err| info!(reason = err.code(), "objective location rejected"))?;

    Ok(Json(location))
}

/// Returns the router for the objectives context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sanitize", post(sanitize))
        .route("/validate-location", post(validate_location_only))
}
