//! Objective payload sanitation.
//!
//! [`sanitize_objective_payload`] is the single gate between an untrusted
//! request body and a record the data layer may persist. It runs a fixed
//! sequence of checks and stops at the first failure. It performs no I/O;
//! everything it needs about the hierarchy arrives in the
//! [`ValidationContext`].

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::coerce;
use super::context::ValidationContext;
use super::error::ObjectiveValidationError;
use super::location::{ObjectiveLocation, validate_location};
use super::payload::ObjectivePayload;

/// Markdown body of an objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownDescription {
    /// Trimmed Markdown source.
    pub description_md: String,
}

/// Canonical objective record, safe to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedObjective {
    /// Trimmed title. Absent only for partial updates that omitted it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description, when a non-blank one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownDescription>,
    /// Trimmed, lower-cased slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Display order among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    /// Whether this is a major objective.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_major: Option<bool>,
    /// Map anchoring; `none` when not anchored.
    pub location: ObjectiveLocation,
    /// Parent objective id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

impl SanitizedObjective {
    /// Converts the record back into request-payload form so it can be
    /// sanitized again.
    #[must_use]
    pub fn to_payload(&self) -> ObjectivePayload {
        let location = &self.location;
        let location_type = match location {
            ObjectiveLocation::None => None,
            other => Some(Value::from(other.location_type().as_str())),
        };

        ObjectivePayload {
            title: self.title.clone().map(Value::from),
            description_md: self
                .markdown
                .as_ref()
                .map(|m| Value::from(m.description_md.clone())),
            slug: self.slug.clone().map(Value::from),
            order_index: self.order_index.map(Value::from),
            is_major: self.is_major.map(Value::from),
            location_type,
            location_pin: location
                .pin()
                .map(|pin| json!({ "x": pin.x(), "y": pin.y() })),
            location_burg_id: location.burg_id().map(|id| Value::from(id.to_string())),
            location_marker_id: location.marker_id().map(|id| Value::from(id.to_string())),
            parent_id: self.parent_id.map(|id| Value::from(id.to_string())),
        }
    }
}

/// Sanitizes a raw objective payload against its referential context.
///
/// Checks run in order (title, description, slug, order index, major flag,
/// location, parent) and the first failure is returned. The input is never
/// modified and the result depends only on the arguments.
///
/// # Errors
///
/// Returns the `ObjectiveValidationError` for the first violated check.
pub fn sanitize_objective_payload(
    payload: &ObjectivePayload,
    context: &ValidationContext,
) -> Result<SanitizedObjective, ObjectiveValidationError> {
    let title = title(payload.title.as_ref(), context.require_title)?;
    let markdown = optional_text("descriptionMd", payload.description_md.as_ref())?
        .map(|description_md| MarkdownDescription { description_md });
    let slug = optional_text("slug", payload.slug.as_ref())?.map(|s| s.to_lowercase());
    let order_index = payload.order_index.as_ref().map(order_index).transpose()?;
    let is_major = payload
        .is_major
        .as_ref()
        .map(|v| boolean_field("isMajor", v))
        .transpose()?;
    let location = validate_location(payload)?;
    let parent_id = payload
        .parent_id
        .as_ref()
        .map(|v| parent(v, context))
        .transpose()?;

    Ok(SanitizedObjective {
        title,
        markdown,
        slug,
        order_index,
        is_major,
        location,
        parent_id,
    })
}

fn title(
    value: Option<&Value>,
    required: bool,
) -> Result<Option<String>, ObjectiveValidationError> {
    match value {
        None if required => Err(ObjectiveValidationError::MissingTitle),
        None => Ok(None),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ObjectiveValidationError::MissingTitle)
            } else {
                Ok(Some(trimmed.to_owned()))
            }
        }
        Some(_) => Err(ObjectiveValidationError::InvalidTextField { field: "title" }),
    }
}

/// Trims a text field; blank becomes absent.
fn optional_text(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, ObjectiveValidationError> {
    match value {
        None => Ok(None),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
        }
        Some(_) => Err(ObjectiveValidationError::InvalidTextField { field }),
    }
}

fn order_index(value: &Value) -> Result<i32, ObjectiveValidationError> {
    coerce::integer_i32(value).ok_or_else(|| ObjectiveValidationError::InvalidOrderIndex {
        value: value.to_string(),
    })
}

fn boolean_field(field: &'static str, value: &Value) -> Result<bool, ObjectiveValidationError> {
    coerce::boolean(value).ok_or_else(|| ObjectiveValidationError::InvalidBooleanField {
        field,
        value: value.to_string(),
    })
}

fn parent(value: &Value, context: &ValidationContext) -> Result<Uuid, ObjectiveValidationError> {
    let parent_id =
        coerce::identifier(value).ok_or(ObjectiveValidationError::InvalidParentReference)?;

    if let Some(parent) = &context.parent_objective {
        if parent.id != parent_id {
            return Err(ObjectiveValidationError::InvalidParentReference);
        }
        if parent.campaign_id != context.campaign_id {
            return Err(ObjectiveValidationError::CrossCampaignParent {
                parent_id,
                parent_campaign_id: parent.campaign_id,
                campaign_id: context.campaign_id,
            });
        }
    }

    // The parent may not sit in its own ancestry, and an existing objective
    // may not be attached to itself or beneath one of its descendants.
    let cyclic = context.ancestor_ids.contains(&parent_id)
        || context
            .objective_id
            .is_some_and(|id| id == parent_id || context.ancestor_ids.contains(&id));
    if cyclic {
        return Err(ObjectiveValidationError::CyclicHierarchy { parent_id });
    }

    Ok(parent_id)
}
