//! Objective validation failures.

use thiserror::Error;
use uuid::Uuid;

use super::location::LocationType;

/// Rejection raised at the first violated gate while sanitizing an objective
/// payload.
///
/// Every variant maps to a stable machine-readable reason via
/// [`ObjectiveValidationError::code`]; callers translate that code into a
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectiveValidationError {
    /// A required title was absent or blank.
    #[error("objective title must not be blank")]
    MissingTitle,

    /// A text field carried a non-string value.
    #[error("{field} must be a string")]
    InvalidTextField {
        /// Payload key of the offending field.
        field: &'static str,
    },

    /// `orderIndex` was not coercible to an integer.
    #[error("orderIndex must be an integer, got {value}")]
    InvalidOrderIndex {
        /// The rejected value, rendered as JSON.
        value: String,
    },

    /// A boolean field was neither a boolean nor `"true"`/`"false"`.
    #[error("{field} must be true or false, got {value}")]
    InvalidBooleanField {
        /// Payload key of the offending field.
        field: &'static str,
        /// The rejected value, rendered as JSON.
        value: String,
    },

    /// `locationType` named an unknown location kind.
    #[error("unsupported location type: {value}")]
    InvalidLocationType {
        /// The rejected value, rendered as JSON.
        value: String,
    },

    /// The location fields present do not match the declared type.
    #[error("location fields do not match location type '{location_type}'")]
    MixedLocationPayload {
        /// The declared location type.
        location_type: LocationType,
    },

    /// Pin coordinates were missing, non-numeric, or non-finite.
    #[error("pin coordinates must be finite numbers")]
    InvalidPinCoordinates,

    /// A burg or marker reference was not a valid identifier.
    #[error("{field} is not a valid identifier")]
    InvalidLocationReference {
        /// Payload key of the offending field.
        field: &'static str,
    },

    /// `parentId` was not a valid identifier, or did not match the parent
    /// row supplied in the context.
    #[error("parentId is not a valid objective reference")]
    InvalidParentReference,

    /// The parent objective belongs to another campaign.
    #[error(
        "parent objective {parent_id} belongs to campaign {parent_campaign_id}, not {campaign_id}"
    )]
    CrossCampaignParent {
        /// The requested parent.
        parent_id: Uuid,
        /// The campaign owning the parent.
        parent_campaign_id: Uuid,
        /// The campaign being edited.
        campaign_id: Uuid,
    },

    /// Attaching to the parent would make the hierarchy cyclic.
    #[error("attaching to parent objective {parent_id} would create a cycle")]
    CyclicHierarchy {
        /// The requested parent.
        parent_id: Uuid,
    },
}

impl ObjectiveValidationError {
    /// Returns the stable reason code for this failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTitle => "missing_title",
            Self::InvalidTextField { .. } => "invalid_text_field",
            Self::InvalidOrderIndex { .. } => "invalid_order_index",
            Self::InvalidBooleanField { .. } => "invalid_boolean_field",
            Self::InvalidLocationType { .. } => "invalid_location_type",
            Self::MixedLocationPayload { .. } => "mixed_location_payload",
            Self::InvalidPinCoordinates => "invalid_pin_coordinates",
            Self::InvalidLocationReference { .. } => "invalid_location_reference",
            Self::InvalidParentReference => "invalid_parent_reference",
            Self::CrossCampaignParent { .. } => "cross_campaign_parent",
            Self::CyclicHierarchy { .. } => "cyclic_hierarchy",
        }
    }

    /// True for failures caused by the objective hierarchy rather than the
    /// shape of the payload.
    #[must_use]
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            Self::CrossCampaignParent { .. } | Self::CyclicHierarchy { .. }
        )
    }
}
