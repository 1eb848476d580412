//! Raw objective payload as decoded from a request body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::coerce;

/// Untrusted objective fields.
///
/// Every field is an optional, untyped JSON value; type checks happen in the
/// sanitizer. A JSON `null` decodes as `None`, so null and absent are treated
/// the same. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivePayload {
    /// Objective title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_md: Option<Value>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Value>,
    /// Display order among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<Value>,
    /// Whether this is a major objective.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_major: Option<Value>,
    /// `none`, `pin`, `burg`, or `marker`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<Value>,
    /// Pin coordinates, for `pin` locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_pin: Option<Value>,
    /// Burg id, for `burg` locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_burg_id: Option<Value>,
    /// Marker id, for `marker` locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_marker_id: Option<Value>,
    /// Parent objective id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Value>,
}

impl ObjectivePayload {
    /// The parent id, if present and well-formed.
    ///
    /// Used by callers resolving hierarchy context ahead of sanitation. A
    /// malformed id returns `None` here and is reported by the sanitizer.
    #[must_use]
    pub fn parent_reference(&self) -> Option<Uuid> {
        self.parent_id.as_ref().and_then(coerce::identifier)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_null_fields_decode_as_absent() {
        let payload: ObjectivePayload = serde_json::from_value(json!({
            "title": null,
            "orderIndex": null,
            "extra": "ignored",
        }))
        .unwrap();

        assert_eq!(payload, ObjectivePayload::default());
    }

    #[test]
    fn test_camel_case_keys_map_to_fields() {
        let payload: ObjectivePayload = serde_json::from_value(json!({
            "descriptionMd": "Find the map",
            "isMajor": "true",
            "locationMarkerId": "m",
        }))
        .unwrap();

        assert_eq!(payload.description_md, Some(json!("Find the map")));
        assert_eq!(payload.is_major, Some(json!("true")));
        assert_eq!(payload.location_marker_id, Some(json!("m")));
    }

    #[test]
    fn test_parent_reference_ignores_malformed_ids() {
        let parent_id = Uuid::new_v4();
        let valid = ObjectivePayload {
            parent_id: Some(json!(parent_id.to_string())),
            ..ObjectivePayload::default()
        };
        let malformed = ObjectivePayload {
            parent_id: Some(json!("quest-1")),
            ..ObjectivePayload::default()
        };

        assert_eq!(valid.parent_reference(), Some(parent_id));
        assert_eq!(malformed.parent_reference(), None);
    }
}
