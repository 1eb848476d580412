//! Map anchoring for objectives.
//!
//! An objective is anchored to at most one thing on the campaign map: a free
//! pin, a burg (settlement), or a marker. The wire format carries this as four
//! loosely-typed optional fields; here it is a tagged enum so a location with
//! two anchors cannot be constructed at all.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use super::coerce;
use super::error::ObjectiveValidationError;
use super::payload::ObjectivePayload;

/// Discriminant of an [`ObjectiveLocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Not anchored.
    None,
    /// Anchored to free map coordinates.
    Pin,
    /// Anchored to a settlement.
    Burg,
    /// Anchored to a map marker.
    Marker,
}

impl LocationType {
    /// Wire spelling of the location type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pin => "pin",
            Self::Burg => "burg",
            Self::Marker => "marker",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = ObjectiveValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pin" => Ok(Self::Pin),
            "burg" => Ok(Self::Burg),
            "marker" => Ok(Self::Marker),
            other => Err(ObjectiveValidationError::InvalidLocationType {
                value: Value::String(other.to_owned()).to_string(),
            }),
        }
    }
}

/// Finite map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PinCoordinates {
    x: f64,
    y: f64,
}

impl PinCoordinates {
    /// Builds a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPinCoordinates` if either axis is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self, ObjectiveValidationError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(ObjectiveValidationError::InvalidPinCoordinates)
        }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Where, if anywhere, an objective is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ObjectiveLocation {
    /// Not anchored.
    #[default]
    None,
    /// Free map coordinates.
    Pin(PinCoordinates),
    /// A settlement, by id.
    Burg(Uuid),
    /// A map marker, by id.
    Marker(Uuid),
}

impl ObjectiveLocation {
    /// The discriminant of this location.
    #[must_use]
    pub fn location_type(&self) -> LocationType {
        match self {
            Self::None => LocationType::None,
            Self::Pin(_) => LocationType::Pin,
            Self::Burg(_) => LocationType::Burg,
            Self::Marker(_) => LocationType::Marker,
        }
    }

    /// Pin coordinates, when anchored to a pin.
    #[must_use]
    pub fn pin(&self) -> Option<PinCoordinates> {
        match self {
            Self::Pin(pin) => Some(*pin),
            _ => None,
        }
    }

    /// Burg id, when anchored to a burg.
    #[must_use]
    pub fn burg_id(&self) -> Option<Uuid> {
        match self {
            Self::Burg(id) => Some(*id),
            _ => None,
        }
    }

    /// Marker id, when anchored to a marker.
    #[must_use]
    pub fn marker_id(&self) -> Option<Uuid> {
        match self {
            Self::Marker(id) => Some(*id),
            _ => None,
        }
    }
}

/// Flat storage/wire shape: one discriminant plus three nullable columns.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlatLocation {
    #[serde(rename = "type")]
    location_type: LocationType,
    pin: Option<PinCoordinates>,
    burg_id: Option<Uuid>,
    marker_id: Option<Uuid>,
}

impl Serialize for ObjectiveLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlatLocation {
            location_type: self.location_type(),
            pin: self.pin(),
            burg_id: self.burg_id(),
            marker_id: self.marker_id(),
        }
        .serialize(serializer)
    }
}

/// Validates the location fields of a raw payload.
///
/// An absent `locationType`, or `"none"`, yields [`ObjectiveLocation::None`]
/// and any stray location fields are dropped. For the other types exactly the
/// matching field must be present. No existence check is made against
/// storage.
///
/// # Errors
///
/// Returns `InvalidLocationType`, `MixedLocationPayload`,
/// `InvalidPinCoordinates`, or `InvalidLocationReference`.
pub fn validate_location(
    payload: &ObjectivePayload,
) -> Result<ObjectiveLocation, ObjectiveValidationError> {
    let location_type = match payload.location_type.as_ref() {
        None => return Ok(ObjectiveLocation::None),
        Some(Value::String(raw)) => raw.trim().parse::<LocationType>()?,
        Some(other) => {
            return Err(ObjectiveValidationError::InvalidLocationType {
                value: other.to_string(),
            });
        }
    };

    let pin = payload.location_pin.as_ref();
    let burg_id = payload.location_burg_id.as_ref();
    let marker_id = payload.location_marker_id.as_ref();
    let mixed = ObjectiveValidationError::MixedLocationPayload { location_type };

    match location_type {
        LocationType::None => Ok(ObjectiveLocation::None),
        LocationType::Pin => match (pin, burg_id, marker_id) {
            (Some(pin), None, None) => parse_pin(pin).map(ObjectiveLocation::Pin),
            _ => Err(mixed),
        },
        LocationType::Burg => match (pin, burg_id, marker_id) {
            (None, Some(id), None) => {
                reference("locationBurgId", id).map(ObjectiveLocation::Burg)
            }
            _ => Err(mixed),
        },
        LocationType::Marker => match (pin, burg_id, marker_id) {
            (None, None, Some(id)) => {
                reference("locationMarkerId", id).map(ObjectiveLocation::Marker)
            }
            _ => Err(mixed),
        },
    }
}

/// Accepts `{ "x": .., "y": .. }` or `[x, y]`.
fn parse_pin(value: &Value) -> Result<PinCoordinates, ObjectiveValidationError> {
    let (x, y) = match value {
        Value::Object(map) => (map.get("x"), map.get("y")),
        Value::Array(items) if items.len() == 2 => (items.first(), items.get(1)),
        _ => return Err(ObjectiveValidationError::InvalidPinCoordinates),
    };

    let axis = |v: Option<&Value>| {
        v.and_then(coerce::finite_f64)
            .ok_or(ObjectiveValidationError::InvalidPinCoordinates)
    };

    PinCoordinates::new(axis(x)?, axis(y)?)
}

fn reference(field: &'static str, value: &Value) -> Result<Uuid, ObjectiveValidationError> {
    coerce::identifier(value).ok_or(ObjectiveValidationError::InvalidLocationReference { field })
}
