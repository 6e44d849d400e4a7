//! Room: the latest sensor picture of one room.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Aggregated sensor state of a single room.
///
/// Booleans default to `false` when a payload omits them; every reading is
/// optional and absence is rendered as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomState {
    /// Room identifier, unique within a collection (e.g. `"kitchen"`).
    pub room: String,
    #[serde(default)]
    pub occupied: bool,
    #[serde(default)]
    pub door_open: bool,
    #[serde(default)]
    pub window_open: bool,
    /// Degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Air quality index as reported by the sensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_alert_at: Option<String>,
}

impl RoomState {
    /// A room with every flag cleared and no readings.
    #[must_use]
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            occupied: false,
            door_open: false,
            window_open: false,
            temperature: None,
            humidity: None,
            air_quality: None,
            last_seen_at: None,
            last_alert_at: None,
        }
    }

    /// Check domain invariants for a single record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRoomName`] when `room` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.room.trim().is_empty() {
            return Err(ValidationError::EmptyRoomName);
        }
        Ok(())
    }
}

/// Check that every room is valid and that room names are unique.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in collection order.
pub fn validate_collection(rooms: &[RoomState]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(rooms.len());
    for room in rooms {
        room.validate()?;
        if !seen.insert(room.room.as_str()) {
            return Err(ValidationError::DuplicateRoom(room.room.clone()));
        }
    }
    Ok(())
}
