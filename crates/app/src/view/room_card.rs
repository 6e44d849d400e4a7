//! Room card: one room's sensor picture as display text.

use serde::Serialize;

use eve_domain::room::RoomState;
use eve_domain::time::{self, DisplayZone};

use super::PLACEHOLDER;

/// Occupancy badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pill {
    pub label: &'static str,
    pub active: bool,
}

/// Display form of a [`RoomState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCard {
    pub name: String,
    pub occupancy: Pill,
    pub door: &'static str,
    pub window: &'static str,
    pub temperature: String,
    pub humidity: String,
    pub air_quality: String,
    pub last_seen: String,
}

impl RoomCard {
    #[must_use]
    pub fn render(room: &RoomState, zone: &DisplayZone) -> Self {
        Self {
            name: room.room.clone(),
            occupancy: Pill {
                label: if room.occupied { "Occupied" } else { "Empty" },
                active: room.occupied,
            },
            door: open_closed(room.door_open),
            window: open_closed(room.window_open),
            temperature: reading(room.temperature),
            humidity: reading(room.humidity),
            air_quality: reading(room.air_quality),
            last_seen: room
                .last_seen_at
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .map_or_else(|| "n/a".to_string(), |raw| time::display(raw, zone)),
        }
    }

    #[must_use]
    pub fn door_window_line(&self) -> String {
        format!("Door: {} \u{b7} Window: {}", self.door, self.window)
    }

    #[must_use]
    pub fn readings_line(&self) -> String {
        format!(
            "Temp: {}\u{b0}C \u{b7} Humidity: {}% \u{b7} Air Q: {}",
            self.temperature, self.humidity, self.air_quality
        )
    }

    #[must_use]
    pub fn last_seen_line(&self) -> String {
        format!("Last seen: {}", self.last_seen)
    }
}

fn open_closed(open: bool) -> &'static str {
    if open { "Open" } else { "Closed" }
}

fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}
