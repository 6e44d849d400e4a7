//! Fixture records displayed until (or unless) live data arrives.

use std::collections::BTreeMap;

use crate::fridge::{FridgeItems, FridgeState, HEALTHY, LESS_HEALTHY};
use crate::occupant::{OccupantMetric, WEIGHT};
use crate::room::RoomState;
use crate::time::Timestamp;

/// Person whose metrics are shown when none is configured.
pub const DEFAULT_PERSON: &str = "sobu";

fn room(
    name: &str,
    occupied: bool,
    door_open: bool,
    window_open: bool,
    readings: (f64, f64, f64),
) -> RoomState {
    let (temperature, humidity, air_quality) = readings;
    RoomState {
        occupied,
        door_open,
        window_open,
        temperature: Some(temperature),
        humidity: Some(humidity),
        air_quality: Some(air_quality),
        ..RoomState::new(name)
    }
}

/// Living room, bedroom and kitchen.
#[must_use]
pub fn rooms() -> Vec<RoomState> {
    vec![
        room("livingroom", true, false, false, (21.5, 42.0, 10.0)),
        room("bedroom", false, false, true, (20.2, 40.0, 12.0)),
        room("kitchen", false, true, false, (22.6, 46.0, 14.0)),
    ]
}

/// A well-stocked kitchen fridge.
#[must_use]
pub fn fridge() -> FridgeState {
    let mut items = BTreeMap::new();
    items.insert(
        HEALTHY.to_string(),
        vec![
            "salad".to_string(),
            "berries".to_string(),
            "Luminora rolls".to_string(),
        ],
    );
    items.insert(LESS_HEALTHY.to_string(), vec!["soda can".to_string()]);

    FridgeState {
        room: "kitchen".to_string(),
        summary: Some("Fresh greens, fruit, and Luminora rolls inside".to_string()),
        health_score: Some(0.82),
        items: Some(FridgeItems::Categorized(items)),
        last_checked_at: None,
    }
}

/// A single demo weight reading captured at `captured_at`.
#[must_use]
pub fn occupant_metrics(captured_at: Timestamp) -> Vec<OccupantMetric> {
    vec![OccupantMetric {
        person: DEFAULT_PERSON.to_string(),
        metric_type: WEIGHT.to_string(),
        weight_kg: Some(68.5),
        captured_at: Some(captured_at.to_rfc3339()),
        source: Some("demo-scale".to_string()),
    }]
}
