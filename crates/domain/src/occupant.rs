//! Occupant metrics: opt-in body readings from a local scale.

use serde::{Deserialize, Serialize};

/// `metric_type` value identifying a weight reading.
pub const WEIGHT: &str = "weight";

/// One body metric reading for a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupantMetric {
    pub person: String,
    /// Kind of reading, e.g. `"weight"`.
    pub metric_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
    /// Provenance label, e.g. the scale that produced the reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl OccupantMetric {
    #[must_use]
    pub fn is_weight(&self) -> bool {
        self.metric_type == WEIGHT
    }
}

/// First weight reading in `metrics`, in collection order.
#[must_use]
pub fn select_weight(metrics: &[OccupantMetric]) -> Option<&OccupantMetric> {
    metrics.iter().find(|metric| metric.is_weight())
}
