//! Metric panel: the latest weight reading.

use serde::Serialize;

use eve_domain::occupant::{self, OccupantMetric};
use eve_domain::time::{self, DisplayZone};

/// Display form of the selected weight metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricPanel {
    /// e.g. `70.3 kg`, or `N/A`.
    pub weight: String,
    /// e.g. `Updated 1/1/2024, 12:00:00 AM`, or a waiting notice.
    pub updated: String,
}

impl MetricPanel {
    /// Render the first `"weight"` entry of `metrics`.
    #[must_use]
    pub fn render(metrics: &[OccupantMetric], zone: &DisplayZone) -> Self {
        let latest = occupant::select_weight(metrics);

        let weight = latest
            .and_then(|metric| metric.weight_kg)
            .map_or_else(|| "N/A".to_string(), format_weight);
        let updated = latest
            .and_then(|metric| metric.captured_at.as_deref())
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(
                || "Waiting for scale data".to_string(),
                |raw| format!("Updated {}", time::display(raw, zone)),
            );

        Self { weight, updated }
    }
}

/// One decimal, halves rounded away from zero: `70.25` → `70.3 kg`.
fn format_weight(kg: f64) -> String {
    format!("{:.1} kg", (kg * 10.0).round() / 10.0)
}
