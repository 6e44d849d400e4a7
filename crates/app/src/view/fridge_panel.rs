//! Fridge panel: summary, health score and item categories.

use serde::Serialize;

use eve_domain::fridge::{FridgeState, HEALTHY, LESS_HEALTHY};

/// Display form of a [`FridgeState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FridgePanel {
    /// Empty when the fridge reports no summary.
    pub summary: String,
    /// Rounded percentage such as `82%`, or `N/A`.
    pub health: String,
    /// Present only when items are grouped by category.
    pub categories: Option<FridgeCategories>,
}

/// Comma-joined item names per category, `n/a` when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FridgeCategories {
    pub healthy: String,
    pub less_healthy: String,
}

impl FridgePanel {
    #[must_use]
    pub fn render(fridge: &FridgeState) -> Self {
        let categories = fridge
            .items
            .as_ref()
            .filter(|items| items.is_categorized())
            .map(|items| FridgeCategories {
                healthy: join_or_na(items.category(HEALTHY)),
                less_healthy: join_or_na(items.category(LESS_HEALTHY)),
            });

        Self {
            summary: fridge.summary.clone().unwrap_or_default(),
            health: fridge
                .health_score
                .map_or_else(|| "N/A".to_string(), health_percent),
            categories,
        }
    }
}

/// `0.82` → `82%`.
#[must_use]
pub fn health_percent(score: f64) -> String {
    // `+ 0.0` turns a negative zero into `0`
    format!("{:.0}%", (score * 100.0).round() + 0.0)
}

fn join_or_na(items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eve_domain::fixtures;
    use eve_domain::fridge::FridgeItems;
    use std::collections::BTreeMap;

    fn bare_fridge() -> FridgeState {
        FridgeState {
            room: "kitchen".to_string(),
            summary: None,
            health_score: None,
            items: None,
            last_checked_at: None,
        }
    }

    #[test]
    fn should_render_fixture_fridge() {
        let panel = FridgePanel::render(&fixtures::fridge());

        assert_eq!(panel.summary, "Fresh greens, fruit, and Luminora rolls inside");
        assert_eq!(panel.health, "82%");
        let categories = panel.categories.unwrap();
        assert_eq!(categories.healthy, "salad, berries, Luminora rolls");
        assert_eq!(categories.less_healthy, "soda can");
    }

    #[test]
    fn should_render_na_when_health_missing() {
        let panel = FridgePanel::render(&bare_fridge());
        assert_eq!(panel.health, "N/A");
        assert_eq!(panel.summary, "");
        assert!(panel.categories.is_none());
    }

    #[test]
    fn should_round_health_to_nearest_percent() {
        assert_eq!(health_percent(0.826), "83%");
        assert_eq!(health_percent(0.824), "82%");
        assert_eq!(health_percent(1.0), "100%");
        assert_eq!(health_percent(0.0), "0%");
    }

    #[test]
    fn should_not_render_negative_zero_percent() {
        assert_eq!(health_percent(-0.001), "0%");
        assert_eq!(health_percent(-0.0), "0%");
    }

    #[test]
    fn should_render_na_for_missing_or_empty_categories() {
        let mut map = BTreeMap::new();
        map.insert(HEALTHY.to_string(), Vec::new());
        let fridge = FridgeState {
            items: Some(FridgeItems::Categorized(map)),
            ..bare_fridge()
        };

        let categories = FridgePanel::render(&fridge).categories.unwrap();
        assert_eq!(categories.healthy, "n/a");
        assert_eq!(categories.less_healthy, "n/a");
    }

    #[test]
    fn should_skip_categories_for_flat_items() {
        let fridge = FridgeState {
            items: Some(FridgeItems::Flat(vec!["milk".to_string()])),
            ..bare_fridge()
        };
        assert!(FridgePanel::render(&fridge).categories.is_none());
    }
}
