//! Fridge: a snapshot of what the kitchen refrigerator holds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category holding items considered healthy.
pub const HEALTHY: &str = "healthy";
/// Category holding items considered less healthy.
pub const LESS_HEALTHY: &str = "less_healthy";

/// Fridge contents as reported by the upstream service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeState {
    pub room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Expected in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<FridgeItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_at: Option<String>,
}

/// Item listing: either grouped by category or a flat list of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FridgeItems {
    Categorized(BTreeMap<String, Vec<String>>),
    Flat(Vec<String>),
}

impl FridgeItems {
    /// Items of one category, or `None` for a flat listing or a missing
    /// category.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[String]> {
        match self {
            Self::Categorized(map) => map.get(name).map(Vec::as_slice),
            Self::Flat(_) => None,
        }
    }

    #[must_use]
    pub fn is_categorized(&self) -> bool {
        matches!(self, Self::Categorized(_))
    }
}
