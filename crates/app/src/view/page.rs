//! Full dashboard page model, assembled from a [`DashboardSnapshot`].

use serde::Serialize;

use eve_domain::mode::Mode;
use eve_domain::time::DisplayZone;

use super::{FridgePanel, MetricPanel, RoomCard};
use crate::services::dashboard::DashboardSnapshot;

/// Name shown in the banner.
pub const TITLE: &str = "Eve guardian";

/// Greeting banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub title: &'static str,
    pub alert: &'static str,
    pub accent_color: &'static str,
}

/// One button of the mode toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeButton {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub banner: Banner,
    pub modes: Vec<ModeButton>,
    pub fridge: FridgePanel,
    pub metric: MetricPanel,
    pub rooms: Vec<RoomCard>,
}

impl DashboardView {
    #[must_use]
    pub fn render(snapshot: &DashboardSnapshot, zone: &DisplayZone) -> Self {
        Self {
            banner: Banner {
                title: TITLE,
                alert: snapshot.alert,
                accent_color: snapshot.accent_color,
            },
            modes: Mode::ALL
                .into_iter()
                .map(|mode| ModeButton {
                    value: mode.as_str(),
                    label: mode.label(),
                    selected: mode == snapshot.mode,
                })
                .collect(),
            fridge: FridgePanel::render(&snapshot.fridge),
            metric: MetricPanel::render(&snapshot.metrics, zone),
            rooms: snapshot
                .rooms
                .iter()
                .map(|room| RoomCard::render(room, zone))
                .collect(),
        }
    }
}
