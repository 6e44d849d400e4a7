//! View projections: pure functions from domain records to display text.
//!
//! Nothing here can fail: absent fields become placeholders. Timestamps are
//! rendered in the zone handed in by the caller.

pub mod fridge_panel;
pub mod metric_panel;
pub mod page;
pub mod room_card;

pub use fridge_panel::FridgePanel;
pub use metric_panel::MetricPanel;
pub use page::DashboardView;
pub use room_card::RoomCard;

/// Shown in place of a missing reading.
pub const PLACEHOLDER: &str = "\u{2014}";
