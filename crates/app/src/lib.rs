//! # eve-app
//!
//! Application layer: use-cases, **port definitions** (traits) and view
//! projections.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HomeApi`: read rooms, fridges and occupant metrics from the home API
//! - Define **driving/inbound** use-cases:
//!   - `Dashboard`: owns the dashboard state, fetches live data once on
//!     mount and falls back to fixtures on any failure
//!   - `ModeController`: home / away / sleep toggle with derived banner
//! - Project immutable snapshots into **views** (room cards, fridge and
//!   metric panels) without knowing how they are rendered
//!
//! ## Dependency rule
//! Depends on `eve-domain` only (plus `tokio` for tasks and locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod view;
