//! # eve-domain
//!
//! Pure domain model for the Eve guardian home dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Rooms** (per-room sensor state: occupancy, door/window, climate)
//! - Define the **Fridge** snapshot (summary, health score, item categories)
//! - Define **Occupant metrics** (body readings such as weight)
//! - Define the household **Mode** (`home` / `away` / `sleep`)
//! - Provide the **fixtures** shown until live data arrives
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod fixtures;
pub mod fridge;
pub mod mode;
pub mod occupant;
pub mod room;
