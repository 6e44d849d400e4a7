//! # eve-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: pure HTML forms + `<meta http-equiv="refresh">`
//!   so data fetched after the first render shows up on its own
//! - Serve the same view model as JSON under `/api/dashboard`
//! - Map the mode toggle form into `Dashboard::select_mode` (PRG pattern)
//!
//! ## Dependency rule
//! Depends on `eve-app` (for the dashboard service, port trait and views)
//! and `eve-domain` (for the `Mode` form value). Never leaks axum types into
//! the domain.

pub mod api;
pub mod dashboard;
pub mod router;
pub mod state;
