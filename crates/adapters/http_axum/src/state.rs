//! Shared application state for axum handlers.

use std::sync::Arc;

use eve_app::ports::HomeApi;
use eve_app::services::dashboard::Dashboard;
use eve_domain::time::DisplayZone;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so `A` itself does not need to be
/// `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<A> {
    /// The dashboard coordinator, shared with the composition root so it
    /// can be torn down on shutdown.
    pub dashboard: Arc<Dashboard<A>>,
    /// Zone timestamps are displayed in.
    pub zone: DisplayZone,
    /// Page auto-reload interval.
    pub refresh_seconds: u32,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
            zone: self.zone,
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<A> AppState<A>
where
    A: HomeApi + 'static,
{
    pub fn new(dashboard: Arc<Dashboard<A>>, zone: DisplayZone, refresh_seconds: u32) -> Self {
        Self {
            dashboard,
            zone,
            refresh_seconds,
        }
    }
}
