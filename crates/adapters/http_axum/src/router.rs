//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use eve_app::ports::HomeApi;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<A>(state: AppState<A>) -> Router
where
    A: HomeApi + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes::<A>())
        .merge(crate::dashboard::routes::<A>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
