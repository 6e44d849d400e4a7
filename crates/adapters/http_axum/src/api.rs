//! JSON API handlers.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

use eve_app::ports::HomeApi;
use eve_app::view::DashboardView;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: HomeApi + 'static,
{
    Router::new().route("/dashboard", get(dashboard::<A>))
}

/// `GET /api/dashboard`: the dashboard view model as JSON.
pub async fn dashboard<A>(State(state): State<AppState<A>>) -> Json<DashboardView>
where
    A: HomeApi + 'static,
{
    let snapshot = state.dashboard.snapshot().await;
    Json(DashboardView::render(&snapshot, &state.zone))
}
