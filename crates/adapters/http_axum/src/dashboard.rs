//! Server-side rendered HTML dashboard (no JavaScript).

pub mod home;
pub mod mode;

use axum::Router;
use axum::routing::{get, post};

use eve_app::ports::HomeApi;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: HomeApi + 'static,
{
    Router::new()
        .route("/", get(home::index::<A>))
        .route("/mode", post(mode::select::<A>))
}
