//! Dashboard home page: banner, mode toggle, panels and room cards.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use eve_app::ports::HomeApi;
use eve_app::view::DashboardView;

use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u32,
    view: DashboardView,
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: the dashboard.
pub async fn index<A>(State(state): State<AppState<A>>) -> DashboardTemplate
where
    A: HomeApi + 'static,
{
    let snapshot = state.dashboard.snapshot().await;

    DashboardTemplate {
        refresh_seconds: state.refresh_seconds,
        view: DashboardView::render(&snapshot, &state.zone),
    }
}
