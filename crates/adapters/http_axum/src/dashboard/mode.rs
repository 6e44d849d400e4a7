//! Mode toggle form handler.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use eve_app::ports::HomeApi;
use eve_domain::mode::Mode;

use crate::state::AppState;

/// Form data posted by the mode buttons.
#[derive(Deserialize)]
pub struct ModeForm {
    pub mode: Mode,
}

/// `POST /mode`: switch mode, then redirect back to the dashboard (PRG).
pub async fn select<A>(State(state): State<AppState<A>>, Form(form): Form<ModeForm>) -> Redirect
where
    A: HomeApi + 'static,
{
    state.dashboard.select_mode(form.mode).await;
    Redirect::to("/")
}
