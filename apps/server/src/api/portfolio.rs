use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use cryptofolio_core::{portfolio::PortfolioOutcome, refresh::RefreshOutcome, session::UserSession};
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioResponse {
    outcome: PortfolioOutcome,
    loading: bool,
    error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<PortfolioResponse> {
    let dashboard = state.refresher.state();
    Json(PortfolioResponse {
        outcome: dashboard.outcome(),
        loading: dashboard.loading,
        error: dashboard.error,
        last_updated: dashboard.last_updated,
    })
}

async fn refresh_portfolio(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<UserSession>,
) -> Json<RefreshOutcome> {
    Json(state.refresher.refresh(&session.user_id).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/refresh", post(refresh_portfolio))
}
