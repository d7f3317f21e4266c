use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use cryptofolio_core::alerts::{Alert, NewAlert};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Alert>>> {
    let alerts = state.alert_service.get_alerts()?;
    Ok(Json(alerts))
}

async fn create_alert(
    State(state): State<Arc<AppState>>,
    Json(alert): Json<NewAlert>,
) -> ApiResult<Json<Alert>> {
    let created = state.alert_service.create_alert(alert).await?;
    Ok(Json(created))
}

async fn toggle_alert(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Alert>> {
    let alert = state.alert_service.toggle_alert(&id).await?;
    Ok(Json(alert))
}

async fn delete_alert(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.alert_service.delete_alert(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/alerts", get(get_alerts).post(create_alert))
        .route("/alerts/{id}/toggle", put(toggle_alert))
        .route("/alerts/{id}", delete(delete_alert))
}
