use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use cryptofolio_core::transactions::{
    Transaction, TransactionFilter, TransactionKind, TransactionSummary,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct TransactionQuery {
    search: Option<String>,
    /// A transaction kind, or `all`
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl TransactionQuery {
    fn into_filter(self) -> ApiResult<TransactionFilter> {
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(k) if k.eq_ignore_ascii_case("all") => None,
            Some(k) => Some(k.parse::<TransactionKind>()?),
        };
        Ok(TransactionFilter {
            search: self.search,
            kind,
        })
    }
}

async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let filter = query.into_filter()?;
    Ok(Json(state.transaction_service.search(&filter)?))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionQuery>,
) -> ApiResult<Json<TransactionSummary>> {
    let filter = query.into_filter()?;
    Ok(Json(state.transaction_service.summary(&filter)?))
}

async fn export_csv(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = query.into_filter()?;
    let csv = state.transaction_service.export_csv(&filter)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"transactions.csv\"",
            ),
        ],
        csv,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", get(get_transactions))
        .route("/transactions/summary", get(get_summary))
        .route("/transactions/export", get(export_csv))
}
