use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cryptofolio_core::markets::{top_movers, TopMovers, DEFAULT_MOVERS_LIMIT};
use cryptofolio_market_data::MarketAsset;
use serde::Deserialize;

use crate::main_lib::AppState;

#[derive(Deserialize)]
struct MoversQuery {
    limit: Option<usize>,
}

async fn get_markets(State(state): State<Arc<AppState>>) -> Json<Vec<MarketAsset>> {
    Json(state.refresher.state().markets)
}

async fn get_movers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MoversQuery>,
) -> Json<TopMovers> {
    let limit = query.limit.unwrap_or(DEFAULT_MOVERS_LIMIT);
    Json(top_movers(&state.refresher.state().markets, limit))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/markets", get(get_markets))
        .route("/markets/movers", get(get_movers))
}
