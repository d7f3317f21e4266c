use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use cryptofolio_core::wallets::{format_address, NewWallet, Wallet, WalletSummary};
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WalletResponse {
    #[serde(flatten)]
    wallet: Wallet,
    display_address: String,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        let display_address = format_address(&wallet.address);
        Self {
            wallet,
            display_address,
        }
    }
}

async fn get_wallets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WalletResponse>>> {
    let wallets = state.wallet_service.get_wallets()?;
    Ok(Json(wallets.into_iter().map(WalletResponse::from).collect()))
}

async fn add_wallet(
    State(state): State<Arc<AppState>>,
    Json(wallet): Json<NewWallet>,
) -> ApiResult<Json<WalletResponse>> {
    let added = state.wallet_service.add_wallet(wallet).await?;
    Ok(Json(added.into()))
}

async fn delete_wallet(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.wallet_service.delete_wallet(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<WalletSummary>> {
    Ok(Json(state.wallet_service.summary()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wallets", get(get_wallets).post(add_wallet))
        .route("/wallets/summary", get(get_summary))
        .route("/wallets/{id}", delete(delete_wallet))
}
