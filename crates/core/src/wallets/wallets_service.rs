use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::wallets_model::{NewWallet, Wallet, WalletSummary};
use super::wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing wallets
pub struct WalletService {
    repository: Arc<dyn WalletRepositoryTrait>,
}

impl WalletService {
    pub fn new(repository: Arc<dyn WalletRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl WalletServiceTrait for WalletService {
    fn get_wallets(&self) -> Result<Vec<Wallet>> {
        self.repository.load_wallets()
    }

    async fn add_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        new_wallet.validate()?;
        let wallet = Wallet {
            id: Uuid::now_v7().to_string(),
            name: new_wallet.name.trim().to_string(),
            kind: new_wallet.kind,
            address: new_wallet.address.trim().to_string(),
            balance: new_wallet.balance,
            is_connected: true,
        };
        debug!("Adding wallet {} ({:?})", wallet.name, wallet.kind);
        self.repository.insert_wallet(wallet).await
    }

    async fn delete_wallet(&self, wallet_id: &str) -> Result<()> {
        match self.repository.delete_wallet(wallet_id).await? {
            0 => Err(Error::NotFound(format!("Wallet {}", wallet_id))),
            _ => Ok(()),
        }
    }

    fn summary(&self) -> Result<WalletSummary> {
        let wallets = self.repository.load_wallets()?;
        Ok(WalletSummary::from_wallets(&wallets))
    }
}
