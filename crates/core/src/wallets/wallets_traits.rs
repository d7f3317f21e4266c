use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet, WalletSummary};
use crate::errors::Result;

/// Trait for wallet repository operations
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    fn load_wallets(&self) -> Result<Vec<Wallet>>;
    async fn insert_wallet(&self, wallet: Wallet) -> Result<Wallet>;
    async fn delete_wallet(&self, wallet_id: &str) -> Result<usize>;
}

/// Trait for wallet service operations
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    fn get_wallets(&self) -> Result<Vec<Wallet>>;
    async fn add_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;
    async fn delete_wallet(&self, wallet_id: &str) -> Result<()>;
    fn summary(&self) -> Result<WalletSummary>;
}
