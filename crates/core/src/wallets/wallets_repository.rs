use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::{PoisonError, RwLock};

use super::wallets_model::{Wallet, WalletKind};
use super::wallets_traits::WalletRepositoryTrait;
use crate::errors::{Error, Result};

/// Process-local wallet store.
#[derive(Debug, Default)]
pub struct InMemoryWalletRepository {
    wallets: RwLock<Vec<Wallet>>,
}

impl InMemoryWalletRepository {
    pub fn new(wallets: Vec<Wallet>) -> Self {
        Self {
            wallets: RwLock::new(wallets),
        }
    }

    /// Store pre-filled with the demo wallets.
    pub fn seeded() -> Self {
        Self::new(vec![
            Wallet {
                id: "1".to_string(),
                name: "MetaMask Principal".to_string(),
                kind: WalletKind::Metamask,
                address: "0x742d35Cc6aF06532857a7e92B87a7a24ccB".to_string(),
                balance: dec!(15420.50),
                is_connected: true,
            },
            Wallet {
                id: "2".to_string(),
                name: "Ledger Hardware".to_string(),
                kind: WalletKind::Ledger,
                address: "0x8ba1f109551bD432803012645Hac189B739".to_string(),
                balance: dec!(8750.25),
                is_connected: true,
            },
        ])
    }
}

#[async_trait]
impl WalletRepositoryTrait for InMemoryWalletRepository {
    fn load_wallets(&self) -> Result<Vec<Wallet>> {
        Ok(self
            .wallets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn insert_wallet(&self, wallet: Wallet) -> Result<Wallet> {
        let mut wallets = self.wallets.write().unwrap_or_else(PoisonError::into_inner);
        if wallets.iter().any(|w| w.id == wallet.id) {
            return Err(Error::Repository(format!(
                "Wallet {} already exists",
                wallet.id
            )));
        }
        wallets.push(wallet.clone());
        Ok(wallet)
    }

    async fn delete_wallet(&self, wallet_id: &str) -> Result<usize> {
        let mut wallets = self.wallets.write().unwrap_or_else(PoisonError::into_inner);
        let before = wallets.len();
        wallets.retain(|w| w.id != wallet_id);
        Ok(before - wallets.len())
    }
}
