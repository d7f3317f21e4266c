//! Wallets module - connected wallets and exchange accounts with their balances.

mod wallets_model;
mod wallets_repository;
mod wallets_service;
mod wallets_traits;

pub use wallets_model::{format_address, NewWallet, Wallet, WalletKind, WalletSummary};
pub use wallets_repository::InMemoryWalletRepository;
pub use wallets_service::WalletService;
pub use wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
