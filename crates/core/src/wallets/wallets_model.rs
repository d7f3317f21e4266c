//! Wallet domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Metamask,
    Ledger,
    Coinbase,
    Trust,
}

/// Domain model representing a wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub kind: WalletKind,
    pub address: String,
    /// Balance in the listing currency
    pub balance: Decimal,
    pub is_connected: bool,
}

/// Input model for adding a wallet
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub name: String,
    pub kind: WalletKind,
    pub address: String,
    #[serde(default)]
    pub balance: Decimal,
}

impl NewWallet {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address".to_string()).into());
        }
        if self.balance < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Wallet balance cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Header figures for the wallets page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    pub total_balance: Decimal,
    pub connected: usize,
    pub total: usize,
}

impl WalletSummary {
    pub fn from_wallets(wallets: &[Wallet]) -> Self {
        Self {
            total_balance: wallets.iter().map(|w| w.balance).sum(),
            connected: wallets.iter().filter(|w| w.is_connected).count(),
            total: wallets.len(),
        }
    }
}

/// Shortens an address to its first 8 and last 6 characters.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("0x742d35Cc6aF06532857a7e92B87a7a24ccB"),
            "0x742d35...a24ccB"
        );
        assert_eq!(format_address("short"), "short");
        assert_eq!(format_address("exactly14chars"), "exactly14chars");
    }

    #[test]
    fn test_wallet_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&WalletKind::Metamask).unwrap(),
            "\"metamask\""
        );
        assert_eq!(
            serde_json::from_str::<WalletKind>("\"ledger\"").unwrap(),
            WalletKind::Ledger
        );
    }

    #[test]
    fn test_new_wallet_validation() {
        let mut wallet = NewWallet {
            name: "Trust".to_string(),
            kind: WalletKind::Trust,
            address: "0xabc".to_string(),
            balance: dec!(10),
        };
        assert!(wallet.validate().is_ok());

        wallet.balance = dec!(-1);
        assert!(wallet.validate().is_err());

        wallet.balance = dec!(0);
        wallet.address = " ".to_string();
        assert!(wallet.validate().is_err());
    }
}
