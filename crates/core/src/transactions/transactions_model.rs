//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Column headers of the CSV export.
pub const CSV_HEADERS: [&str; 8] = [
    "Date", "Type", "Asset", "Amount", "Price", "Value", "Fee", "Wallet",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
    Transfer,
    Receive,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "buy",
            TransactionKind::Sell => "sell",
            TransactionKind::Transfer => "transfer",
            TransactionKind::Receive => "receive",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(TransactionKind::Buy),
            "sell" => Ok(TransactionKind::Sell),
            "transfer" => Ok(TransactionKind::Transfer),
            "receive" => Ok(TransactionKind::Receive),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown transaction type '{}'",
                other
            ))
            .into()),
        }
    }
}

/// Domain model representing a recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub kind: TransactionKind,
    /// Asset display name
    pub asset: String,
    pub amount: Decimal,
    /// Unit price at execution
    pub price: Decimal,
    pub fee: Decimal,
    /// Wallet display name
    pub wallet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Transaction {
    pub fn value(&self) -> Decimal {
        self.amount * self.price
    }
}

/// History filter. An empty search and no kind select everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    /// Search text matches asset or wallet name, case-insensitively.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let kind_ok = self.kind.map_or(true, |kind| kind == transaction.kind);
        if !kind_ok {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                transaction.asset.to_lowercase().contains(&needle)
                    || transaction.wallet.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Totals over a filtered history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub count: usize,
    pub total_value: Decimal,
    pub total_fees: Decimal,
}

impl TransactionSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            count: transactions.len(),
            total_value: transactions.iter().map(Transaction::value).sum(),
            total_fees: transactions.iter().map(|t| t.fee).sum(),
        }
    }
}
