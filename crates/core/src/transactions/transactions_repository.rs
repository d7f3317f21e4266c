use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::{PoisonError, RwLock};

use super::transactions_model::{Transaction, TransactionKind};
use super::transactions_traits::TransactionRepositoryTrait;
use crate::errors::Result;

/// Process-local, read-only transaction history.
#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }

    /// History pre-filled with the demo transactions.
    pub fn seeded() -> Self {
        Self::new(vec![
            Transaction {
                id: "1".to_string(),
                date: at(2025, 1, 7, 10, 30),
                kind: TransactionKind::Buy,
                asset: "Bitcoin".to_string(),
                amount: dec!(0.1),
                price: dec!(65432),
                fee: dec!(15.25),
                wallet: "MetaMask Principal".to_string(),
                hash: Some("0x1234...abcd".to_string()),
            },
            Transaction {
                id: "2".to_string(),
                date: at(2025, 1, 6, 15, 45),
                kind: TransactionKind::Sell,
                asset: "Ethereum".to_string(),
                amount: dec!(0.5),
                price: dec!(3450),
                fee: dec!(8.50),
                wallet: "Ledger Hardware".to_string(),
                hash: Some("0x5678...efgh".to_string()),
            },
            Transaction {
                id: "3".to_string(),
                date: at(2025, 1, 5, 9, 15),
                kind: TransactionKind::Transfer,
                asset: "Cardano".to_string(),
                amount: dec!(500),
                price: dec!(0.85),
                fee: dec!(2.00),
                wallet: "MetaMask Principal".to_string(),
                hash: Some("0x9abc...ijkl".to_string()),
            },
        ])
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
