use super::transactions_model::{Transaction, TransactionFilter, TransactionSummary};
use crate::errors::Result;

/// Trait for transaction repository operations
pub trait TransactionRepositoryTrait: Send + Sync {
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Trait for transaction history operations
pub trait TransactionServiceTrait: Send + Sync {
    /// Matching transactions, newest first.
    fn search(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
    fn summary(&self, filter: &TransactionFilter) -> Result<TransactionSummary>;
    fn export_csv(&self, filter: &TransactionFilter) -> Result<String>;
}
