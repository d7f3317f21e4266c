use log::debug;
use std::sync::Arc;

use super::transactions_model::{Transaction, TransactionFilter, TransactionSummary, CSV_HEADERS};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::{Error, Result};

const CSV_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Service for browsing and exporting transaction history
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn csv_record(transaction: &Transaction) -> [String; 8] {
        [
            transaction.date.format(CSV_DATE_FORMAT).to_string(),
            transaction.kind.as_str().to_string(),
            transaction.asset.clone(),
            transaction.amount.normalize().to_string(),
            transaction.price.normalize().to_string(),
            transaction.value().normalize().to_string(),
            transaction.fee.normalize().to_string(),
            transaction.wallet.clone(),
        ]
    }
}

impl TransactionServiceTrait for TransactionService {
    fn search(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .repository
            .load_transactions()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    fn summary(&self, filter: &TransactionFilter) -> Result<TransactionSummary> {
        let transactions = self.search(filter)?;
        Ok(TransactionSummary::from_transactions(&transactions))
    }

    fn export_csv(&self, filter: &TransactionFilter) -> Result<String> {
        let transactions = self.search(filter)?;
        debug!("Exporting {} transactions to CSV", transactions.len());

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;
        for transaction in &transactions {
            writer.write_record(Self::csv_record(transaction))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
    }
}
