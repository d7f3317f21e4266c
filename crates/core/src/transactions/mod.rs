//! Transactions module - trade and transfer history with filtering and CSV export.

mod transactions_model;
mod transactions_repository;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use transactions_model::{
    Transaction, TransactionFilter, TransactionKind, TransactionSummary, CSV_HEADERS,
};
pub use transactions_repository::InMemoryTransactionRepository;
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
