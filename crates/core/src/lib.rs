//! Cryptofolio Core - Domain entities, services, and traits.
//!
//! This crate contains the portfolio logic for Cryptofolio: joining market
//! listings with holdings, price alerts, wallets, transaction history and the
//! refresh cycle that ties them together. Market listings come from
//! `cryptofolio-market-data`; storage is in-memory behind repository traits.

pub mod alerts;
pub mod errors;
pub mod markets;
pub mod portfolio;
pub mod refresh;
pub mod session;
pub mod transactions;
pub mod wallets;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
