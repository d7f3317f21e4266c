//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers both whole-request failures (transport, HTTP
//! status, undecodable body) and per-asset integrity failures. The latter are
//! logged and the asset is excluded; they never fail a listing request.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A transport-level failure while talking to the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status code.
    #[error("Provider {provider} returned HTTP {status}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode {provider} response: {message}")]
    Decode {
        /// The provider whose payload was rejected
        provider: String,
        /// Decoder error message
        message: String,
    },

    /// A single asset in an otherwise valid listing is malformed.
    #[error("Data integrity violation for asset '{asset_id}': {message}")]
    DataIntegrity {
        /// Identity of the offending asset (or `<unknown>` when the id itself is missing)
        asset_id: String,
        /// Which field was missing or invalid
        message: String,
    },
}

impl MarketDataError {
    pub(crate) fn data_integrity(asset_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            asset_id: asset_id.into(),
            message: message.into(),
        }
    }

    /// Whether this error belongs to the network failure class: the listing
    /// could not be retrieved at all and the next poll should simply try again.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::HttpStatus { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns a short message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Timeout { .. } => {
                "Failed to fetch market data: provider unreachable".to_string()
            }
            Self::HttpStatus { status, .. } => {
                format!("Failed to fetch market data (HTTP {status})")
            }
            Self::RateLimited { .. } => {
                "Failed to fetch market data: rate limited, retrying on next refresh".to_string()
            }
            Self::Decode { .. } => "Failed to fetch market data: unexpected response".to_string(),
            Self::DataIntegrity { .. } => self.to_string(),
        }
    }
}
