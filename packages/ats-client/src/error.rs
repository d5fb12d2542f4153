//! Error types for the ATS client.

use thiserror::Error;

/// Result type for ATS client operations.
pub type Result<T> = std::result::Result<T, AtsError>;

/// ATS client errors.
#[derive(Debug, Error)]
pub enum AtsError {
    /// Non-2xx response from a provider's job board API.
    #[error("{provider} API error: {status}")]
    Api { provider: &'static str, status: u16 },

    /// Transport failure (connection refused, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the provider's documented shape.
    #[error("{provider} returned an unexpected payload: {message}")]
    Payload {
        provider: &'static str,
        message: String,
    },

    /// The configured ATS identifier is not valid for this provider.
    #[error("Invalid ATS identifier: {0}")]
    InvalidIdentifier(String),

    /// Provider tag not in the supported set.
    #[error("Unknown ATS provider: {0}")]
    UnknownProvider(String),
}
