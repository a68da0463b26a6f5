//! Error Types
//!
//! Failures of the catalog client and the config loader.

use thiserror::Error;

/// Result of a catalog read
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why a catalog read did not produce data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Request could not be sent or the status was not 2xx
    #[error("network failure: {0}")]
    Network(String),

    /// Body could not be parsed as JSON at all
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// Body was JSON but lacked the expected `data` shape
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Detail response carried no payload
    #[error("not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, CatalogError::Malformed(_))
    }
}

/// Invalid injected configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storefront config: {0}")]
    Js(String),
}
