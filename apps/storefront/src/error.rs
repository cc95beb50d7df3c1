//! # API Error Type
//!
//! Error types for the app layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Handling Flow                                  │
//! │                                                                         │
//! │  storefront-core                                                        │
//! │  └── CoreError        (product not found)                              │
//! │           │                                                             │
//! │  storefront-catalog                                                     │
//! │  └── CatalogError     (network, status, decode, bad record)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ApiError { code, message }  ◄── THIS FILE                             │
//! │           │                                                             │
//! │           ▼ (JSON)                                                      │
//! │  Presentation layer shows message, switches on code                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ConfigError` covers startup only and never reaches the presentation layer.

use serde::Serialize;
use storefront_catalog::CatalogError;
use storefront_core::CoreError;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CATALOG_UNAVAILABLE",
///   "message": "Catalog request failed: error sending request"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the loaded catalog
    NotFound,

    /// Catalog load not finished (or not started)
    CatalogLoading,

    /// Catalog load failed; the message carries the cause
    CatalogUnavailable,

    /// Cart operation not possible (e.g. paying for an empty cart)
    CartError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// The catalog is still loading.
    pub fn catalog_loading() -> Self {
        ApiError::new(ErrorCode::CatalogLoading, "Catalog is still loading")
    }

    /// The catalog failed to load.
    pub fn catalog_unavailable(reason: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CatalogUnavailable, reason)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
        }
    }
}

/// Converts catalog load errors to API errors.
///
/// Every load failure is `CATALOG_UNAVAILABLE`; the message keeps the cause.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::catalog_unavailable(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading `storefront.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but cannot be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog endpoint is not an http(s) URL.
    #[error("Invalid configuration: {0}")]
    InvalidEndpoint(#[from] CatalogError),
}
