//! # Catalog Error Types
//!
//! Everything that can go wrong while loading the catalog.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Load Failures                               │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Content             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │ InvalidEndpoint │  │  Request        │  │  Decode                 │ │
//! │  │                 │  │  UnexpectedStat.│  │  InvalidRecord          │ │
//! │  │                 │  │                 │  │  InvalidCatalog         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every variant is terminal for the load attempt. Nothing retries.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::ValidationError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A failed catalog load.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured endpoint is not a usable http(s) URL.
    #[error("Invalid catalog endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Connection, TLS or body read failure.
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered, but not with 2xx.
    #[error("Catalog endpoint {url} answered with status {status}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body is not a JSON array of product records.
    #[error("Catalog response is not a product list: {0}")]
    Decode(#[from] serde_json::Error),

    /// One record decoded but failed a field rule.
    #[error("Product record #{index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        source: ValidationError,
    },

    /// The records are fine one by one but not as a set (duplicate ids).
    #[error("Catalog rejected: {0}")]
    InvalidCatalog(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::UnexpectedStatus {
            status: 503,
            url: "https://fakestoreapi.com/products".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog endpoint https://fakestoreapi.com/products answered with status 503"
        );

        let err = CatalogError::InvalidRecord {
            index: 3,
            source: ValidationError::Negative {
                field: "price".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Product record #3 is invalid: price cannot be negative"
        );
    }

    #[test]
    fn test_validation_converts_to_invalid_catalog() {
        let err: CatalogError = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "1".to_string(),
        }
        .into();
        assert!(matches!(err, CatalogError::InvalidCatalog(_)));
    }
}
