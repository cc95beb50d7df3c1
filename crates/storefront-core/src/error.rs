//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Catalog record validation failures             │
//! │                                                                         │
//! │  storefront-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Fetch / decode failures                        │
//! │                                                                         │
//! │  storefront app errors                                                 │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → ApiError → Presentation        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations have no error path: adding and removing are total.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Failures of catalog lookups.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id in the loaded catalog.
    ///
    /// ## When This Occurs
    /// - The presentation layer holds an id from a previous catalog load
    /// - The catalog has not finished loading yet
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product record validation errors.
///
/// Raised while building a catalog so a bad record never reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Empty text where a value is needed.
    #[error("{field} must not be blank")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Text that does not parse (e.g. a price like "1e3"), or a price out of range.
    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two products share an id.
    #[error("duplicate {field} '{value}'")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
