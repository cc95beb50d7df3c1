//! # Validation Module
//!
//! Checks applied to product records before they join a catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Wire decoding (storefront-catalog)                           │
//! │  ├── JSON shape: array of objects with the expected fields             │
//! │  └── Price text → Money::parse_decimal                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Record rules (THIS MODULE)                                   │
//! │  └── Price between zero and MAX_PRICE                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog rules (Catalog::new)                                 │
//! │  └── Unique product ids                                                │
//! │                                                                         │
//! │  Any failure rejects the whole load: no partial catalog.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Titles and categories are taken as served, blank ones included. A blank
//! title simply never matches non-empty search text.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_price;
//! use storefront_core::Money;
//!
//! validate_price(Money::from_cents(2000)).unwrap();
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::{Money, MAX_PRICE};
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed [`MAX_PRICE`]
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price;
/// use storefront_core::Money;
///
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("{} is above the maximum of {}", price, MAX_PRICE),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field rule for one product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_price(product.price)
}

/// Validates that no two products share an id.
///
/// ## Returns
/// `Duplicate` naming the first repeated id, in catalog order.
pub fn validate_unique_ids(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
