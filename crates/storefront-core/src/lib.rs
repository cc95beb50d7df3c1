//! # storefront-core: Pure Storefront Logic
//!
//! Catalog filtering and cart math as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer                           │   │
//! │  │    Search box ──► Category menu ──► Product list ──► Checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (apps/storefront)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Store (apps/storefront)                      │   │
//! │  │    load_catalog, set_filter, add_to_cart, remove_from_cart      │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │                             │                        │
//! │  ┌───────────────▼─────────────────┐ ┌─────────▼───────────────────┐   │
//! │  │  ★ storefront-core (HERE) ★     │ │  storefront-catalog         │   │
//! │  │  Money • Catalog • Cart         │ │  HTTP fetch of products     │   │
//! │  │  NO I/O • PURE FUNCTIONS        │ │                             │   │
//! │  └─────────────────────────────────┘ └─────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, FilterCriteria, PaymentMethod, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Validated product set and filtered views
//! - [`cart`] - Cart lines, subtotal, discount, total
//! - [`error`] - Domain error types
//! - [`validation`] - Product record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Money, Product, ProductId};
//!
//! let phone = Product {
//!     id: ProductId::new(2),
//!     title: "Phone X".to_string(),
//!     price: Money::from_cents(20000),
//!     image: "https://example.com/phone.png".to_string(),
//!     category: "mobiles".to_string(),
//!     description: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&phone);
//! cart.add(&phone);
//!
//! // $400.00 is over the $100.00 threshold: 10% off
//! assert_eq!(cart.subtotal().cents(), 40000);
//! assert_eq!(cart.discount().cents(), 4000);
//! assert_eq!(cart.total().cents(), 36000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, MAX_PRICE};
pub use types::*;
