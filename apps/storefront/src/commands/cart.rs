//! # Cart Commands
//!
//! Cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  checkout_summary ┌─────────┐ │
//! │  │  Empty   │─────────────►│ In Cart  │──────────────────►│Checkout │ │
//! │  │  Cart    │               │          │                   │  View   │ │
//! │  └──────────┘◄──────────────└──────────┘                   └─────────┘ │
//! │              remove_from_cart   │  ▲                                    │
//! │              (last line)        │  │ add_to_cart (same id: qty + 1)    │
//! │                                 └──┘                                    │
//! │                                                                         │
//! │  There is no decrement: removing deletes the whole line.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{Cart, CartLine, CartTotals, ProductId};
use tracing::debug;
use ts_rs::TS;

use super::catalog::{ensure_ready, ProductDto};
use crate::error::ApiError;
use crate::state::Store;

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub product: ProductDto,
    pub quantity: u32,
    pub line_total_cents: i64,
}

impl From<&CartLine> for CartItemDto {
    fn from(line: &CartLine) -> Self {
        CartItemDto {
            product: ProductDto::from(line.product()),
            quantity: line.quantity(),
            line_total_cents: line.line_total().cents(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemDto>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.lines().iter().map(CartItemDto::from).collect(),
            totals: cart.totals(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Lines in the order first added, plus subtotal, discount and total.
pub fn get_cart<S>(store: &Store<S>) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(store.cart())
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by 1
/// - Not in cart: appended with quantity 1
/// - The product is copied into the line as it is in the catalog now
///
/// ## Errors
/// - `CATALOG_LOADING` / `CATALOG_UNAVAILABLE` if the catalog is not ready
/// - `NOT_FOUND` if the id is not in the catalog
pub fn add_to_cart<S>(store: &mut Store<S>, product_id: u64) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    ensure_ready(store.status())?;
    store.add_to_cart_by_id(ProductId::new(product_id))?;

    Ok(CartResponse::from(store.cart()))
}

/// Removes a product's whole line from the cart.
///
/// Unknown ids are ignored; the cart comes back unchanged.
pub fn remove_from_cart<S>(store: &mut Store<S>, product_id: u64) -> CartResponse {
    debug!(product_id, "remove_from_cart command");

    store.remove_from_cart(ProductId::new(product_id));
    CartResponse::from(store.cart())
}
