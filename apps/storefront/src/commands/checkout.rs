//! # Checkout Commands
//!
//! The checkout view: an itemized summary and the payment button.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  CHECKOUT                                                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Phone X                    x2                   $400.00        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Subtotal                                        $400.00        │
//! │  Discount (10%)                                  -$40.00        │
//! │  ───────────────────────────────────────────────────────        │
//! │  TOTAL                                           $360.00        │
//! │                                                                 │
//! │  ( ) Bank Transfer   ( ) Easypaisa   ( ) JazzCash               │
//! │  [ Proceed to Payment ]                                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment is a stub: no provider is contacted and the cart is kept.

use serde::Serialize;
use storefront_core::cart::DISCOUNT_RATE;
use storefront_core::{CartTotals, Money, PaymentMethod};
use tracing::{debug, info};
use ts_rs::TS;

use super::cart::CartItemDto;
use crate::error::ApiError;
use crate::state::Store;

/// Shown after a payment goes through.
pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment Successful!";

/// A selectable payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDto {
    pub id: PaymentMethod,
    pub label: String,
}

/// Everything the checkout view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items: Vec<CartItemDto>,
    pub totals: CartTotals,
    /// e.g. "Discount (10%)".
    pub discount_label: String,
    /// Display form of `totals.total`.
    pub total_display: String,
    pub payment_methods: Vec<PaymentMethodDto>,
}

/// Result of the payment stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub method: PaymentMethod,
    pub amount: Money,
    pub message: String,
}

/// Builds the checkout view from the current cart.
pub fn checkout_summary<S>(store: &Store<S>) -> CheckoutSummary {
    debug!("checkout_summary command");

    let cart = store.cart();
    let totals = cart.totals();

    CheckoutSummary {
        items: cart.lines().iter().map(CartItemDto::from).collect(),
        totals,
        discount_label: format!("Discount ({})", DISCOUNT_RATE),
        total_display: totals.total.to_string(),
        payment_methods: PaymentMethod::ALL
            .iter()
            .map(|m| PaymentMethodDto {
                id: *m,
                label: m.label().to_string(),
            })
            .collect(),
    }
}

/// Confirms payment for the cart total.
///
/// ## Behavior
/// Always succeeds for a non-empty cart. Nothing is charged and the cart
/// is left as it is.
///
/// ## Errors
/// `CART_ERROR` if the cart is empty.
pub fn proceed_to_payment<S>(
    store: &Store<S>,
    method: PaymentMethod,
) -> Result<PaymentOutcome, ApiError> {
    debug!(?method, "proceed_to_payment command");

    let cart = store.cart();
    if cart.is_empty() {
        return Err(ApiError::cart("Cart is empty"));
    }

    let amount = cart.total();
    info!(method = method.label(), %amount, "Payment confirmed");

    Ok(PaymentOutcome {
        method,
        amount,
        message: PAYMENT_SUCCESS_MESSAGE.to_string(),
    })
}
