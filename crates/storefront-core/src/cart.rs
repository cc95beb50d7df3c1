//! # Cart
//!
//! The shopping cart and its totals.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Method                  Cart Change           │
//! │  ───────────              ──────                  ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add(&product) ───────► qty += 1              │
//! │                                                   or lines.push(qty 1)  │
//! │                                                                         │
//! │  "Remove" ───────────────► remove(id) ──────────► line deleted          │
//! │                                                   (no-op if absent)     │
//! │                                                                         │
//! │  Checkout view ──────────► totals() ────────────► (read only)           │
//! │                                                                         │
//! │  There is no decrement: a line leaves the cart whole.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Rule
//! ```text
//! subtotal ≤ $100.00  →  discount = $0.00
//! subtotal > $100.00  →  discount = subtotal × 10%
//! total = subtotal − discount
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountRate, Product, ProductId};

/// Subtotal above which the discount applies (strictly greater).
pub const DISCOUNT_THRESHOLD: Money = Money::from_major_minor(100, 0);

/// Discount applied once the subtotal passes [`DISCOUNT_THRESHOLD`].
pub const DISCOUNT_RATE: DiscountRate = DiscountRate::from_bps(1000);

/// A line in the cart: one product and how many of it.
///
/// The product is stored whole so the cart can render without the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product increases quantity)
/// - Quantity is ≥ 1; removal deletes the whole line
/// - Lines stay in the order each product was first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended as a new line with quantity 1
    ///
    /// ## Returns
    /// The line's quantity after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine::new(product.clone()));
        1
    }

    /// Removes the line for a product id.
    ///
    /// ## Returns
    /// The removed line, or `None` if the product was not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product.id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Lines in the order first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a product id.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Returns the number of distinct products (the cart badge count).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Zero up to and including $100.00, 10% of the subtotal above it.
    pub fn discount(&self) -> Money {
        discount_for(self.subtotal())
    }

    /// Subtotal minus discount.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal - discount_for(subtotal)
    }

    /// All totals at once, computing the subtotal a single time.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let discount = discount_for(subtotal);

        CartTotals {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }
}

/// Applies the fixed discount rule to a subtotal.
///
/// ## Example
/// ```rust
/// use storefront_core::cart::discount_for;
/// use storefront_core::Money;
///
/// assert!(discount_for(Money::from_cents(10000)).is_zero());        // $100.00
/// assert_eq!(discount_for(Money::from_cents(15000)).cents(), 1500); // $150.00
/// ```
pub fn discount_for(subtotal: Money) -> Money {
    if subtotal > DISCOUNT_THRESHOLD {
        subtotal.calculate_discount(DISCOUNT_RATE)
    } else {
        Money::zero()
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}
