//! # Money Module
//!
//! Prices and totals as exact integer cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog API sends prices as JSON numbers:                          │
//! │    "price": 109.95                                                      │
//! │                                                                         │
//! │  As f64, 109.95 × 3 = 329.84999999999997  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Parse the TEXT "109.95" → 10995 cents                                │
//! │    10995 × 3 = 32985 cents = $329.85                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! // Create from cents
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Or from the decimal text the catalog API sends
//! let parsed = Money::parse_decimal("10.99").unwrap();
//! assert_eq!(price, parsed);
//!
//! // Arithmetic operations
//! let doubled = price * 2u32;                 // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//! assert_eq!(doubled.cents(), 2198);
//! assert_eq!(total.cents(), 1599);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::DiscountRate;

/// Highest unit price a catalog record may carry: $10,000,000.00.
pub const MAX_PRICE: Money = Money::from_major_minor(10_000_000, 0);

// =============================================================================
// Money Type
// =============================================================================

/// An amount of money in cents.
///
/// Signed so that `subtotal - discount` never leaves the type. Serializes
/// as the bare cent count. Arithmetic saturates at the `i64` bounds, so cart
/// totals never wrap or panic.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "price": 109.95 ──► Money::parse_decimal ──► Product.price             │
/// │                                                   │                     │
/// │                                                   ▼                     │
/// │                            CartLine.line_total = price × quantity       │
/// │                                                   │                     │
/// │                                                   ▼                     │
/// │           Cart.subtotal ──► Cart.discount ──► Cart.total                │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Wraps a cent count.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds a non-negative amount from dollars and cents, for constants.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(100, 0).cents(), 10000);
    /// ```
    #[inline]
    pub const fn from_major_minor(dollars: u32, cents: u8) -> Self {
        Money(dollars as i64 * 100 + cents as i64)
    }

    /// Parses a non-negative decimal amount such as `"109.95"` into cents.
    ///
    /// ## Rules
    /// - Digits with an optional `.` and fractional digits (`"15"`, `"15.0"`, `"7.5"`)
    /// - Two fractional digits are kept; the third rounds half up (`"0.125"` → 13 cents)
    /// - Signs, exponents (`"1e3"`) and empty text are rejected
    /// - Amounts above [`MAX_PRICE`] are rejected
    ///
    /// The catalog API sends prices as JSON numbers. Parsing their textual
    /// form keeps the conversion exact where `price * 100.0` would not be.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("109.95").unwrap().cents(), 10995);
    /// assert_eq!(Money::parse_decimal("22.3").unwrap().cents(), 2230);
    /// assert!(Money::parse_decimal("-5").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Money, ValidationError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        if text.starts_with('-') {
            return Err(ValidationError::Negative {
                field: "price".to_string(),
            });
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("'{}' is not a plain decimal number", text),
            });
        }

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().map_or(0, |d| i64::from(d >= 5));

        whole
            .parse::<i64>()
            .ok()
            .and_then(|major| major.checked_mul(100))
            .and_then(|cents| cents.checked_add(tenths * 10 + hundredths + round_up))
            .map(Money)
            .filter(|price| *price <= MAX_PRICE)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("'{}' is above the maximum of {}", text, MAX_PRICE),
            })
    }

    /// The raw cent count.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The cents after the decimal point, 0 to 99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the discount amount for a rate, rounding half up.
    ///
    /// `(cents * bps + 5000) / 10000`, so a half cent rounds up.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(15000);   // $150.00
    /// let rate = DiscountRate::from_bps(1000);   // 10%
    ///
    /// assert_eq!(subtotal.calculate_discount(rate).cents(), 1500); // $15.00
    /// ```
    pub fn calculate_discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps large subtotals from overflowing before the division
        let discount_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(discount_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// `$10.99`, `-$5.50`. No locale handling.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0.saturating_mul(i64::from(qty)))
    }
}

/// Summing line totals: `lines.map(|l| l.line_total()).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
