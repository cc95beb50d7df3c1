//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ FilterCriteria  │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  category       │   │  bps (u32)      │       │
//! │  │  title          │   │  search_text    │   │  1000 = 10%     │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  image          │                                                    │
//! │  │  category       │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │ CategoryFilter  │   │ PaymentMethod   │       │
//! │                        │  ─────────────  │   │  ─────────────  │       │
//! │                        │  All            │   │  BankTransfer   │       │
//! │                        │  Only(id)       │   │  Easypaisa      │       │
//! │                        └─────────────────┘   │  JazzCash       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10%.
/// Integer rates keep discount math in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

}

/// `10%`, or `12.50%` when the rate has a fractional part.
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, fraction) = (self.0 / 100, self.0 % 100);
        if fraction == 0 {
            write!(f, "{}%", whole)
        } else {
            write!(f, "{}.{:02}%", whole, fraction)
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// Identifier of a product, as assigned by the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// A product available for browsing.
///
/// Loaded verbatim from the catalog source and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display title, matched by the search box.
    pub title: String,

    /// Unit price.
    pub price: Money,

    /// Image URI, passed through untouched.
    pub image: String,

    /// Category id (e.g. "electronics"), matched by the category filter.
    pub category: String,

    /// Long description for the detail view, when the source has one.
    pub description: Option<String>,
}

impl Product {
    /// Case-insensitive substring match against the title.
    ///
    /// `needle` must already be lowercased.
    pub fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Which category the product list is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products whose category id equals this value.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a category menu id.
    ///
    /// `"all"` in any casing selects [`CategoryFilter::All`]; everything else
    /// is taken as a category id verbatim.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::types::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_id("All"), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::from_id("clothes"),
    ///     CategoryFilter::Only("clothes".to_string())
    /// );
    /// ```
    pub fn from_id(id: &str) -> Self {
        if id.eq_ignore_ascii_case(ALL_CATEGORIES_ID) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    /// Returns true if a product in `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// The menu id this filter corresponds to.
    pub fn id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_ID,
            CategoryFilter::Only(id) => id,
        }
    }
}

/// Menu id of the "everything" category entry.
pub const ALL_CATEGORIES_ID: &str = "all";

/// The active category + search text pair.
///
/// Transient and user-driven: any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, search_text: impl Into<String>) -> Self {
        FilterCriteria {
            category,
            search_text: search_text.into(),
        }
    }
}

// =============================================================================
// Category Menu
// =============================================================================

/// An entry in the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    /// Value handed back to [`CategoryFilter::from_id`].
    pub id: String,
    /// Label shown to the user.
    pub name: String,
}

impl CategoryOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        CategoryOption {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The fixed category menu shown above the product list.
pub fn default_categories() -> Vec<CategoryOption> {
    vec![
        CategoryOption::new(ALL_CATEGORIES_ID, "All"),
        CategoryOption::new("electronics", "Electronics"),
        CategoryOption::new("clothes", "Clothes"),
        CategoryOption::new("mobiles", "Mobiles"),
    ]
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment options offered on the checkout view.
///
/// Selecting one does not contact any provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Easypaisa,
    JazzCash,
}

impl PaymentMethod {
    /// Every method, in menu order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::BankTransfer,
        PaymentMethod::Easypaisa,
        PaymentMethod::JazzCash,
    ];

    /// Label shown on the checkout view.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Easypaisa => "Easypaisa",
            PaymentMethod::JazzCash => "JazzCash",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
