//! # Wire Records
//!
//! The JSON shape the catalog endpoint serves, and its conversion into
//! [`storefront_core::Product`].
//!
//! ## Wire Format
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
//!     "price": 109.95,
//!     "description": "Your perfect pack for everyday use...",
//!     "category": "men's clothing",
//!     "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
//!     "rating": { "rate": 3.9, "count": 120 }
//!   }
//! ]
//! ```
//!
//! Unknown fields such as `rating` are ignored.

use serde::Deserialize;
use storefront_core::validation::validate_product;
use storefront_core::{Money, Product, ProductId, ValidationError};

use crate::error::{CatalogError, CatalogResult};

/// One product as the endpoint sends it.
///
/// `price` stays a raw JSON number so it can be parsed from its text.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: serde_json::Number,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Money::parse_decimal(&record.price.to_string())?;

        let product = Product {
            id: ProductId::new(record.id),
            title: record.title,
            price,
            image: record.image,
            category: record.category,
            description: record.description.filter(|d| !d.trim().is_empty()),
        };

        validate_product(&product)?;
        Ok(product)
    }
}

/// Decodes a response body into products, in the order served.
///
/// ## Errors
/// - `Decode` if the body is not an array of records
/// - `InvalidRecord` for the first record failing a field rule
pub fn decode_products(body: &str) -> CatalogResult<Vec<Product>> {
    let records: Vec<ProductRecord> = serde_json::from_str(body)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Product::try_from(record).map_err(|source| CatalogError::InvalidRecord { index, source })
        })
        .collect()
}
