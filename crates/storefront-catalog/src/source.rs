//! # Catalog Sources
//!
//! The seam between the store and wherever products come from.

use async_trait::async_trait;
use storefront_core::Product;

use crate::error::CatalogResult;

/// Something that can produce the product list once.
///
/// ## Contract
/// - One call performs one fetch; implementations never retry
/// - Products come back in the order the source lists them
/// - Set-level checks (unique ids) are left to `storefront_core::Catalog::new`
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches every product.
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// A source serving a fixed, in-memory product list.
///
/// ## Usage
/// ```rust
/// use storefront_catalog::{CatalogSource, StaticCatalogSource};
///
/// let source = StaticCatalogSource::new(Vec::new());
/// assert_eq!(source.describe(), "static catalog (0 products)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        StaticCatalogSource { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static catalog ({} products)", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Money, ProductId};

    #[tokio::test]
    async fn test_static_source_returns_products_in_order() {
        let products: Vec<Product> = (1..=3)
            .map(|id| Product {
                id: ProductId::new(id),
                title: format!("Product {}", id),
                price: Money::from_cents(100 * id as i64),
                image: String::new(),
                category: "electronics".to_string(),
                description: None,
            })
            .collect();

        let source = StaticCatalogSource::new(products.clone());
        let fetched = source.fetch_products().await.unwrap();

        assert_eq!(fetched, products);
        assert_eq!(source.describe(), "static catalog (3 products)");
    }
}
