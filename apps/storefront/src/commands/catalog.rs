//! # Catalog Commands
//!
//! Browsing: the product list, the filter, the detail view and the
//! category menu.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Flow                                    │
//! │                                                                         │
//! │  User types "shirt" and picks "clothes"                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_filter(store, "clothes", "shirt")                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Catalog ready?                           │                         │
//! │  │  NO:  CATALOG_LOADING / _UNAVAILABLE      │                         │
//! │  │  YES: category match AND title contains   │                         │
//! │  │       search text (case-insensitive)      │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> in catalog order                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::CatalogSource;
use storefront_core::{
    CategoryFilter, CategoryOption, FilterCriteria, Product, ProductId,
};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{LoadStatus, Store};

/// Product as the presentation layer sees it.
///
/// `price` is the formatted amount ("$10.99"); `priceCents` is the exact
/// value for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub title: String,
    pub price_cents: i64,
    pub price: String,
    pub image: String,
    pub category: String,
    pub description: Option<String>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.get(),
            title: p.title.clone(),
            price_cents: p.price.cents(),
            price: p.price.to_string(),
            image: p.image.clone(),
            category: p.category.clone(),
            description: p.description.clone(),
        }
    }
}

/// Fails unless the catalog is `Ready`.
///
/// `NotStarted` and `Loading` map to `CATALOG_LOADING`; `Failed` to
/// `CATALOG_UNAVAILABLE` carrying the load error.
pub fn ensure_ready(status: &LoadStatus) -> Result<(), ApiError> {
    match status {
        LoadStatus::Ready { .. } => Ok(()),
        LoadStatus::NotStarted | LoadStatus::Loading => Err(ApiError::catalog_loading()),
        LoadStatus::Failed { reason } => Err(ApiError::catalog_unavailable(reason.clone())),
    }
}

/// Fetches the catalog and returns the visible products.
///
/// ## Errors
/// `CATALOG_UNAVAILABLE` with the load error as message. The store keeps
/// the `Failed` status; calling again makes a fresh attempt.
pub async fn load_catalog<S: CatalogSource>(
    store: &mut Store<S>,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!("load_catalog command");

    store.load_catalog().await?;
    list_products(store)
}

/// Lists the products passing the active filter.
pub fn list_products<S>(store: &Store<S>) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_products command");

    ensure_ready(store.status())?;
    Ok(store
        .visible_products()
        .into_iter()
        .map(ProductDto::from)
        .collect())
}

/// Replaces the filter with a category menu id and search text.
///
/// Accepts any input; `"all"` in any casing clears the category.
///
/// ## Returns
/// The filter now in effect.
pub fn set_filter<S>(store: &mut Store<S>, category: &str, search_text: &str) -> FilterCriteria {
    debug!(category = %category, search_text = %search_text, "set_filter command");

    let criteria = FilterCriteria::new(CategoryFilter::from_id(category), search_text);
    store.set_filter(criteria.clone());
    criteria
}

/// Gets one product for the detail view.
pub fn get_product<S>(store: &Store<S>, product_id: u64) -> Result<ProductDto, ApiError> {
    debug!(product_id, "get_product command");

    ensure_ready(store.status())?;
    store
        .product(ProductId::new(product_id))
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

/// Lists the category menu.
pub fn list_categories<S>(store: &Store<S>) -> Vec<CategoryOption> {
    debug!("list_categories command");
    store.categories()
}

/// Where the catalog load stands.
pub fn load_status<S>(store: &Store<S>) -> LoadStatus {
    store.status().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_catalog::StaticCatalogSource;
    use storefront_core::Money;

    fn product(id: u64, title: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::from_cents(cents),
            image: String::new(),
            category: category.to_string(),
            description: Some("Soft cotton".to_string()),
        }
    }

    fn store() -> Store<StaticCatalogSource> {
        Store::new(StaticCatalogSource::new(vec![
            product(1, "Red Shirt", 2000, "clothes"),
            product(2, "Phone X", 20000, "mobiles"),
            product(3, "Blue Shirt", 1999, "clothes"),
        ]))
    }

    #[test]
    fn test_list_products_before_load() {
        let store = store();
        let err = list_products(&store).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogLoading);
    }

    #[test]
    fn test_ensure_ready_failed() {
        let err = ensure_ready(&LoadStatus::Failed {
            reason: "connection refused".to_string(),
        })
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
        assert_eq!(err.message, "connection refused");
    }

    #[tokio::test]
    async fn test_load_then_filter() {
        let mut store = store();
        assert_eq!(load_catalog(&mut store).await.unwrap().len(), 3);

        let applied = set_filter(&mut store, "clothes", "RED");
        assert_eq!(applied.category, CategoryFilter::Only("clothes".to_string()));

        let titles: Vec<String> = list_products(&store)
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Red Shirt"]);

        set_filter(&mut store, "ALL", "shirt");
        assert_eq!(list_products(&store).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_product() {
        let mut store = store();
        load_catalog(&mut store).await.unwrap();

        let dto = get_product(&store, 3).unwrap();
        assert_eq!(dto.price_cents, 1999);
        assert_eq!(dto.price, "$19.99");
        assert_eq!(dto.description.as_deref(), Some("Soft cotton"));

        let err = get_product(&store, 42).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_product_dto_serialization() {
        let dto = ProductDto::from(&product(1, "Red Shirt", 2000, "clothes"));
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["priceCents"], 2000);
        assert_eq!(json["price"], "$20.00");
        assert_eq!(json["category"], "clothes");
    }

    #[test]
    fn test_load_status_command() {
        let store = store();
        assert_eq!(load_status(&store), LoadStatus::NotStarted);
        assert_eq!(list_categories(&store).len(), 4);
    }
}
