//! # Snapshot Command
//!
//! The whole screen in one DTO: load status, menu, filter, visible
//! products and cart. A subscriber can re-query this on every
//! `StoreChange` instead of calling each command.

use serde::Serialize;
use storefront_core::{CategoryOption, FilterCriteria};
use tracing::debug;
use ts_rs::TS;

use super::cart::CartResponse;
use super::catalog::ProductDto;
use crate::state::{LoadStatus, Store};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSnapshot {
    pub revision: u64,
    pub status: LoadStatus,
    pub categories: Vec<CategoryOption>,
    pub filter: FilterCriteria,
    /// Empty unless `status` is ready.
    pub products: Vec<ProductDto>,
    pub cart: CartResponse,
}

/// Captures the current store state.
pub fn storefront_snapshot<S>(store: &Store<S>) -> StorefrontSnapshot {
    debug!(revision = store.revision(), "storefront_snapshot command");

    StorefrontSnapshot {
        revision: store.revision(),
        status: store.status().clone(),
        categories: store.categories(),
        filter: store.filter().clone(),
        products: store
            .visible_products()
            .into_iter()
            .map(ProductDto::from)
            .collect(),
        cart: CartResponse::from(store.cart()),
    }
}
