//! # Store State
//!
//! The single owner of catalog, filter criteria and cart.
//!
//! ## Ownership
//! The store is a plain value handed to whoever drives the screen. Reads
//! borrow it, mutations take `&mut self`; there is no global and no lock.
//!
//! ## Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Load Status                                  │
//! │                                                                         │
//! │  ┌────────────┐  load_catalog()  ┌──────────┐   fetch ok   ┌─────────┐  │
//! │  │ NotStarted │ ───────────────► │ Loading  │ ───────────► │  Ready  │  │
//! │  └────────────┘                  └──────────┘              └─────────┘  │
//! │                                       │                                 │
//! │                                       │ fetch / decode / validation     │
//! │                                       ▼ error                           │
//! │                                  ┌──────────┐                           │
//! │                                  │  Failed  │  catalog stays empty      │
//! │                                  └──────────┘                           │
//! │                                                                         │
//! │  Only Ready exposes products. No retry is attempted.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Change Notifications
//! ```text
//! set_filter / add_to_cart / remove_from_cart / load_catalog
//!        │
//!        ▼
//! revision += 1 ──► watch::Sender<StoreChange> ──► subscribers re-query
//! ```
//! A `watch` channel keeps only the latest change, which is all a
//! re-querying reader needs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_catalog::{CatalogError, CatalogResult, CatalogSource};
use storefront_core::{
    default_categories, Cart, CartLine, CartTotals, Catalog, CategoryOption, CoreError,
    CoreResult, FilterCriteria, Money, Product, ProductId,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ts_rs::TS;

// =============================================================================
// Load Status
// =============================================================================

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadStatus {
    /// `load_catalog` has not been called yet.
    #[default]
    NotStarted,

    /// A fetch is in flight.
    Loading,

    /// The catalog is usable.
    #[serde(rename_all = "camelCase")]
    Ready {
        count: usize,
        #[ts(as = "String")]
        loaded_at: DateTime<Utc>,
    },

    /// The last load failed; `reason` is the underlying cause.
    Failed { reason: String },
}

impl LoadStatus {
    /// Returns true once the catalog may be browsed.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready { .. })
    }

    /// Returns true once a load finished either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadStatus::Ready { .. } | LoadStatus::Failed { .. })
    }
}

// =============================================================================
// Change Notifications
// =============================================================================

/// What the last mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Value present before any mutation.
    Initial,
    CatalogLoading,
    CatalogLoaded,
    CatalogFailed,
    FilterChanged,
    CartChanged,
}

/// Published on every store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    /// Increases by exactly one per mutation.
    pub revision: u64,
    pub kind: ChangeKind,
}

// =============================================================================
// Store
// =============================================================================

/// Catalog, filter and cart for one session.
///
/// ## Usage
/// ```rust
/// use storefront::state::Store;
/// use storefront_catalog::StaticCatalogSource;
///
/// # async fn demo() {
/// let mut store = Store::new(StaticCatalogSource::new(Vec::new()));
/// store.load_catalog().await.unwrap();
/// assert!(store.status().is_ready());
/// assert!(store.cart_total().is_zero());
/// # }
/// ```
pub struct Store<S> {
    source: S,
    status: LoadStatus,
    catalog: Catalog,
    filter: FilterCriteria,
    cart: Cart,
    revision: u64,
    changes: watch::Sender<StoreChange>,
}

impl<S: CatalogSource> Store<S> {
    /// Fetches the catalog once and replaces the product set.
    ///
    /// ## Behavior
    /// - Status goes `Loading`, then `Ready` or `Failed`
    /// - On failure the product set is empty; nothing partial is kept
    /// - No retry; call again to try again
    ///
    /// ## Returns
    /// The loaded products, in catalog order.
    pub async fn load_catalog(&mut self) -> CatalogResult<&[Product]> {
        info!(source = %self.source.describe(), "Loading catalog");

        self.begin_load();
        let fetched = self.source.fetch_products().await;
        self.finish_load(fetched)
    }

    /// Drops the current catalog and marks the load in flight.
    fn begin_load(&mut self) {
        self.catalog = Catalog::empty();
        self.status = LoadStatus::Loading;
        self.publish(ChangeKind::CatalogLoading);
    }

    /// Settles the load with what the source returned.
    fn finish_load(&mut self, fetched: CatalogResult<Vec<Product>>) -> CatalogResult<&[Product]> {
        let loaded =
            fetched.and_then(|products| Catalog::new(products).map_err(CatalogError::from));

        match loaded {
            Ok(catalog) => {
                let count = catalog.len();
                self.catalog = catalog;
                self.status = LoadStatus::Ready {
                    count,
                    loaded_at: Utc::now(),
                };
                self.publish(ChangeKind::CatalogLoaded);

                info!(count, "Catalog ready");
                Ok(self.catalog.products())
            }
            Err(err) => {
                warn!(error = %err, "Catalog load failed");

                self.status = LoadStatus::Failed {
                    reason: err.to_string(),
                };
                self.publish(ChangeKind::CatalogFailed);

                Err(err)
            }
        }
    }

    /// The source this store loads from.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> Store<S> {
    /// Creates a store with an empty cart and no catalog yet.
    pub fn new(source: S) -> Self {
        let (changes, _) = watch::channel(StoreChange {
            revision: 0,
            kind: ChangeKind::Initial,
        });

        Store {
            source,
            status: LoadStatus::NotStarted,
            catalog: Catalog::empty(),
            filter: FilterCriteria::default(),
            cart: Cart::new(),
            revision: 0,
            changes,
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The loaded catalog; empty unless the status is `Ready`.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the active filter. Any category id or text is accepted.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        debug!(
            category = %criteria.category.id(),
            search = %criteria.search_text,
            "Filter changed"
        );
        self.filter = criteria;
        self.publish(ChangeKind::FilterChanged);
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Products passing the active filter, in catalog order.
    ///
    /// Empty while the catalog is not `Ready`.
    pub fn visible_products(&self) -> Vec<&Product> {
        if !self.status.is_ready() {
            return Vec::new();
        }
        self.catalog.visible(&self.filter)
    }

    /// Looks up a product for the detail view.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        if !self.status.is_ready() {
            return None;
        }
        self.catalog.get(id)
    }

    /// The category menu: the fixed entries, then any catalog category
    /// the fixed menu does not list.
    pub fn categories(&self) -> Vec<CategoryOption> {
        let mut menu = default_categories();

        for option in self.catalog.categories() {
            if !menu.iter().any(|m| m.id == option.id) {
                menu.push(option);
            }
        }

        menu
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of `product`.
    ///
    /// ## Returns
    /// The line's quantity after the add.
    pub fn add_to_cart(&mut self, product: &Product) -> u32 {
        let quantity = self.cart.add(product);
        debug!(product_id = %product.id, quantity, "Added to cart");

        self.publish(ChangeKind::CartChanged);
        quantity
    }

    /// Adds one unit of the catalog product with this id.
    ///
    /// ## Errors
    /// `ProductNotFound` if the id is not in the loaded catalog.
    pub fn add_to_cart_by_id(&mut self, id: ProductId) -> CoreResult<u32> {
        let product = self
            .product(id)
            .cloned()
            .ok_or(CoreError::ProductNotFound(id))?;

        Ok(self.add_to_cart(&product))
    }

    /// Deletes the whole line for `product_id`.
    ///
    /// ## Returns
    /// The removed line; `None` (and no notification) if it was not in the cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Option<CartLine> {
        let removed = self.cart.remove(product_id);

        match &removed {
            Some(line) => {
                debug!(%product_id, quantity = line.quantity(), "Removed from cart");
                self.publish(ChangeKind::CartChanged);
            }
            None => debug!(%product_id, "Remove ignored, product not in cart"),
        }

        removed
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn cart_discount(&self) -> Money {
        self.cart.discount()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Subscribes to store changes.
    ///
    /// The receiver starts at the current revision; `changed().await`
    /// resolves on the next mutation.
    pub fn subscribe(&self) -> watch::Receiver<StoreChange> {
        self.changes.subscribe()
    }

    /// Number of mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn publish(&mut self, kind: ChangeKind) {
        self.revision += 1;
        // send_replace stores the value even with no receivers
        self.changes.send_replace(StoreChange {
            revision: self.revision,
            kind,
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use storefront_catalog::StaticCatalogSource;
    use storefront_core::CategoryFilter;
    use tokio::sync::oneshot;

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::UnexpectedStatus {
                status: 503,
                url: "http://catalog.test/products".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }

    /// Holds the fetch open until the test releases it.
    struct GatedSource {
        gate: Mutex<Option<oneshot::Receiver<()>>>,
        products: Vec<Product>,
    }

    impl GatedSource {
        fn new(gate: oneshot::Receiver<()>, products: Vec<Product>) -> Self {
            GatedSource {
                gate: Mutex::new(Some(gate)),
                products,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(self.products.clone())
        }

        fn describe(&self) -> String {
            "gated source".to_string()
        }
    }

    fn product(id: u64, title: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::from_cents(cents),
            image: format!("https://example.com/{}.png", id),
            category: category.to_string(),
            description: None,
        }
    }

    fn scenario_products() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", 2000, "clothes"),
            product(2, "Phone X", 20000, "mobiles"),
        ]
    }

    async fn loaded_store() -> Store<StaticCatalogSource> {
        let mut store = Store::new(StaticCatalogSource::new(scenario_products()));
        store.load_catalog().await.unwrap();
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new(StaticCatalogSource::default());

        assert_eq!(store.status(), &LoadStatus::NotStarted);
        assert!(store.visible_products().is_empty());
        assert!(store.cart().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[tokio::test]
    async fn test_load_catalog_success() {
        let mut store = Store::new(StaticCatalogSource::new(scenario_products()));

        let loaded = store.load_catalog().await.unwrap();
        assert_eq!(loaded.len(), 2);

        match store.status() {
            LoadStatus::Ready { count, .. } => assert_eq!(*count, 2),
            other => panic!("unexpected status: {:?}", other),
        }
        assert_eq!(store.visible_products().len(), 2);
    }

    #[tokio::test]
    async fn test_load_catalog_failure_exposes_error_and_no_products() {
        let mut store = Store::new(FailingSource);

        let err = store.load_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }));

        match store.status() {
            LoadStatus::Failed { reason } => assert!(reason.contains("503")),
            other => panic!("unexpected status: {:?}", other),
        }
        assert!(store.catalog().is_empty());
        assert!(store.visible_products().is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_rejects_duplicate_ids_whole() {
        let mut store = Store::new(StaticCatalogSource::new(vec![
            product(1, "Red Shirt", 2000, "clothes"),
            product(1, "Phone X", 20000, "mobiles"),
        ]));

        let err = store.load_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(_)));
        assert!(store.catalog().is_empty());
        assert!(!store.status().is_ready());
        assert!(store.status().is_settled());
    }

    #[tokio::test]
    async fn test_scenario_filter_and_cart() {
        let mut store = loaded_store().await;

        store.set_filter(FilterCriteria::new(CategoryFilter::from_id("clothes"), ""));
        let visible: Vec<&str> = store
            .visible_products()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Red Shirt"]);

        let phone = store.product(ProductId::new(2)).cloned().unwrap();
        store.add_to_cart(&phone);
        store.add_to_cart(&phone);

        assert_eq!(store.cart().line_count(), 1);
        assert_eq!(store.cart().lines()[0].quantity(), 2);
        assert_eq!(store.cart_subtotal().cents(), 40000);
        assert_eq!(store.cart_discount().cents(), 4000);
        assert_eq!(store.cart_total().cents(), 36000);
    }

    #[tokio::test]
    async fn test_filter_does_not_touch_cart() {
        let mut store = loaded_store().await;
        store.add_to_cart_by_id(ProductId::new(1)).unwrap();

        store.set_filter(FilterCriteria::new(CategoryFilter::from_id("mobiles"), "zzz"));

        assert!(store.visible_products().is_empty());
        assert_eq!(store.cart().line_count(), 1);
    }

    #[tokio::test]
    async fn test_add_to_cart_by_unknown_id() {
        let mut store = loaded_store().await;

        let err = store.add_to_cart_by_id(ProductId::new(99)).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_by_id_before_load() {
        let mut store = Store::new(StaticCatalogSource::new(scenario_products()));

        assert!(store.add_to_cart_by_id(ProductId::new(1)).is_err());
    }

    #[tokio::test]
    async fn test_remove_twice_is_safe() {
        let mut store = loaded_store().await;
        store.add_to_cart_by_id(ProductId::new(1)).unwrap();
        store.add_to_cart_by_id(ProductId::new(2)).unwrap();

        assert!(store.remove_from_cart(ProductId::new(1)).is_some());
        let revision = store.revision();
        let cart = store.cart().clone();

        assert!(store.remove_from_cart(ProductId::new(1)).is_none());
        assert_eq!(store.cart(), &cart);
        assert_eq!(store.revision(), revision);
    }

    #[tokio::test]
    async fn test_empty_cart_totals() {
        let store = loaded_store().await;
        let totals = store.cart_totals();

        assert!(totals.subtotal.is_zero());
        assert!(totals.discount.is_zero());
        assert!(totals.total.is_zero());
    }

    #[tokio::test]
    async fn test_subscribers_see_each_revision() {
        let mut store = Store::new(StaticCatalogSource::new(scenario_products()));
        let mut rx = store.subscribe();
        assert_eq!(rx.borrow_and_update().kind, ChangeKind::Initial);

        store.load_catalog().await.unwrap();
        assert!(rx.has_changed().unwrap());
        let change = *rx.borrow_and_update();
        assert_eq!(change.kind, ChangeKind::CatalogLoaded);
        assert_eq!(change.revision, 2); // Loading, then Loaded

        store.set_filter(FilterCriteria::default());
        assert_eq!(rx.borrow_and_update().kind, ChangeKind::FilterChanged);

        store.add_to_cart_by_id(ProductId::new(2)).unwrap();
        let change = *rx.borrow_and_update();
        assert_eq!(change.kind, ChangeKind::CartChanged);
        assert_eq!(change.revision, 4);
        assert_eq!(store.revision(), 4);
    }

    #[tokio::test]
    async fn test_subscriber_sees_loading_before_fetch_completes() {
        let (release, gate) = oneshot::channel();
        let mut store = Store::new(GatedSource::new(gate, scenario_products()));
        let mut rx = store.subscribe();

        let observer = async move {
            rx.changed().await.unwrap();
            let during = *rx.borrow_and_update();

            // the fetch is parked on the gate until here
            release.send(()).unwrap();

            rx.changed().await.unwrap();
            let after = *rx.borrow_and_update();
            (during, after)
        };

        let (loaded, (during, after)) = tokio::join!(store.load_catalog(), observer);
        assert_eq!(loaded.unwrap().len(), 2);

        assert_eq!(during.kind, ChangeKind::CatalogLoading);
        assert_eq!(during.revision, 1);
        assert_eq!(after.kind, ChangeKind::CatalogLoaded);
        assert_eq!(after.revision, 2);
        assert!(store.status().is_ready());
    }

    #[tokio::test]
    async fn test_nothing_visible_while_loading() {
        let mut store = loaded_store().await;
        store.add_to_cart_by_id(ProductId::new(1)).unwrap();

        store.begin_load();
        assert_eq!(store.status(), &LoadStatus::Loading);
        assert!(!store.status().is_settled());
        assert!(store.visible_products().is_empty());
        assert!(store.product(ProductId::new(1)).is_none());
        assert_eq!(store.categories(), default_categories());
        assert_eq!(store.cart().line_count(), 1);

        store.finish_load(Ok(scenario_products())).unwrap();
        assert!(store.status().is_ready());
        assert_eq!(store.visible_products().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_notifies() {
        let mut store = Store::new(FailingSource);
        let mut rx = store.subscribe();

        let _ = store.load_catalog().await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().kind, ChangeKind::CatalogFailed);
    }

    #[tokio::test]
    async fn test_categories_extend_fixed_menu() {
        let mut store = Store::new(StaticCatalogSource::new(vec![
            product(1, "Ring", 1000, "jewelery"),
            product(2, "Laptop", 90000, "electronics"),
        ]));
        store.load_catalog().await.unwrap();

        let ids: Vec<String> = store.categories().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["all", "electronics", "clothes", "mobiles", "jewelery"]);
    }

    #[test]
    fn test_load_status_serialization() {
        let json = serde_json::to_value(LoadStatus::Failed {
            reason: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["reason"], "boom");

        let json = serde_json::to_value(LoadStatus::NotStarted).unwrap();
        assert_eq!(json["state"], "notStarted");
    }
}
