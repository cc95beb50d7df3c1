//! # State Module
//!
//! Session state and startup configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────┐      ┌──────────────────────────┐     │
//! │  │        Store<S>             │      │    StorefrontConfig      │     │
//! │  │                             │      │                          │     │
//! │  │  source: S: CatalogSource   │      │  catalog.endpoint        │     │
//! │  │  status: LoadStatus         │      │  store.name              │     │
//! │  │  catalog: Catalog           │      │  store.contact_email     │     │
//! │  │  filter: FilterCriteria     │      │  store.instagram         │     │
//! │  │  cart: Cart                 │      │                          │     │
//! │  │  changes: watch::Sender     │      │                          │     │
//! │  └─────────────────────────────┘      └──────────────────────────┘     │
//! │                                                                         │
//! │  Store: mutated through &mut self, one owner                           │
//! │  StorefrontConfig: read-only after startup                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{CatalogSettings, StoreInfo, StorefrontConfig};
pub use store::{ChangeKind, LoadStatus, Store, StoreChange};
