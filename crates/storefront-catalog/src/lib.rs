//! # storefront-catalog: Catalog Source Layer
//!
//! Loads the product list the store browses.
//!
//! ## Modules
//!
//! - [`source`] - The `CatalogSource` trait and an in-memory source
//! - [`http`] - `HttpCatalogSource`, the remote JSON endpoint
//! - [`record`] - Wire format and conversion into `Product`
//! - [`error`] - `CatalogError`
//!
//! ## Example
//! ```rust,no_run
//! use storefront_catalog::{CatalogSource, HttpCatalogSource, DEFAULT_CATALOG_URL};
//!
//! # async fn run() -> storefront_catalog::CatalogResult<()> {
//! let source = HttpCatalogSource::new(DEFAULT_CATALOG_URL)?;
//! let products = source.fetch_products().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod record;
pub mod source;

pub use error::{CatalogError, CatalogResult};
pub use http::{HttpCatalogSource, DEFAULT_CATALOG_URL};
pub use source::{CatalogSource, StaticCatalogSource};
