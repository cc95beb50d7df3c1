//! # Storefront Library
//!
//! State manager and command layer for a small online shop: load a product
//! catalog over HTTP, browse and filter it, keep a cart, and check out.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (logging, startup, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Store: catalog, filter, cart, change feed
//! │   └── config.rs   ◄─── StorefrontConfig (file + environment)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product list / filter / detail / categories
//! │   ├── cart.rs     ◄─── Cart add / remove / view
//! │   ├── checkout.rs ◄─── Checkout summary and payment stub
//! │   ├── about.rs    ◄─── Store details
//! │   └── snapshot.rs ◄─── Whole-screen state
//! └── error.rs        ◄─── ApiError for commands, ConfigError for startup
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use storefront::commands::{cart, catalog};
//! use storefront::state::Store;
//! use storefront_catalog::HttpCatalogSource;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let source = HttpCatalogSource::new("https://fakestoreapi.com/products")?;
//! let mut store = Store::new(source);
//!
//! catalog::load_catalog(&mut store).await?;
//! catalog::set_filter(&mut store, "electronics", "");
//! let first = catalog::list_products(&store)?[0].id;
//! let cart = cart::add_to_cart(&mut store, first)?;
//! println!("total: {}", cart.totals.total);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;

use anyhow::Context;
use std::path::PathBuf;
use storefront_catalog::HttpCatalogSource;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{Store, StorefrontConfig};

/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "STOREFRONT_CONFIG";

/// Runs one storefront session and prints its state as JSON.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: info,storefront=debug; RUST_LOG overrides                │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • storefront.toml (platform config dir or STOREFRONT_CONFIG)        │
/// │     • STOREFRONT_* environment overrides                                │
/// │                                                                         │
/// │  3. Build Store ──────────────────────────────────────────────────────► │
/// │     • HttpCatalogSource for the configured endpoint                     │
/// │     • Empty cart, "all" filter                                          │
/// │                                                                         │
/// │  4. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • One GET; failure is reported in the snapshot, not fatal           │
/// │                                                                         │
/// │  5. Print Snapshot ───────────────────────────────────────────────────► │
/// │     • StorefrontSnapshot as pretty JSON on stdout                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting storefront");

    let config_path = std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from);
    let config = StorefrontConfig::load(config_path).context("Failed to load configuration")?;

    let mut store = build_store(&config)?;

    if let Err(err) = commands::catalog::load_catalog(&mut store).await {
        warn!(code = ?err.code, "Continuing without a catalog: {}", err.message);
    }

    let snapshot = commands::snapshot::storefront_snapshot(&store);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

/// Creates a store reading from the configured catalog endpoint.
pub fn build_store(config: &StorefrontConfig) -> anyhow::Result<Store<HttpCatalogSource>> {
    let source = HttpCatalogSource::new(config.catalog_endpoint())
        .with_context(|| format!("Invalid catalog endpoint: {}", config.catalog_endpoint()))?;

    info!(endpoint = %source.endpoint(), store = %config.store.name, "Store initialized");
    Ok(Store::new(source))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for the app only
/// - Default: `info,storefront=debug`
///
/// Logs go to stderr so stdout carries only the JSON snapshot.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
