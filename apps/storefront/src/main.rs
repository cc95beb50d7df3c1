//! # Storefront Entry Point
//!
//! Loads the catalog once and prints the storefront state as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration (file + environment)
//! 3. Build the store over the HTTP catalog source
//! 4. Load the catalog
//! 5. Print the snapshot (stdout)
//!
//! The actual setup is in lib.rs.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront::run().await
}
