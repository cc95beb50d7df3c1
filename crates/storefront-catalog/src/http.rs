//! # HTTP Catalog Source
//!
//! Fetches the product list with a single `GET`.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    fetch_products()                                     │
//! │                                                                         │
//! │  GET https://fakestoreapi.com/products   (Accept: application/json)     │
//! │       │                                                                 │
//! │       ├── connection / TLS error ──────────► CatalogError::Request      │
//! │       │                                                                 │
//! │       ├── status not 2xx ──────────────────► UnexpectedStatus           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  body text ──► record::decode_products                                  │
//! │       │                                                                 │
//! │       ├── not an array of records ─────────► Decode                     │
//! │       ├── bad field in record #n ──────────► InvalidRecord { n }        │
//! │       ▼                                                                 │
//! │  Vec<Product>                                                           │
//! │                                                                         │
//! │  No timeout, no retry, no pagination.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use storefront_core::Product;
use tracing::{debug, info};
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::record::decode_products;
use crate::source::CatalogSource;

/// Where the product list lives unless configured otherwise.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Catalog source backed by a remote JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    /// Creates a source for `endpoint` with a default client.
    ///
    /// ## Errors
    /// - `InvalidEndpoint` if the URL does not parse or is not http(s)
    /// - `Request` if the HTTP client cannot be built
    pub fn new(endpoint: &str) -> CatalogResult<Self> {
        let endpoint = parse_endpoint(endpoint)?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a source reusing an existing client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        HttpCatalogSource { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        debug!(endpoint = %self.endpoint, "Requesting catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Catalog response received");

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let products = decode_products(&body)?;

        info!(count = products.len(), bytes = body.len(), "Catalog decoded");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Parses and checks a catalog endpoint URL.
///
/// ## Example
/// ```rust
/// use storefront_catalog::http::parse_endpoint;
///
/// assert!(parse_endpoint("https://fakestoreapi.com/products").is_ok());
/// assert!(parse_endpoint("ftp://example.com/products").is_err());
/// assert!(parse_endpoint("not a url").is_err());
/// ```
pub fn parse_endpoint(endpoint: &str) -> CatalogResult<Url> {
    let url = Url::parse(endpoint).map_err(|e| CatalogError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: format!("scheme must be http or https, got '{}'", other),
        }),
    }
}
