use httpmock::prelude::*;
use storefront_catalog::{CatalogError, CatalogSource, HttpCatalogSource};
use storefront_core::ProductId;

fn two_products() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "title": "Red Shirt", "price": 20, "image": "https://example.com/1.png", "category": "clothes"},
        {"id": 2, "title": "Phone X", "price": 200.0, "image": "https://example.com/2.png", "category": "mobiles",
         "rating": {"rate": 4.1, "count": 259}}
    ])
}

#[tokio::test]
async fn test_fetch_products_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(two_products());
    });

    let source = HttpCatalogSource::new(&server.url("/products")).unwrap();
    let products = source.fetch_products().await.unwrap();

    api_mock.assert();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[0].title, "Red Shirt");
    assert_eq!(products[0].price.cents(), 2000);
    assert_eq!(products[1].price.cents(), 20000);
    assert_eq!(products[1].category, "mobiles");
}

#[tokio::test]
async fn test_fetch_products_is_a_single_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(500);
    });

    let source = HttpCatalogSource::new(&server.url("/products")).unwrap();
    let result = source.fetch_products().await;

    // Failures are not retried
    api_mock.assert_hits(1);
    match result {
        Err(CatalogError::UnexpectedStatus { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/products"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_products_not_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).body("<html>maintenance</html>");
    });

    let source = HttpCatalogSource::new(&server.url("/products")).unwrap();
    let result = source.fetch_products().await;

    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_products_invalid_record() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(serde_json::json!([
            {"id": 1, "title": "Red Shirt", "price": 20, "image": "", "category": "clothes"},
            {"id": 2, "title": "Broken", "price": -1, "image": "", "category": "clothes"}
        ]));
    });

    let source = HttpCatalogSource::new(&server.url("/products")).unwrap();
    let result = source.fetch_products().await;

    assert!(matches!(
        result,
        Err(CatalogError::InvalidRecord { index: 1, .. })
    ));
}

#[tokio::test]
async fn test_fetch_products_connection_refused() {
    // Bind and release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/products", port);

    let source = HttpCatalogSource::new(&url).unwrap();
    let result = source.fetch_products().await;

    assert!(matches!(result, Err(CatalogError::Request(_))));
}

#[test]
fn test_new_rejects_bad_endpoint() {
    let result = HttpCatalogSource::new("file:///etc/products.json");
    assert!(matches!(result, Err(CatalogError::InvalidEndpoint { .. })));
}
