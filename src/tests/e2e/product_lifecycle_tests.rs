use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::products::adapters::outbound::catalog_store_in_memory::InMemoryCatalogStore;
use crate::shell::http::router;
use crate::tests::fixtures::app_state::make_test_state_with_store;
use crate::tests::fixtures::product_payload::ProductPayloadBuilder;

struct Client {
    app: Router,
    store: Arc<InMemoryCatalogStore>,
}

impl Client {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();
        let response: Response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

#[fixture]
fn client() -> Client {
    let (state, store) = make_test_state_with_store();
    Client {
        app: router(state),
        store,
    }
}

#[rstest]
#[tokio::test]
async fn widget_lifecycle_from_create_to_delete(client: Client) {
    let original = ProductPayloadBuilder::new().to_json();

    let (status, created) = client.send("POST", "/products", Some(original.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let duplicate = ProductPayloadBuilder::new()
        .name("Red Widget")
        .price(19.99)
        .to_json();
    let (status, conflict) = client.send("POST", "/products", Some(duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(conflict["detail"].as_str().unwrap().contains("WIDGET-001"));

    let (status, fetched) = client.send("GET", "/products/WIDGET-001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let replacement = ProductPayloadBuilder::new()
        .name("Blue Widget Pro")
        .price(34.5)
        .description("Now with extra blue")
        .to_json();
    let (status, updated) = client
        .send("PUT", "/products/WIDGET-001", Some(replacement))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({
            "id": 1,
            "sku": "WIDGET-001",
            "name": "Blue Widget Pro",
            "price": 34.5,
            "description": "Now with extra blue",
        })
    );

    let (status, body) = client.send("DELETE", "/products/WIDGET-001", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, missing) = client.send("GET", "/products/WIDGET-001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(missing["detail"].as_str().unwrap().contains("not found"));
}

#[rstest]
#[tokio::test]
async fn ids_keep_increasing_until_the_catalog_is_reset(client: Client) {
    for (sku, expected_id) in [("A", 1), ("B", 2), ("C", 3)] {
        let body = ProductPayloadBuilder::new().sku(sku).to_json();
        let (_, created) = client.send("POST", "/products", Some(body)).await;
        assert_eq!(created["id"], expected_id);
    }

    client.store.reset().await;

    let (status, _) = client.send("GET", "/products/A", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = ProductPayloadBuilder::new().sku("D").to_json();
    let (_, created) = client.send("POST", "/products", Some(body)).await;
    assert_eq!(created["id"], 1);
}

#[rstest]
#[tokio::test]
async fn a_failed_update_leaves_the_catalog_untouched(client: Client) {
    let body = ProductPayloadBuilder::new().sku("GHOST").to_json();
    let (status, _) = client.send("PUT", "/products/GHOST", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = client.send("GET", "/products/GHOST", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = client.send("DELETE", "/products/GHOST", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
