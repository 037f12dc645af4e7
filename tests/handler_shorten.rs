mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use url_shortener::api::routes::public_routes;
use url_shortener::utils::code_generator::generate_code;

fn server_for(state: url_shortener::AppState) -> TestServer {
    let app: Router = public_routes().with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_short_url_success() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let url = "https://www.youtube.com/@drunkleen/";
    let response = server
        .post("/create-short-url")
        .add_header("X-Forwarded-For", "192.168.1.1")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let code = generate_code(url, &common::identity_of("192.168.1.1")).unwrap();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "short url created successfully");
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::LINK_BASE, code)
    );

    assert_eq!(store.live_count().await, 1);
}

#[tokio::test]
async fn test_create_is_idempotent_per_client() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let mut links = Vec::new();
    for _ in 0..2 {
        let response = server
            .post("/create-short-url")
            .add_header("X-Real-IP", "10.0.0.1")
            .json(&json!({ "url": "https://example.com/page" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        links.push(response.json::<serde_json::Value>()["short_url"].clone());
    }

    assert_eq!(links[0], links[1]);
    assert_eq!(store.live_count().await, 1);
}

#[tokio::test]
async fn test_different_clients_get_different_links() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let first = server
        .post("/create-short-url")
        .add_header("X-Forwarded-For", "203.0.113.1")
        .json(&json!({ "url": "https://example.com/page" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/create-short-url")
        .add_header("X-Forwarded-For", "203.0.113.2")
        .json(&json!({ "url": "https://example.com/page" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short_url"], second["short_url"]);
    assert_eq!(store.live_count().await, 2);
}

#[tokio::test]
async fn test_create_uses_peer_address_without_proxy_headers() {
    let store = common::memory_store(common::DAY);
    let app: Router = public_routes()
        .layer(common::MockConnectInfoLayer)
        .with_state(common::create_test_state(store));
    let server = TestServer::new(app).unwrap();

    let url = "https://example.com/peer";
    let response = server
        .post("/create-short-url")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let code = generate_code(url, &common::identity_of("127.0.0.1")).unwrap();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::LINK_BASE, code)
    );
}

#[tokio::test]
async fn test_create_missing_url_field() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let response = server
        .post("/create-short-url")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(store.live_count().await, 0);
}

#[tokio::test]
async fn test_create_empty_url() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let response = server
        .post("/create-short-url")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(store.live_count().await, 0);
}

#[tokio::test]
async fn test_create_malformed_url() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let response = server
        .post("/create-short-url")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(store.live_count().await, 0);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let response = server
        .post("/create-short-url")
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(store.live_count().await, 0);
}

#[tokio::test]
async fn test_create_without_json_content_type() {
    let store = common::memory_store(common::DAY);
    let server = server_for(common::create_test_state(store.clone()));

    let response = server
        .post("/create-short-url")
        .text(r#"{"url": "https://example.com"}"#)
        .await;

    response.assert_status_bad_request();
    assert_eq!(store.live_count().await, 0);
}

#[tokio::test]
async fn test_create_store_failure() {
    let server = server_for(common::create_test_state(Arc::new(common::DownStore)));

    let response = server
        .post("/create-short-url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
