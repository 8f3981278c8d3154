// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::create_test_server;

#[tokio::test]
async fn test_health_and_version() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");

    let response = server.get("/v1/version").await;
    response.assert_status_ok();
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_classify_connect_url() {
    let server = create_test_server();

    let response = server
        .post("/v1/navigation/classify")
        .json(&json!({ "url": "fbconnect://success?bar=baz#fragment" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "complete_with_results");
    assert_eq!(body["policy"], "cancel");
    assert_eq!(body["results"], json!({ "bar": "baz", "fragment": "" }));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_classify_cancel_url_with_error() {
    let server = create_test_server();

    let response = server
        .post("/v1/navigation/classify")
        .json(&json!({
            "url": "fbconnect://cancel?error_code=999&error_message=anErrorOhNO",
            "navigation_type": "other"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "fail_with_error");
    assert_eq!(body["error"]["domain"], "com.facebook.sdk.core");
    assert_eq!(body["error"]["code"], 999);
    assert_eq!(body["error"]["message"], "anErrorOhNO");
}

#[tokio::test]
async fn test_classify_external_link() {
    let server = create_test_server();

    let response = server
        .post("/v1/navigation/classify")
        .json(&json!({
            "url": "https://www.example.com/terms",
            "navigation_type": "link_activated"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], "open_externally");
    assert_eq!(body["policy"], "cancel");
    assert_eq!(body["url"], "https://www.example.com/terms");
}

#[tokio::test]
async fn test_classify_plain_navigation() {
    let server = create_test_server();

    let response = server
        .post("/v1/navigation/classify")
        .json(&json!({ "url": "https://www.example.com/", "navigation_type": "reload" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "outcome": "allow", "policy": "allow" }));
}

#[tokio::test]
async fn test_classify_invalid_url() {
    let server = create_test_server();

    let response = server
        .post("/v1/navigation/classify")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("invalid url"));
}

#[tokio::test]
async fn test_navigation_failure_disposition() {
    let server = create_test_server();

    let response = server
        .post("/v1/navigation/failure")
        .json(&json!({ "domain": "NSURLErrorDomain", "code": -999, "description": "cancelled" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["disposition"], "suppress");

    let response = server
        .post("/v1/navigation/failure")
        .json(&json!({ "domain": "NSURLErrorDomain", "code": -1001, "description": "timed out" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["disposition"], "forward");
}
