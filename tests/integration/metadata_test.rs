//! Integration tests for metadata operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

async fn app_with_image() -> helpers::TestApp {
    let app = helpers::TestApp::new().await;
    app.put_image("abc", "f00d", helpers::png(2, 2)).await;
    app
}

#[tokio::test]
async fn test_edit_merges_metadata() {
    let app = app_with_image().await;

    let response = app
        .request(
            "POST",
            "/users/abc/images/f00d/meta",
            br#"{"title":"Cat","tags":["pet"]}"#.to_vec(),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"imageIdentifier": "f00d"}));

    app.request("PUT", "/users/abc/images/f00d/meta", br#"{"title":"Dog"}"#.to_vec())
        .await;

    let response = app.request("GET", "/users/abc/images/f00d/meta", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"title": "Dog", "tags": ["pet"]}));
}

#[tokio::test]
async fn test_edit_rejects_non_objects() {
    let app = app_with_image().await;

    let response = app
        .request("POST", "/users/abc/images/f00d/meta", b"[1, 2]".to_vec())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("POST", "/users/abc/images/f00d/meta", b"{not json".to_vec())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_metadata_keeps_image() {
    let app = app_with_image().await;
    app.request("POST", "/users/abc/images/f00d/meta", br#"{"a":1}"#.to_vec())
        .await;

    let response = app.request("DELETE", "/users/abc/images/f00d/meta", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/users/abc/images/f00d/meta", vec![]).await;
    assert_eq!(response.json(), json!({}));

    let response = app.request("GET", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_metadata_of_missing_image_is_not_found() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/users/abc/images/nope/meta", vec![]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "NOT_FOUND");
}
