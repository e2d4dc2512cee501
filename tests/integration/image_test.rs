//! Integration tests for image operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_add_and_fetch_image() {
    let app = helpers::TestApp::new().await;
    let original = helpers::png(8, 4);

    let response = app.put_image("abc", "f00d", original.clone()).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json(), json!({"imageIdentifier": "f00d"}));

    let response = app.request("GET", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, original);
    assert_eq!(response.header("content-type"), Some("image/png"));
    assert_eq!(response.header("x-imagehub-image-width"), Some("8"));
    assert_eq!(response.header("x-imagehub-image-height"), Some("4"));
    assert_eq!(response.header("x-hashtwo"), Some("abc|f00d"));
    assert!(response.header("x-imagehub-transformations").is_none());
}

#[tokio::test]
async fn test_fetch_with_transformations() {
    let app = helpers::TestApp::new().await;
    app.put_image("abc", "f00d", helpers::png(8, 4)).await;

    let response = app
        .request(
            "GET",
            "/users/abc/images/f00d?t%5B%5D=rotate:angle=90&t%5B%5D=thumbnail:width=2,height=2,fit=inset",
            vec![],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-imagehub-image-width"), Some("1"));
    assert_eq!(response.header("x-imagehub-image-height"), Some("2"));
    assert_eq!(
        response.header("x-imagehub-transformations"),
        Some("rotate:angle=90,bg=000000;thumbnail:width=2,height=2,fit=inset")
    );

    let decoded = image::load_from_memory(&response.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1, 2));
}

#[tokio::test]
async fn test_invalid_transformation_is_bad_request() {
    let app = helpers::TestApp::new().await;
    app.put_image("abc", "f00d", helpers::png(4, 4)).await;

    let response = app
        .request("GET", "/users/abc/images/f00d?t%5B%5D=sepia", vec![])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "PLUGIN");
    assert_eq!(response.json()["details"]["cause"]["error"], "VALIDATION");
}

#[tokio::test]
async fn test_oversized_transformation_is_bad_request() {
    let app = helpers::TestApp::new().await;
    app.put_image("abc", "f00d", helpers::png(2, 2)).await;

    let response = app
        .request(
            "GET",
            "/users/abc/images/f00d?t%5B%5D=resize:width=4294967295,height=4294967295",
            vec![],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["details"]["cause"]["error"], "VALIDATION");

    let response = app.request("GET", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_head_returns_headers_only() {
    let app = helpers::TestApp::new().await;
    app.put_image("abc", "f00d", helpers::png(4, 2)).await;

    let response = app.request("HEAD", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-imagehub-image-width"), Some("4"));
    assert_eq!(response.header("x-hashtwo"), Some("abc|f00d"));
    assert!(response.bytes.is_empty());
}

#[tokio::test]
async fn test_add_rejects_bad_uploads() {
    let app = helpers::TestApp::new().await;

    let response = app.put_image("abc", "f00d", b"hello".to_vec()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.put_image("abc", "f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    app.put_image("abc", "f00d", helpers::png(2, 2)).await;
    let response = app.put_image("abc", "f00d", helpers::png(2, 2)).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.json()["error"], "CONFLICT");
}

#[tokio::test]
async fn test_delete_image() {
    let app = helpers::TestApp::new().await;
    app.put_image("abc", "f00d", helpers::png(2, 2)).await;

    let response = app.request("DELETE", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"imageIdentifier": "f00d"}));

    let response = app.request("GET", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cache_tag_header_is_configurable() {
    let app = helpers::TestApp::from_toml(
        r#"
        [cache_tag]
        header = "X-Cache-Tags"
        "#,
    )
    .await;
    app.put_image("abc", "f00d", helpers::png(2, 2)).await;

    let response = app.request("GET", "/users/abc/images/f00d", vec![]).await;
    assert_eq!(response.header("x-cache-tags"), Some("abc|f00d"));
    assert!(response.header("x-hashtwo").is_none());
}

#[tokio::test]
async fn test_filesystem_drivers_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().display();
    let app = helpers::TestApp::from_toml(&format!(
        r#"
        [database]
        driver = "json"
        params = {{ data_dir = "{root}/db" }}

        [storage]
        driver = "filesystem"
        params = {{ data_dir = "{root}/images" }}
        "#
    ))
    .await;

    let original = helpers::png(3, 3);
    assert_eq!(
        app.put_image("abc", "cafe", original.clone()).await.status,
        StatusCode::CREATED
    );

    let response = app.request("GET", "/users/abc/images/cafe", vec![]).await;
    assert_eq!(response.bytes, original);
}
