//! Integration tests for health and plugin introspection.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/health", vec![]).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["driver"], "memory");
    assert_eq!(body["storage"]["healthy"], true);
}

#[tokio::test]
async fn test_plugins_listing() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/plugins", vec![]).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["total"], 4);

    let registrations = body["registrations"].as_array().unwrap();
    let get_post: Vec<&str> = registrations
        .iter()
        .filter(|r| r["phase_key"] == "getImagePostExec")
        .map(|r| r["plugin"].as_str().unwrap())
        .collect();
    assert_eq!(get_post, ["manipulate-image", "cache-tag"]);
    assert!(registrations.iter().all(|r| r["path"] == "builtin"));
}

#[tokio::test]
async fn test_unknown_plugin_path_is_skipped() {
    let app = helpers::TestApp::from_toml(
        r#"
        [[plugins]]
        path = "does-not-exist"
        "#,
    )
    .await;
    let response = app.request("GET", "/plugins", vec![]).await;
    assert_eq!(response.json()["total"], 4);
}
