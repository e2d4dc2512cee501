//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use tower::ServiceExt;

use imagehub_api::{build_app, build_state};
use imagehub_core::config::AppConfig;
use imagehub_plugin::PluginCatalog;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with in-memory drivers.
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application from a TOML configuration document.
    pub async fn from_toml(source: &str) -> Self {
        let config = AppConfig::from_toml(source).expect("Failed to parse test config");
        Self::with_config(config).await
    }

    /// Create a test application with the given configuration.
    pub async fn with_config(config: AppConfig) -> Self {
        let state = build_state(config.clone(), &PluginCatalog::builtin())
            .await
            .expect("Failed to build application state");

        Self {
            router: build_app(state),
            config,
        }
    }

    /// Send a request with a raw body.
    pub async fn request(&self, method: &str, path: &str, body: Vec<u8>) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            bytes: bytes.to_vec(),
        }
    }

    /// Upload `body` as image `hash` of `owner`.
    pub async fn put_image(&self, owner: &str, hash: &str, body: Vec<u8>) -> TestResponse {
        self.request("PUT", &format!("/users/{owner}/images/{hash}"), body)
            .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// Body parsed as JSON (`Null` if it is not JSON).
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }

    /// A header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A `width` x `height` PNG: left half red, right half blue.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });

    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buf
}
