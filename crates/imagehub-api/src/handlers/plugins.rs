//! Plugin registration listing.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /plugins
pub async fn list_plugins(State(state): State<AppState>) -> Json<Value> {
    let registrations = state.factory.registry().registrations();
    Json(json!({
        "total": registrations.len(),
        "registrations": registrations,
    }))
}
