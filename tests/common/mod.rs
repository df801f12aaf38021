//! In-process stand-in for the random-data API.
//!
//! Serves deterministic records on `127.0.0.1:0` and records every request.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

#[derive(Clone, Default)]
pub struct MockState {
    requests: Arc<Mutex<Vec<(String, u32)>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    malformed: Arc<Mutex<HashSet<String>>>,
}

pub struct MockSource {
    pub base_url: String,
    state: MockState,
    handle: JoinHandle<()>,
}

impl MockSource {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/api/v2/:category", get(category_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v2/", addr),
            state,
            handle,
        }
    }

    /// Makes a category answer with 500 from now on.
    pub fn fail(&self, category: &str) {
        self.state.failing.lock().unwrap().insert(category.to_string());
    }

    /// Makes a category answer 200 with a body that is not JSON.
    pub fn break_payload(&self, category: &str) {
        self.state.malformed.lock().unwrap().insert(category.to_string());
    }

    /// Number of requests received for a category.
    pub fn hits(&self, category: &str) -> usize {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == category)
            .count()
    }

    /// `size` parameters received for a category, in order.
    pub fn sizes(&self, category: &str) -> Vec<u32> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == category)
            .map(|(_, size)| *size)
            .collect()
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn category_handler(
    State(state): State<MockState>,
    Path(category): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let size: u32 = params
        .get("size")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    state
        .requests
        .lock()
        .unwrap()
        .push((category.clone(), size));

    if state.failing.lock().unwrap().contains(&category) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
    }
    if state.malformed.lock().unwrap().contains(&category) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let records: Option<Vec<Value>> = (0..size)
        .map(|i| record(&category, i))
        .collect();

    match records {
        Some(records) => Json(Value::Array(records)).into_response(),
        None => (StatusCode::NOT_FOUND, "no such resource").into_response(),
    }
}

/// Record `i` of a category. Only users record 0 contains "jane".
pub fn record(category: &str, i: u32) -> Option<Value> {
    let value = match category {
        "users" if i == 0 => json!({
            "id": i,
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane.doe@example.com",
            "employment": { "title": "Engineer" },
        }),
        "users" => json!({
            "id": i,
            "first_name": "Mark",
            "last_name": format!("Smith{}", i),
            "email": format!("mark{}@example.com", i),
        }),
        "appliances" => json!({
            "id": i,
            "equipment": format!("Toaster {}", i),
            "brand": "Bosch",
        }),
        "beers" => json!({
            "id": i,
            "name": format!("Pale {}", i),
            "style": "Lager",
            "alcohol": "5.1%",
        }),
        "addresses" => json!({
            "id": i,
            "street_address": format!("{} Main St", i),
            "city": "Springfield",
            "state": "Ohio",
        }),
        _ => return None,
    };
    Some(value)
}
