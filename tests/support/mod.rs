//! In-process todo API for integration tests.
//!
//! Mimics a Mongo-backed backend: items carry `_id` and `__v`, and unknown
//! ids answer 404.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct Body {
    title: String,
    description: String,
}

#[derive(Clone, Default)]
pub struct TodoServer {
    items: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    garbled: Arc<AtomicBool>,
}

impl TodoServer {
    /// Starts the server on an ephemeral port, seeded with `(title, description)` pairs.
    pub async fn start(seed: &[(&str, &str)]) -> (Self, String) {
        let server = Self::default();
        for (title, description) in seed {
            server.insert(title, description);
        }

        let app = Router::new()
            .route("/todos", get(list).post(create))
            .route("/todos/{id}", put(update).delete(remove))
            .with_state(server.clone());

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (server, format!("http://{}", addr))
    }

    /// Every handler answers 500 while set.
    pub fn set_failing(&self, on: bool) {
        self.failing.store(on, Ordering::SeqCst);
    }

    /// `GET /todos` answers 200 with a non-JSON body while set.
    pub fn set_garbled(&self, on: bool) {
        self.garbled.store(on, Ordering::SeqCst);
    }

    pub fn titles(&self) -> Vec<String> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn id_of(&self, title: &str) -> String {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item["title"] == title)
            .map(|item| item["_id"].as_str().unwrap().to_string())
            .unwrap()
    }

    fn insert(&self, title: &str, description: &str) -> Value {
        let id = format!("64b7f{:05}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let item = json!({
            "_id": id,
            "title": title,
            "description": description,
            "__v": 0,
        });
        self.items.lock().unwrap().push(item.clone());
        item
    }

    fn is_failing(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }
}

async fn list(State(server): State<TodoServer>) -> Result<String, StatusCode> {
    if server.is_failing() {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if server.garbled.load(Ordering::SeqCst) {
        return Ok("<html>oops</html>".to_string());
    }
    let items = server.items.lock().unwrap();
    Ok(Value::Array(items.clone()).to_string())
}

async fn create(
    State(server): State<TodoServer>,
    Json(body): Json<Body>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if server.is_failing() {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let item = server.insert(&body.title, &body.description);
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update(
    State(server): State<TodoServer>,
    Path(id): Path<String>,
    Json(body): Json<Body>,
) -> StatusCode {
    if server.is_failing() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let mut items = server.items.lock().unwrap();
    match items.iter_mut().find(|item| item["_id"] == id.as_str()) {
        Some(item) => {
            item["title"] = json!(body.title);
            item["description"] = json!(body.description);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn remove(State(server): State<TodoServer>, Path(id): Path<String>) -> StatusCode {
    if server.is_failing() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let mut items = server.items.lock().unwrap();
    let before = items.len();
    items.retain(|item| item["_id"] != id.as_str());
    if items.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}
