// Shared fixtures for module tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

use super::config::AppConfig;
use super::migrations::run_migrations;
use super::state::AppState;
use crate::candidates::models::CandidateInput;
use crate::services::ResumeStorage;

pub const TEST_BOUNDARY: &str = "candidate-test-boundary";

/// In-memory database with the schema applied
///
/// A single connection keeps every query on the same in-memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool, false).await.unwrap();
    pool
}

pub fn test_config(uploads_dir: PathBuf) -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        uploads_dir,
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        max_upload_bytes: 1024 * 1024,
        reset_db: false,
    }
}

/// Application state backed by an in-memory database and a temp upload dir
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let storage = ResumeStorage::new(dir.path());
    let state = AppState::new(memory_pool().await, storage, test_config(dir.path().into()));
    (state, dir)
}

pub fn fresher_input(name: &str) -> CandidateInput {
    CandidateInput {
        name: name.to_string(),
        specialization: "Fresher".to_string(),
        location: "X".to_string(),
        years_experience: "0".to_string(),
        ..CandidateInput::default()
    }
}

pub fn experienced_input(name: &str, location: &str, years: &str) -> CandidateInput {
    CandidateInput {
        name: name.to_string(),
        specialization: "Backend".to_string(),
        location: location.to_string(),
        years_experience: years.to_string(),
        ..CandidateInput::default()
    }
}

/// Build a multipart/form-data body from text fields and an optional file
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, data)) = file {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"resume\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", TEST_BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through the router and return status plus raw body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, request).await;
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
