// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::{to_bytes, HttpBody};
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, Level};

/// Bodies larger than this, or of unknown length, are passed through unlogged
const MAX_LOGGED_BODY_BYTES: usize = 64 * 1024;

/// Middleware to log JSON request and response bodies at debug level
///
/// Multipart uploads and file downloads pass through untouched so resume
/// bytes are never buffered twice or written to the log.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !tracing::enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();

    let request = if is_loggable(&parts.headers) && fits_log_limit(&body) {
        let bytes = to_bytes(body, MAX_LOGGED_BODY_BYTES)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        if let Some(body_str) = printable_body(&bytes) {
            debug!(
                method = %parts.method,
                uri = %parts.uri,
                request_body = %body_str,
                "📥 Request"
            );
        }

        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(method = %parts.method, uri = %parts.uri, "📥 Request (body not logged)");
        Request::from_parts(parts, body)
    };

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    if !is_loggable(&parts.headers) || !fits_log_limit(&body) {
        debug!(status = %parts.status, "📤 Response (body not logged)");
        return Ok(Response::from_parts(parts, body));
    }

    let bytes = to_bytes(body, MAX_LOGGED_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body_str) = printable_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %body_str,
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Only JSON and plain text bodies are worth logging
fn is_loggable(headers: &HeaderMap) -> bool {
    match headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(content_type) => {
            content_type.starts_with("application/json") || content_type.starts_with("text/")
        }
        None => true,
    }
}

/// Only buffer bodies whose declared length is within `MAX_LOGGED_BODY_BYTES`
fn fits_log_limit(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY_BYTES as u64)
}

fn printable_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let body_str = std::str::from_utf8(bytes).ok()?;

    // Pretty print JSON when possible
    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(json) => Some(
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| body_str.to_string()),
        ),
        Err(_) => Some(body_str.to_string()),
    }
}
