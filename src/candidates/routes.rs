// src/candidates/routes.rs

use crate::candidates::handlers::{self, files};
use crate::common::route_not_found;
use axum::{routing::get, Router};

pub fn candidates_routes() -> Router {
    Router::new()
        // File serving routes
        .route(
            "/uploads/:filename",
            get(files::serve_upload).fallback(route_not_found),
        )
        // Candidate routes
        .route(
            "/candidates",
            get(handlers::list_candidates)
                .post(handlers::create_candidate)
                .fallback(route_not_found),
        )
        .route(
            "/candidates/:id",
            get(handlers::get_candidate)
                .put(handlers::update_candidate)
                .delete(handlers::delete_candidate)
                .fallback(route_not_found),
        )
}
