// src/dashboard/routes.rs

use axum::{routing::get, Router};

use super::handlers;
use crate::common::route_not_found;

pub fn dashboard_routes() -> Router {
    Router::new().route(
        "/dashboard-stats",
        get(handlers::get_dashboard_stats).fallback(route_not_found),
    )
}
