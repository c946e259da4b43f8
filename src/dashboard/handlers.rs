// src/dashboard/handlers.rs

use axum::{extract::Extension, Json};
use tracing::info;

use super::models::DashboardStats;
use super::services::DashboardService;
use crate::common::{ApiError, AppState};

/// GET /dashboard-stats - Aggregate counts for the dashboard
pub async fn get_dashboard_stats(
    Extension(state): Extension<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    info!("Fetching dashboard stats");

    let service = DashboardService::new(state.db.clone());
    let stats = service.get_stats().await?;

    Ok(Json(stats))
}
