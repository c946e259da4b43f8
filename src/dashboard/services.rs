use super::models::{CandidateTotals, DashboardStats, ExperienceCount, LocationCount};
use crate::candidates::models::FRESHER_SPECIALIZATION;
use crate::common::ApiError;
use sqlx::SqlitePool;
use tracing::{debug, error};

pub struct DashboardService {
    db: SqlitePool,
}

impl DashboardService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Aggregate counts over every candidate
    ///
    /// All reads run inside one transaction so the totals and the grouped
    /// breakdowns describe the same snapshot.
    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        let mut tx = self.db.begin().await.map_err(ApiError::DatabaseError)?;

        let totals = sqlx::query_as::<_, CandidateTotals>(
            r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(SUM(CASE WHEN specialization = ? THEN 1 ELSE 0 END), 0) AS freshers,
                COALESCE(SUM(CASE WHEN employee_referral = 1 THEN 1 ELSE 0 END), 0) AS employee_referrals,
                COALESCE(SUM(CASE WHEN consultancy_referral = 1 THEN 1 ELSE 0 END), 0) AS consultancy_referrals
            FROM candidates
            "#,
        )
        .bind(FRESHER_SPECIALIZATION)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching candidate totals for dashboard stats");
            ApiError::DatabaseError(e)
        })?;

        let candidates_by_location = sqlx::query_as::<_, LocationCount>(
            r#"
            SELECT location, COUNT(*) AS count
            FROM candidates
            GROUP BY location
            ORDER BY count DESC, location ASC
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching location breakdown for dashboard stats");
            ApiError::DatabaseError(e)
        })?;

        let candidates_by_experience = sqlx::query_as::<_, ExperienceCount>(
            r#"
            SELECT years_experience, COUNT(*) AS count
            FROM candidates
            GROUP BY years_experience
            ORDER BY count DESC, years_experience ASC
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching experience breakdown for dashboard stats");
            ApiError::DatabaseError(e)
        })?;

        tx.commit().await.map_err(ApiError::DatabaseError)?;

        debug!(
            total = totals.total,
            freshers = totals.freshers,
            "Dashboard stats computed"
        );

        Ok(DashboardStats {
            total_candidates: totals.total,
            freshers: totals.freshers,
            experienced: totals.total - totals.freshers,
            employee_referrals: totals.employee_referrals,
            consultancy_referrals: totals.consultancy_referrals,
            candidates_by_location,
            candidates_by_experience,
        })
    }
}
