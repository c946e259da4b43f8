// src/dashboard/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Dashboard models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    // Core metrics
    pub total_candidates: i64,
    pub freshers: i64,
    pub experienced: i64,
    pub employee_referrals: i64,
    pub consultancy_referrals: i64,

    // Breakdowns for charts
    pub candidates_by_location: Vec<LocationCount>,
    pub candidates_by_experience: Vec<ExperienceCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LocationCount {
    pub location: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExperienceCount {
    pub years_experience: String,
    pub count: i64,
}

/// Single-row tallies over the candidate table
#[derive(Debug, FromRow)]
pub(crate) struct CandidateTotals {
    pub total: i64,
    pub freshers: i64,
    pub employee_referrals: i64,
    pub consultancy_referrals: i64,
}
