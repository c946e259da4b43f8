// src/candidates/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::{
    deserialize_flag, deserialize_optional_text, deserialize_trimmed, non_blank,
};

/// Specialization value that marks a candidate without prior experience
pub const FRESHER_SPECIALIZATION: &str = "Fresher";

// ============================================================================
// Candidate Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub years_experience: String,
    pub remark: Option<String>,
    pub resume_url: String,
    pub employee_referral: bool,
    pub employee_id: Option<String>,
    pub consultancy_referral: bool,
    pub consultancy_name: Option<String>,
    pub created_at: String,
}

/// Full field set accepted on create (multipart form) and update (JSON)
///
/// Referral flags accept real booleans as well as the "true"/"false"
/// strings HTML forms submit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CandidateInput {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub specialization: String,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub years_experience: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub remark: Option<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub resume_url: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub employee_referral: bool,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub employee_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub consultancy_referral: bool,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub consultancy_name: Option<String>,
}

impl CandidateInput {
    /// Clear the companion field of every referral flag that is not set
    pub fn normalized(mut self) -> Self {
        if !self.employee_referral {
            self.employee_id = None;
        }
        if !self.consultancy_referral {
            self.consultancy_name = None;
        }
        self.remark = non_blank(self.remark);
        self.employee_id = non_blank(self.employee_id);
        self.consultancy_name = non_blank(self.consultancy_name);
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
