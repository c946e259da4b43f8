use super::models::{Candidate, CandidateInput};
use super::validators::validate_candidate_input;
use crate::common::{generate_candidate_id, ApiError};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

const CANDIDATE_COLUMNS: &str = r#"
    id, name, specialization, location, years_experience, remark, resume_url,
    employee_referral, employee_id, consultancy_referral, consultancy_name, created_at
"#;

pub struct CandidatesService {
    db: SqlitePool,
}

impl CandidatesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Candidate CRUD Operations
    // ============================================================================

    /// Get all candidates in insertion order
    pub async fn get_all_candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        let candidates = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {} FROM candidates ORDER BY rowid ASC",
            CANDIDATE_COLUMNS
        ))
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing candidates");
            ApiError::DatabaseError(e)
        })?;

        Ok(candidates)
    }

    /// Get candidate by ID
    pub async fn get_candidate_by_id(&self, candidate_id: &str) -> Result<Candidate, ApiError> {
        sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {} FROM candidates WHERE id = ?",
            CANDIDATE_COLUMNS
        ))
        .bind(candidate_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Candidate not found".to_string()))
    }

    /// Create a new candidate
    ///
    /// `resume_url` is taken from the input as-is; the caller stores the
    /// uploaded file first and fills it in.
    pub async fn create_candidate(&self, input: CandidateInput) -> Result<Candidate, ApiError> {
        validate_candidate_input(&input)?;
        let input = input.normalized();

        let candidate_id = generate_candidate_id();
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO candidates (
                id, name, specialization, location, years_experience, remark, resume_url,
                employee_referral, employee_id, consultancy_referral, consultancy_name, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&candidate_id)
        .bind(&input.name)
        .bind(&input.specialization)
        .bind(&input.location)
        .bind(&input.years_experience)
        .bind(&input.remark)
        .bind(&input.resume_url)
        .bind(input.employee_referral)
        .bind(&input.employee_id)
        .bind(input.consultancy_referral)
        .bind(&input.consultancy_name)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error creating candidate");
            ApiError::DatabaseError(e)
        })?;

        info!(
            candidate_id = %candidate_id,
            has_resume = !input.resume_url.is_empty(),
            "Candidate created"
        );

        self.get_candidate_by_id(&candidate_id).await
    }

    /// Replace every input field of an existing candidate
    pub async fn update_candidate(
        &self,
        candidate_id: &str,
        input: CandidateInput,
    ) -> Result<Candidate, ApiError> {
        validate_candidate_input(&input)?;
        let input = input.normalized();

        let result = sqlx::query(
            r#"
            UPDATE candidates
            SET name = ?, specialization = ?, location = ?, years_experience = ?, remark = ?,
                resume_url = ?, employee_referral = ?, employee_id = ?,
                consultancy_referral = ?, consultancy_name = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.specialization)
        .bind(&input.location)
        .bind(&input.years_experience)
        .bind(&input.remark)
        .bind(&input.resume_url)
        .bind(input.employee_referral)
        .bind(&input.employee_id)
        .bind(input.consultancy_referral)
        .bind(&input.consultancy_name)
        .bind(candidate_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, candidate_id = %candidate_id, "Database error updating candidate");
            ApiError::DatabaseError(e)
        })?;

        if result.rows_affected() == 0 {
            warn!(candidate_id = %candidate_id, "Update requested for unknown candidate");
            return Err(ApiError::NotFound("Candidate not found".to_string()));
        }

        info!(candidate_id = %candidate_id, "Candidate updated");

        self.get_candidate_by_id(candidate_id).await
    }

    /// Delete a candidate permanently
    pub async fn delete_candidate(&self, candidate_id: &str) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = ?")
            .bind(candidate_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, candidate_id = %candidate_id, "Database error deleting candidate");
                ApiError::DatabaseError(e)
            })?;

        if result.rows_affected() == 0 {
            warn!(candidate_id = %candidate_id, "Delete requested for unknown candidate");
            return Err(ApiError::NotFound("Candidate not found".to_string()));
        }

        info!(candidate_id = %candidate_id, "Candidate deleted");

        Ok(())
    }
}
