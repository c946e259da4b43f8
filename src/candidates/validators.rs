// src/candidates/validators.rs

use super::models::CandidateInput;
use crate::common::{ApiError, ValidationResult, Validator};

pub const REFERRAL_CONFLICT_MESSAGE: &str =
    "Candidate cannot have both employee and consultancy referral";

const MAX_TEXT_LENGTH: usize = 255;
const MAX_REMARK_LENGTH: usize = 2000;

// ============================================================================
// Candidate Validators
// ============================================================================

pub struct CandidateValidator;

impl Validator<CandidateInput> for CandidateValidator {
    fn validate(&self, data: &CandidateInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("name", &data.name, "Name is required");
        result.require(
            "specialization",
            &data.specialization,
            "Specialization is required",
        );
        result.require("location", &data.location, "Location is required");
        result.require(
            "years_experience",
            &data.years_experience,
            "Years of experience is required",
        );

        for (field, value) in [
            ("name", &data.name),
            ("specialization", &data.specialization),
            ("location", &data.location),
            ("years_experience", &data.years_experience),
        ] {
            if value.chars().count() > MAX_TEXT_LENGTH {
                result.add_error(field, "Must be at most 255 characters");
            }
        }

        if let Some(remark) = &data.remark {
            if remark.chars().count() > MAX_REMARK_LENGTH {
                result.add_error("remark", "Remark must be at most 2000 characters");
            }
        }

        if data.employee_referral && is_blank(&data.employee_id) {
            result.add_error(
                "employee_id",
                "Employee ID is required for an employee referral",
            );
        }

        if data.consultancy_referral && is_blank(&data.consultancy_name) {
            result.add_error(
                "consultancy_name",
                "Consultancy name is required for a consultancy referral",
            );
        }

        result
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// The two referral channels are mutually exclusive
pub fn check_referral_exclusivity(data: &CandidateInput) -> Result<(), ApiError> {
    if data.employee_referral && data.consultancy_referral {
        return Err(ApiError::ValidationError(
            REFERRAL_CONFLICT_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

/// Full boundary check for a create or update request
pub fn validate_candidate_input(data: &CandidateInput) -> Result<(), ApiError> {
    check_referral_exclusivity(data)?;

    let result = CandidateValidator.validate(data);
    if !result.is_valid {
        return Err(ApiError::from(result));
    }

    Ok(())
}
