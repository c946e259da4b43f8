// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod id_generator;
pub mod migrations;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{route_not_found, ApiError};
pub use id_generator::{generate_candidate_id, generate_raw_id};
pub use state::AppState;
pub use validation::{ValidationResult, Validator};

#[cfg(test)]
pub mod test_helpers;
