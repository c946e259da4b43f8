// src/candidates/handlers/mod.rs

pub mod candidates;
pub mod files;

// Re-export handler functions
pub use candidates::*;
