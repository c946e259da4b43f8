// src/services/mod.rs
//
// Shared services used across domain modules

pub mod storage;

// Re-export commonly used types for convenience
pub use storage::{ResumeStorage, StorageError};
