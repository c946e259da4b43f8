// src/services/storage.rs
//! Local disk storage for uploaded resumes
//!
//! Files are written once under a unique name and never overwritten or
//! removed by the service.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::common::generate_raw_id;

/// URL prefix under which stored files are served back
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

const FALLBACK_FILENAME: &str = "resume";
const TOKEN_LENGTH: usize = 8;
/// Longest stem kept from a client filename, leaving room for the token and
/// extension under the usual 255 byte filesystem limit
const MAX_STEM_BYTES: usize = 200;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file that has been written to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ResumeStorage {
    root: PathBuf,
}

impl ResumeStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage directory if it is missing
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write an uploaded resume and return its stored name and public URL
    pub async fn store(
        &self,
        original_name: Option<&str>,
        data: &[u8],
    ) -> Result<StoredFile, StorageError> {
        let filename = format!(
            "{}_{}",
            generate_raw_id(TOKEN_LENGTH),
            normalize_upload_name(original_name)
        );
        let path = self.root.join(&filename);

        tokio::fs::write(&path, data).await?;

        info!(filename = %filename, size = data.len(), "Resume stored");

        Ok(StoredFile {
            url: format!("{}/{}", UPLOADS_URL_PREFIX, filename),
            filename,
        })
    }

    /// Read a stored file back by the name it was stored under
    pub async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(filename)?;

        match tokio::fs::read(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(filename = %filename, "Requested upload does not exist");
                Err(StorageError::NotFound(filename.to_string()))
            }
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn resolve(&self, filename: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_filename(filename) {
            return Err(StorageError::InvalidName(filename.to_string()));
        }
        Ok(self.root.join(filename))
    }
}

/// Reduce a client-supplied filename to a safe name ending in `.pdf`
///
/// Only the last path component is kept, any character outside
/// `[A-Za-z0-9._-]` becomes `_` and long names are cut to `MAX_STEM_BYTES`.
pub fn normalize_upload_name(original_name: Option<&str>) -> String {
    let base = original_name
        .map(|name| name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(name))
        .unwrap_or("");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');

    let stem = if cleaned.is_empty() {
        FALLBACK_FILENAME
    } else {
        cleaned
    };
    let (stem, extension) = if stem.to_ascii_lowercase().ends_with(".pdf") {
        stem.split_at(stem.len() - ".pdf".len())
    } else {
        (stem, ".pdf")
    };

    // Cleaned names are ASCII, so any byte offset is a char boundary
    let stem = &stem[..stem.len().min(MAX_STEM_BYTES)];
    let stem = stem.trim_end_matches('.');
    let stem = if stem.is_empty() { FALLBACK_FILENAME } else { stem };

    format!("{}{}", stem, extension)
}

fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
        && !filename.starts_with('.')
}
