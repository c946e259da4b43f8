// src/common/config.rs
//! Runtime configuration loaded from the environment

use std::env;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite://candidates.db";
const DEFAULT_UPLOADS_DIR: &str = "./uploads";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
const DEFAULT_MAX_UPLOAD_MB: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub uploads_dir: PathBuf,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOADS_DIR));

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let max_upload_mb = env::var("MAX_UPLOAD_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|mb| *mb > 0)
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB);

        let reset_db = env::var("RESET_DB")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        Self {
            database_url,
            uploads_dir,
            port,
            cors_origins,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            reset_db,
        }
    }

    /// Filesystem path of the SQLite database, if the URL points at a file
    pub fn database_file(&self) -> Option<PathBuf> {
        let path_part = self.database_url.strip_prefix("sqlite://")?;
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if path_without_params.is_empty() || path_without_params.starts_with(':') {
            return None;
        }
        Some(PathBuf::from(path_without_params))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Command line switch: `--migrate` runs migrations and exits
pub fn migrate_only_requested() -> bool {
    env::args().skip(1).any(|arg| arg == "--migrate")
}
