// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created if they don't exist. With `reset` set, the candidate
/// table is dropped first and every stored row is lost.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("⚠️  RESET_DB=true - Dropping candidate table and recreating schema...");
        drop_all_tables(pool).await?;
        info!("✅ Dropped old tables");
    } else {
        info!("ℹ️  Skipping table drop (RESET_DB not set). Tables will be created if they don't exist.");
    }

    create_candidate_tables(pool).await?;
    create_indexes(pool).await?;

    info!("✅ Database migration completed successfully!");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS candidates")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_candidate_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS candidates (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            specialization TEXT NOT NULL,
            location TEXT NOT NULL,
            years_experience TEXT NOT NULL,
            remark TEXT,
            resume_url TEXT NOT NULL DEFAULT '',
            employee_referral INTEGER NOT NULL DEFAULT 0,
            employee_id TEXT,
            consultancy_referral INTEGER NOT NULL DEFAULT 0,
            consultancy_name TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            CHECK (NOT (employee_referral = 1 AND consultancy_referral = 1))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_candidates_location ON candidates(location)",
        "CREATE INDEX IF NOT EXISTS idx_candidates_years_experience ON candidates(years_experience)",
        "CREATE INDEX IF NOT EXISTS idx_candidates_specialization ON candidates(specialization)",
    ];

    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
