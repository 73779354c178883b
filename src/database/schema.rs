use crate::database::{DatabaseError, Result};
/// Submission log schema and integrity checks
use sqlx::SqlitePool;

pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // Accepted state results, one row per state
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS state_results (
            id INTEGER PRIMARY KEY,
            name TEXT UNIQUE NOT NULL,
            votes_a INTEGER NOT NULL,
            votes_b INTEGER NOT NULL,
            seats INTEGER NOT NULL,
            winner INTEGER NOT NULL,
            submitted_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Lifecycle transitions; only `ended` exists. `last_submission_id` is the
    // newest state_results row the transition covers.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS election_events (
            id INTEGER PRIMARY KEY,
            kind TEXT UNIQUE NOT NULL,
            last_submission_id INTEGER NOT NULL,
            occurred_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Batch files already ingested
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS batch_files (
            id INTEGER PRIMARY KEY,
            filename TEXT NOT NULL,
            file_hash TEXT NOT NULL,
            results_count INTEGER NOT NULL,
            processed_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<()> {
    let indexes = vec![
        "CREATE INDEX IF NOT EXISTS idx_state_results_winner ON state_results(winner)",
        "CREATE INDEX IF NOT EXISTS idx_batch_files_hash ON batch_files(file_hash)",
    ];

    for index_sql in indexes {
        sqlx::query(index_sql).execute(pool).await?;
    }

    Ok(())
}

/// Verify database schema integrity
pub async fn verify_schema(pool: &SqlitePool) -> Result<()> {
    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    let expected_tables = ["batch_files", "election_events", "state_results"];

    for expected in &expected_tables {
        if !tables.iter().any(|name| name == expected) {
            return Err(DatabaseError::Integrity(format!(
                "Missing table: {}",
                expected
            )));
        }
    }

    Ok(())
}
