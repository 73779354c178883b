pub mod ingestion;
pub mod schema;

use crate::access::{AccessControl, Caller};
use crate::election::Election;
use crate::error::ElectionError;
use crate::formats::FormatError;
use crate::model::{Candidate, ModelError, StateResult};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Data integrity error: {0}")]
    Integrity(String),
    #[error("Logged result for {state} was rejected on replay: {source}")]
    Replay {
        state: String,
        source: ElectionError,
    },
    #[error("Invalid logged value: {0}")]
    Model(#[from] ModelError),
    #[error("Batch error: {0}")]
    Format(#[from] FormatError),
    #[error("The log already records the end of the election")]
    LogClosed,
    #[error("Batch {filename} was already ingested (sha1 {file_hash})")]
    AlreadyIngested { filename: String, file_hash: String },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Append-only record of every accepted operation, used to rebuild the election.
#[derive(Clone)]
pub struct SubmissionLog {
    pool: SqlitePool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LoggedSubmission {
    pub id: i64,
    pub name: String,
    pub votes_a: i64,
    pub votes_b: i64,
    pub seats: i64,
    pub winner: i64,
    pub submitted_at: DateTime<Utc>,
}

impl LoggedSubmission {
    pub fn to_state_result(&self) -> Result<StateResult> {
        Ok(StateResult::new(
            self.name.clone(),
            from_column(self.votes_a, "votes_a")?,
            from_column(self.votes_b, "votes_b")?,
            from_column(self.seats, "seats")?,
        )?)
    }

    pub fn winner(&self) -> Result<Candidate> {
        let ordinal: u8 = from_column(self.winner, "winner")?;
        Ok(Candidate::try_from(ordinal)?)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BatchFileInfo {
    pub id: i64,
    pub filename: String,
    pub file_hash: String,
    pub results_count: i64,
    pub processed_at: DateTime<Utc>,
}

fn from_column<T: TryFrom<i64>>(value: i64, column: &str) -> Result<T> {
    T::try_from(value)
        .map_err(|_| DatabaseError::Integrity(format!("{} out of range: {}", column, value)))
}

fn to_column<T>(value: T, column: &str) -> Result<i64>
where
    T: Copy + std::fmt::Display,
    i64: TryFrom<T>,
{
    i64::try_from(value)
        .map_err(|_| DatabaseError::Integrity(format!("{} too large to store: {}", column, value)))
}

impl SubmissionLog {
    /// Opens (creating if needed) the log stored at `path`.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        Self::from_pool(pool).await
    }

    pub async fn create_in_memory() -> Result<Self> {
        // Each in-memory connection is its own database, so keep exactly one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        schema::create_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Append an accepted state result.
    ///
    /// The ended check and the insert are one statement, so another process ending
    /// the election cannot slip in between them.
    pub async fn record_submission(&self, result: &StateResult, winner: Candidate) -> Result<()> {
        let votes_a = to_column(result.votes_a, "votes_a")?;
        let votes_b = to_column(result.votes_b, "votes_b")?;
        let seats = i64::from(result.seats);
        let winner = i64::from(winner.ordinal());

        let inserted = sqlx::query(
            r#"
            INSERT INTO state_results (name, votes_a, votes_b, seats, winner, submitted_at)
            SELECT ?, ?, ?, ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM election_events WHERE kind = 'ended')
            "#,
        )
        .bind(result.name.as_str())
        .bind(votes_a)
        .bind(votes_b)
        .bind(seats)
        .bind(winner)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if inserted.rows_affected() == 0 {
            return Err(DatabaseError::LogClosed);
        }

        Ok(())
    }

    /// Append the terminal transition, pinned to the newest logged submission
    pub async fn record_end(&self) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO election_events (kind, last_submission_id, occurred_at)
            SELECT 'ended', COALESCE(MAX(id), 0), ? FROM state_results
            "#,
        )
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All accepted submissions in acceptance order
    pub async fn submissions(&self) -> Result<Vec<LoggedSubmission>> {
        let rows = sqlx::query_as::<_, LoggedSubmission>(
            r#"
            SELECT id, name, votes_a, votes_b, seats, winner, submitted_at
            FROM state_results
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Id of the last submission the end covers, or `None` while the election is open.
    pub async fn ended_after(&self) -> Result<Option<i64>> {
        let last_submission_id = sqlx::query_scalar::<_, i64>(
            "SELECT last_submission_id FROM election_events WHERE kind = 'ended'",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(last_submission_id)
    }

    pub async fn is_ended(&self) -> Result<bool> {
        Ok(self.ended_after().await?.is_some())
    }

    pub async fn find_batch(&self, file_hash: &str) -> Result<Option<BatchFileInfo>> {
        let row = sqlx::query_as::<_, BatchFileInfo>(
            r#"
            SELECT id, filename, file_hash, results_count, processed_at
            FROM batch_files
            WHERE file_hash = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(file_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn record_batch(
        &self,
        filename: &str,
        file_hash: &str,
        results_count: usize,
    ) -> Result<()> {
        let results_count = to_column(results_count, "results_count")?;

        sqlx::query(
            r#"
            INSERT INTO batch_files (filename, file_hash, results_count, processed_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(filename)
        .bind(file_hash)
        .bind(results_count)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Re-applies every logged operation to a fresh election through its public surface.
    ///
    /// Returns the number of state results replayed.
    pub async fn replay_into<A: AccessControl>(
        &self,
        election: &Election<A>,
        caller: &Caller,
    ) -> Result<usize> {
        let submissions = self.submissions().await?;
        let ended_after = self.ended_after().await?;

        for logged in &submissions {
            if matches!(ended_after, Some(last) if logged.id > last) {
                return Err(DatabaseError::Integrity(format!(
                    "{} was logged after the election ended",
                    logged.name
                )));
            }

            let result = logged.to_state_result()?;
            let winner = election
                .submit_state_result(caller, result)
                .map_err(|source| DatabaseError::Replay {
                    state: logged.name.clone(),
                    source,
                })?;

            if winner != logged.winner()? {
                return Err(DatabaseError::Integrity(format!(
                    "Logged winner for {} does not match its votes",
                    logged.name
                )));
            }
        }

        if ended_after.is_some() {
            election
                .end_election(caller)
                .map_err(|source| DatabaseError::Replay {
                    state: "<end>".to_string(),
                    source,
                })?;
        }

        debug!(
            submissions = submissions.len(),
            ended = election.election_ended(),
            "replayed submission log"
        );

        Ok(submissions.len())
    }
}
