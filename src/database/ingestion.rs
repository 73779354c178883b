/// Batch ingestion of state result files
use crate::access::{AccessControl, Caller};
use crate::database::{DatabaseError, Result, SubmissionLog};
use crate::election::Election;
use crate::error::ElectionError;
use crate::formats::BatchFile;
use crate::model::{Candidate, StateName};
use colored::*;
use instant::Instant;
use sha1::{Digest, Sha1};
use std::path::Path;

pub struct BatchIngester<'a, A> {
    log: &'a SubmissionLog,
    election: &'a Election<A>,
}

#[derive(Debug)]
pub struct RejectedResult {
    pub name: StateName,
    pub error: ElectionError,
}

#[derive(Debug)]
pub struct IngestionSummary {
    pub filename: String,
    pub file_hash: String,
    pub accepted: Vec<(StateName, Candidate)>,
    pub rejected: Vec<RejectedResult>,
    pub total_duration_ms: u64,
}

impl IngestionSummary {
    pub fn total_results(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

pub fn file_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

impl<'a, A: AccessControl> BatchIngester<'a, A> {
    pub fn new(log: &'a SubmissionLog, election: &'a Election<A>) -> Self {
        Self { log, election }
    }

    /// Submits every result in `path` as `caller`.
    ///
    /// Individual rejections are collected in the summary; they do not stop the batch.
    /// A file whose contents were ingested before is refused unless `force` is set.
    pub async fn ingest_file(
        &self,
        path: &Path,
        caller: &Caller,
        force: bool,
    ) -> Result<IngestionSummary> {
        let start = Instant::now();

        let batch = BatchFile::read(path)?;
        let file_hash = file_hash(&batch.bytes);

        if !force {
            if let Some(previous) = self.log.find_batch(&file_hash).await? {
                return Err(DatabaseError::AlreadyIngested {
                    filename: previous.filename,
                    file_hash,
                });
            }
        }

        // Every record is validated before any of them reaches the election.
        let results = batch.state_results()?;
        let filename = batch.file_name;

        println!(
            "🚀 Ingesting {} results from {}",
            results.len().to_string().bright_yellow(),
            filename.bright_cyan()
        );

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for result in results {
            let name = result.name.clone();
            match self.election.submit_state_result(caller, result.clone()) {
                Ok(winner) => {
                    self.log.record_submission(&result, winner).await?;
                    accepted.push((name, winner));
                }
                Err(error) => rejected.push(RejectedResult { name, error }),
            }
        }

        self.log
            .record_batch(&filename, &file_hash, accepted.len())
            .await?;

        let summary = IngestionSummary {
            filename,
            file_hash,
            accepted,
            rejected,
            total_duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        Ok(summary)
    }
}

/// Print ingestion summary
pub fn print_ingestion_summary(summary: &IngestionSummary) {
    println!("\n{}", "🎉 Ingestion Complete!".bright_green().bold());
    println!("{}", "=".repeat(50).bright_green());
    println!(
        "{}: {} ({})",
        "Batch".bright_white().bold(),
        summary.filename.bright_cyan(),
        summary.file_hash
    );
    println!(
        "{}: {}",
        "Accepted".bright_white().bold(),
        summary.accepted.len().to_string().bright_green()
    );
    println!(
        "{}: {}",
        "Rejected".bright_white().bold(),
        summary.rejected.len().to_string().bright_red()
    );
    for rejection in &summary.rejected {
        println!(
            "  ❌ {}: {}",
            rejection.name.as_str().bright_yellow(),
            rejection.error.code().red()
        );
    }
    println!(
        "{}: {} ms",
        "Total Duration".bright_white().bold(),
        summary.total_duration_ms.to_string().bright_yellow()
    );
    println!();
}
