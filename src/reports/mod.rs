use crate::model::Candidate;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub mod generator;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Standings as published to observers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsReport {
    pub candidates: Vec<CandidateStanding>,
    pub leader: Candidate,
    pub leader_name: String,
    pub election_ended: bool,
    pub state_count: usize,
    pub states: Vec<StateRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStanding {
    pub candidate: Candidate,
    pub name: String,
    pub seats: u64,
    pub states_won: usize,
    pub popular_votes: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRow {
    pub name: String,
    pub votes_a: u64,
    pub votes_b: u64,
    pub seats: u32,
    pub winner: Candidate,
}

impl StandingsReport {
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> ReportResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
