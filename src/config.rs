use crate::model::Candidate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Human,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Human
    }
}

/// Settings shared by every subcommand. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TallyConfig {
    /// Identity holding the administrative capability.
    pub owner: String,
    /// SQLite file backing the submission log.
    pub database: PathBuf,
    pub candidate_a: String,
    pub candidate_b: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            owner: "owner".to_string(),
            database: PathBuf::from("election.sqlite"),
            candidate_a: "Candidate A".to_string(),
            candidate_b: "Candidate B".to_string(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Human,
        }
    }
}

impl TallyConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn label(&self, candidate: Candidate) -> &str {
        match candidate {
            Candidate::Nobody => "Nobody",
            Candidate::CandidateA => &self.candidate_a,
            Candidate::CandidateB => &self.candidate_b,
        }
    }
}
