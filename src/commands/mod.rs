mod ingest;
mod session;
mod status;
mod submit;

pub use ingest::ingest;
pub use session::Session;
pub use status::{init, leader, report, status};
pub use submit::{end, submit};

use crate::config::ConfigError;
use crate::database::DatabaseError;
use crate::error::ElectionError;
use crate::model::ModelError;
use crate::reports::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Election(#[from] ElectionError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
    #[error("Invalid input: {0}")]
    Model(#[from] ModelError),
}

pub type CommandResult<T> = std::result::Result<T, CommandError>;
