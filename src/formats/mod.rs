//! Readers for batch files of state results.

pub mod text;

use crate::model::StateResult;
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not decompress batch: {0}")]
    Decompress(std::io::Error),
    #[error("Batch is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Invalid JSON batch: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Line {line}: {message}")]
    Line { line: usize, message: String },
    #[error("Unsupported batch file: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Text,
}

/// Works out the format from a file name such as `results.csv` or `results.json.gz`.
pub fn detect_format(file_name: &str) -> Result<(BatchFormat, bool)> {
    let lower = file_name.to_lowercase();
    let (stem, compressed) = match lower.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (lower.as_str(), false),
    };

    let format = match Path::new(stem).extension().and_then(|ext| ext.to_str()) {
        Some("json") => BatchFormat::Json,
        Some("csv") | Some("txt") => BatchFormat::Text,
        _ => return Err(FormatError::Unsupported(file_name.to_string())),
    };

    Ok((format, compressed))
}

/// Raw contents of a batch file together with the name that selects its format.
#[derive(Debug, Clone)]
pub struct BatchFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl BatchFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| FormatError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self { file_name, bytes })
    }

    pub fn state_results(&self) -> Result<Vec<StateResult>> {
        parse_state_results(&self.bytes, &self.file_name)
    }
}

/// Parses raw batch contents; `file_name` only selects the format.
pub fn parse_state_results(bytes: &[u8], file_name: &str) -> Result<Vec<StateResult>> {
    let (format, compressed) = detect_format(file_name)?;

    let mut decompressed = Vec::new();
    let contents = if compressed {
        GzDecoder::new(bytes)
            .read_to_end(&mut decompressed)
            .map_err(FormatError::Decompress)?;
        decompressed.as_slice()
    } else {
        bytes
    };

    match format {
        BatchFormat::Json => Ok(serde_json::from_slice(contents)?),
        BatchFormat::Text => text::parse_text(std::str::from_utf8(contents)?),
    }
}
