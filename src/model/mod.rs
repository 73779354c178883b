pub mod election;

pub use election::{Candidate, StateName, StateResult};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown candidate ordinal: {0}")]
    UnknownCandidate(u8),
    #[error("State name must not be empty")]
    EmptyStateName,
    #[error("Vote count {0} is too large to store")]
    VotesOutOfRange(u64),
}
