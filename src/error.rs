use crate::model::StateName;

/// Rejections of a single mutating call. None of them leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElectionError {
    #[error("Caller is not authorized to administer the election")]
    Unauthorized,
    #[error("The election has ended already")]
    ElectionClosed,
    #[error("States must have at least 1 seat")]
    InvalidSeatCount,
    #[error("There cannot be a tie")]
    TiedResult,
    #[error("Result for state {0} was already submitted")]
    DuplicateState(StateName),
}

impl ElectionError {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            ElectionError::Unauthorized => "unauthorized",
            ElectionError::ElectionClosed => "election_closed",
            ElectionError::InvalidSeatCount => "invalid_seat_count",
            ElectionError::TiedResult => "tied_result",
            ElectionError::DuplicateState(_) => "duplicate_state",
        }
    }
}

pub type Result<T> = std::result::Result<T, ElectionError>;
