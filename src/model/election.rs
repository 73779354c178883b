use super::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two contenders, or `Nobody` when no one is ahead.
///
/// The ordinals are part of the storage and CLI encoding and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Candidate {
    Nobody = 0,
    CandidateA = 1,
    CandidateB = 2,
}

impl Candidate {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl From<Candidate> for u8 {
    fn from(candidate: Candidate) -> u8 {
        candidate.ordinal()
    }
}

impl TryFrom<u8> for Candidate {
    type Error = ModelError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Candidate::Nobody),
            1 => Ok(Candidate::CandidateA),
            2 => Ok(Candidate::CandidateB),
            other => Err(ModelError::UnknownCandidate(other)),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Nobody => write!(f, "NOBODY"),
            Candidate::CandidateA => write!(f, "CANDIDATE_A"),
            Candidate::CandidateB => write!(f, "CANDIDATE_B"),
        }
    }
}

/// Non-empty, case-sensitive state identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateName(String);

impl StateName {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyStateName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateName {
    type Error = ModelError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl FromStr for StateName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<StateName> for String {
    fn from(name: StateName) -> String {
        name.0
    }
}

impl AsRef<str> for StateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Largest vote count a state result may carry.
pub const MAX_VOTES: u64 = i64::MAX as u64;

/// A single state's popular vote and the seats it awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateResultRepr")]
pub struct StateResult {
    pub name: StateName,
    pub votes_a: u64,
    pub votes_b: u64,
    pub seats: u32,
}

/// Batch files carry results either as `["Ohio", 800, 1200, 33]` tuples or as records.
#[derive(Deserialize)]
#[serde(untagged)]
enum StateResultRepr {
    Tuple(StateName, u64, u64, u32),
    Record {
        name: StateName,
        #[serde(alias = "votesA")]
        votes_a: u64,
        #[serde(alias = "votesB")]
        votes_b: u64,
        seats: u32,
    },
}

impl TryFrom<StateResultRepr> for StateResult {
    type Error = ModelError;

    fn try_from(repr: StateResultRepr) -> Result<Self, Self::Error> {
        match repr {
            StateResultRepr::Tuple(name, votes_a, votes_b, seats)
            | StateResultRepr::Record {
                name,
                votes_a,
                votes_b,
                seats,
            } => StateResult::checked(name, votes_a, votes_b, seats),
        }
    }
}

impl StateResult {
    pub fn new(
        name: impl Into<String>,
        votes_a: u64,
        votes_b: u64,
        seats: u32,
    ) -> Result<Self, ModelError> {
        Self::checked(StateName::new(name)?, votes_a, votes_b, seats)
    }

    // Vote counts are stored as signed 64-bit integers.
    fn checked(
        name: StateName,
        votes_a: u64,
        votes_b: u64,
        seats: u32,
    ) -> Result<Self, ModelError> {
        for votes in [votes_a, votes_b] {
            if votes > MAX_VOTES {
                return Err(ModelError::VotesOutOfRange(votes));
            }
        }
        Ok(Self {
            name,
            votes_a,
            votes_b,
            seats,
        })
    }

    /// Candidate with strictly more votes in this state; `Nobody` on a tie.
    pub fn winner(&self) -> Candidate {
        if self.votes_a > self.votes_b {
            Candidate::CandidateA
        } else if self.votes_b > self.votes_a {
            Candidate::CandidateB
        } else {
            Candidate::Nobody
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_ordinals_are_stable() {
        assert_eq!(Candidate::Nobody.ordinal(), 0);
        assert_eq!(Candidate::CandidateA.ordinal(), 1);
        assert_eq!(Candidate::CandidateB.ordinal(), 2);
        assert_eq!(Candidate::try_from(2), Ok(Candidate::CandidateB));
        assert_eq!(Candidate::try_from(3), Err(ModelError::UnknownCandidate(3)));
    }

    #[test]
    fn candidate_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&Candidate::CandidateA).unwrap(), "1");
        let parsed: Candidate = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Candidate::Nobody);
        assert!(serde_json::from_str::<Candidate>("7").is_err());
    }

    #[test]
    fn empty_state_name_is_rejected() {
        assert_eq!(StateName::new(""), Err(ModelError::EmptyStateName));
        assert!(StateResult::new("", 1, 2, 3).is_err());
    }

    #[test]
    fn state_names_are_case_sensitive() {
        assert_ne!(StateName::new("Ohio").unwrap(), StateName::new("ohio").unwrap());
    }

    #[test]
    fn deserializes_tuple_and_record_forms() {
        let tuple: StateResult = serde_json::from_str(r#"["California", 1000, 900, 32]"#).unwrap();
        let record: StateResult = serde_json::from_str(
            r#"{"name": "California", "votesA": 1000, "votes_b": 900, "seats": 32}"#,
        )
        .unwrap();
        assert_eq!(tuple, record);
        assert_eq!(tuple.winner(), Candidate::CandidateA);
    }

    #[test]
    fn tuple_with_empty_name_fails_to_parse() {
        assert!(serde_json::from_str::<StateResult>(r#"["", 1, 2, 3]"#).is_err());
    }

    #[test]
    fn votes_beyond_the_storable_range_are_rejected() {
        assert_eq!(
            StateResult::new("Big", u64::MAX, 0, 5),
            Err(ModelError::VotesOutOfRange(u64::MAX))
        );
        assert!(StateResult::new("Big", 0, MAX_VOTES, 5).is_ok());
        assert!(serde_json::from_str::<StateResult>(
            r#"["Big", 18446744073709551615, 0, 5]"#
        )
        .is_err());
    }

    #[test]
    fn winner_follows_strictly_more_votes() {
        assert_eq!(
            StateResult::new("Ohio", 800, 1200, 33).unwrap().winner(),
            Candidate::CandidateB
        );
        assert_eq!(
            StateResult::new("Nowhere", 0, 0, 1).unwrap().winner(),
            Candidate::Nobody
        );
    }
}
