use crate::error::{ElectionError, Result};
use crate::model::{Candidate, StateName, StateResult};
use std::collections::HashMap;

/// Accepted state results and the seat totals they add up to.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    states: HashMap<StateName, StateResult>,
    order: Vec<StateName>,
    seats_a: u64,
    seats_b: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a result against the tally without touching it, returning the state's winner.
    pub fn validate(&self, result: &StateResult) -> Result<Candidate> {
        if result.seats < 1 {
            return Err(ElectionError::InvalidSeatCount);
        }

        let winner = match result.winner() {
            Candidate::Nobody => return Err(ElectionError::TiedResult),
            winner => winner,
        };

        if self.states.contains_key(&result.name) {
            return Err(ElectionError::DuplicateState(result.name.clone()));
        }

        Ok(winner)
    }

    /// Validates and records a result. Nothing changes unless every check passes.
    pub fn record(&mut self, result: StateResult) -> Result<Candidate> {
        let winner = self.validate(&result)?;

        let seats = u64::from(result.seats);
        if winner == Candidate::CandidateA {
            self.seats_a += seats;
        } else {
            self.seats_b += seats;
        }

        self.order.push(result.name.clone());
        self.states.insert(result.name.clone(), result);

        Ok(winner)
    }

    pub fn leader(&self) -> Candidate {
        leader_for(self.seats_a, self.seats_b)
    }

    pub fn seats(&self, candidate: Candidate) -> u64 {
        match candidate {
            Candidate::CandidateA => self.seats_a,
            Candidate::CandidateB => self.seats_b,
            Candidate::Nobody => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Results in the order they were accepted.
    pub fn results(&self) -> impl Iterator<Item = &StateResult> + '_ {
        self.order.iter().filter_map(move |name| self.states.get(name))
    }
}

/// Derives the leader from the two seat totals.
pub fn leader_for(seats_a: u64, seats_b: u64) -> Candidate {
    if seats_a > seats_b {
        Candidate::CandidateA
    } else if seats_b > seats_a {
        Candidate::CandidateB
    } else {
        Candidate::Nobody
    }
}
