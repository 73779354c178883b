pub mod lifecycle;
pub mod tally;

use crate::access::{AccessControl, Caller};
use crate::error::Result;
use crate::model::{Candidate, StateResult};
use lifecycle::{authorize, Lifecycle, Phase};
use serde::Serialize;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tally::Tally;
use tracing::info;

/// The process-wide election record, guarded as a single unit.
#[derive(Debug, Default)]
struct ElectionState {
    tally: Tally,
    lifecycle: Lifecycle,
}

/// Consistent point-in-time view of the election.
#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    pub seats_a: u64,
    pub seats_b: u64,
    pub leader: Candidate,
    pub phase: Phase,
    pub results: Vec<StateResult>,
}

impl Standings {
    pub fn ended(&self) -> bool {
        self.phase == Phase::Closed
    }
}

/// Two-candidate, seat-weighted election.
///
/// Mutations take the write lock for their whole duration, so each one is applied
/// completely or not at all before the next is observed. Queries share the read lock.
pub struct Election<A> {
    access: A,
    state: RwLock<ElectionState>,
}

impl<A: AccessControl> Election<A> {
    pub fn new(access: A) -> Self {
        Self {
            access,
            state: RwLock::new(ElectionState::default()),
        }
    }

    /// Records one state's result and returns the candidate awarded its seats.
    pub fn submit_state_result(&self, caller: &Caller, result: StateResult) -> Result<Candidate> {
        authorize(&self.access, caller)?;

        let mut state = self.write();
        state.lifecycle.ensure_open()?;

        let name = result.name.clone();
        let seats = result.seats;
        let winner = state.tally.record(result)?;

        info!(
            state = %name,
            seats,
            winner = %winner,
            leader = %state.tally.leader(),
            "state result accepted"
        );
        Ok(winner)
    }

    /// Closes the election for good.
    pub fn end_election(&self, caller: &Caller) -> Result<()> {
        authorize(&self.access, caller)?;

        let mut state = self.write();
        state.lifecycle.close()?;

        info!(leader = %state.tally.leader(), "election ended");
        Ok(())
    }

    pub fn current_leader(&self) -> Candidate {
        self.read().tally.leader()
    }

    pub fn election_ended(&self) -> bool {
        self.read().lifecycle.is_ended()
    }

    pub fn standings(&self) -> Standings {
        let state = self.read();
        Standings {
            seats_a: state.tally.seats(Candidate::CandidateA),
            seats_b: state.tally.seats(Candidate::CandidateB),
            leader: state.tally.leader(),
            phase: state.lifecycle.phase(),
            results: state.tally.results().cloned().collect(),
        }
    }

    // A panicking reader or writer never leaves a half-applied update behind,
    // since every check runs before the tally is touched.
    fn read(&self) -> RwLockReadGuard<'_, ElectionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ElectionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
