//! Seat-weighted tally for a two-candidate election.
//!
//! An owner submits one result per state; each state's seats go wholesale to
//! whoever won its popular vote, and the leader is whoever holds more seats.
//! Once the owner ends the election the tally is frozen.

pub mod access;
pub mod commands;
pub mod config;
pub mod database;
pub mod election;
pub mod error;
pub mod formats;
pub mod logging;
pub mod model;
pub mod reports;

pub use access::{AccessControl, Caller, Owner};
pub use election::{Election, Standings};
pub use error::ElectionError;
pub use model::{Candidate, StateName, StateResult};
