use super::CommandResult;
use crate::access::{Caller, Owner};
use crate::config::TallyConfig;
use crate::database::SubmissionLog;
use crate::election::Election;
use colored::*;

/// Everything a subcommand needs: the rebuilt election, its log, and who is acting.
pub struct Session {
    pub config: TallyConfig,
    pub log: SubmissionLog,
    pub election: Election<Owner>,
    pub caller: Caller,
}

impl Session {
    /// Opens the configured log and replays it into a fresh election.
    pub async fn open(config: TallyConfig, caller: Option<String>) -> CommandResult<Self> {
        let log = SubmissionLog::open(&config.database).await?;
        Self::with_log(config, log, caller).await
    }

    pub async fn with_log(
        config: TallyConfig,
        log: SubmissionLog,
        caller: Option<String>,
    ) -> CommandResult<Self> {
        let owner = Caller::new(config.owner.clone());
        let caller = caller.map(Caller::new).unwrap_or_else(|| owner.clone());
        let election = Election::new(Owner::new(owner.clone()));

        let replayed = log.replay_into(&election, &owner).await?;
        if replayed > 0 {
            eprintln!(
                "{} {} state results from {}",
                "↺ Replayed".dimmed(),
                replayed.to_string().dimmed(),
                config.database.display().to_string().dimmed()
            );
        }

        Ok(Self {
            config,
            log,
            election,
            caller,
        })
    }
}
