use clap::{Parser, Subcommand};
use colored::*;
use seat_tally::commands::{self, CommandError, CommandResult, Session};
use seat_tally::config::TallyConfig;
use seat_tally::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
struct Opts {
    /// JSON config file
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// SQLite submission log (overrides the config file)
    #[clap(long, global = true)]
    database: Option<PathBuf>,
    /// Identity performing the operation (defaults to the configured owner)
    #[clap(long, global = true)]
    caller: Option<String>,
    /// Log filter, e.g. "info" or "seat_tally=debug"
    #[clap(long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the submission log if it does not exist yet.
    Init,
    /// Submit one state's result.
    Submit {
        /// State name (case-sensitive)
        name: String,
        /// Popular votes for candidate A
        votes_a: u64,
        /// Popular votes for candidate B
        votes_b: u64,
        /// Seats awarded to the state's winner
        seats: u32,
    },
    /// End the election. This cannot be undone.
    End,
    /// Print the current leader's ordinal and name.
    Leader,
    /// Print whether the election has ended and the seat totals.
    Status,
    /// Submit every result in a .json, .csv or .txt file (optionally .gz).
    Ingest {
        file: PathBuf,
        /// Ingest even if this exact file was ingested before
        #[clap(long)]
        force: bool,
    },
    /// Print full standings.
    Report {
        /// Print JSON instead of a table
        #[clap(long)]
        json: bool,
        /// Write JSON to this file
        #[clap(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let opts = Opts::parse();

    if let Err(e) = run(opts).await {
        match &e {
            CommandError::Election(error) => {
                eprintln!("❌ Rejected [{}]: {}", error.code().bright_red(), error)
            }
            other => eprintln!("❌ {}", other),
        }
        std::process::exit(1);
    }
}

async fn run(opts: Opts) -> CommandResult<()> {
    let mut config = TallyConfig::load_or_default(opts.config.as_deref())?;
    if let Some(database) = opts.database {
        config.database = database;
    }
    if let Some(level) = opts.log_level {
        config.log_level = level;
    }

    init_logging(config.log_format, &config.log_level);

    let session = Session::open(config, opts.caller).await?;

    match opts.command {
        Command::Init => commands::init(&session).await?,
        Command::Submit {
            name,
            votes_a,
            votes_b,
            seats,
        } => commands::submit(&session, &name, votes_a, votes_b, seats).await?,
        Command::End => commands::end(&session).await?,
        Command::Leader => commands::leader(&session),
        Command::Status => commands::status(&session),
        Command::Ingest { file, force } => commands::ingest(&session, &file, force).await?,
        Command::Report { json, output } => {
            commands::report(&session, json, output.as_deref())?
        }
    }

    Ok(())
}
