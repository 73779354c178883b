use super::{CommandResult, Session};
use crate::database::schema;
use crate::reports::generator::{generate_report, print_report};
use colored::*;
use std::path::Path;

pub async fn init(session: &Session) -> CommandResult<()> {
    schema::verify_schema(session.log.pool()).await?;
    println!(
        "✅ Submission log ready: {}",
        session.config.database.display().to_string().bright_green()
    );
    Ok(())
}

pub fn leader(session: &Session) {
    let leader = session.election.current_leader();
    println!(
        "{} {}",
        leader.ordinal(),
        session.config.label(leader).bright_green().bold()
    );
}

pub fn status(session: &Session) {
    let standings = session.election.standings();
    println!(
        "{}: {}",
        "Election ended".bright_white().bold(),
        standings.ended()
    );
    println!(
        "{}: {} | {}: {}",
        session.config.candidate_a.bright_white().bold(),
        standings.seats_a.to_string().bright_yellow(),
        session.config.candidate_b.bright_white().bold(),
        standings.seats_b.to_string().bright_yellow()
    );
    println!(
        "{}: {}",
        "States reported".bright_white().bold(),
        standings.results.len()
    );
}

pub fn report(session: &Session, json: bool, output: Option<&Path>) -> CommandResult<()> {
    let report = generate_report(&session.election.standings(), &session.config);

    match output {
        Some(path) => {
            report.write_json(path)?;
            println!(
                "✅ Report written: {}",
                path.display().to_string().bright_green()
            );
        }
        None if json => println!("{}", report.to_json()?),
        None => print_report(&report),
    }

    Ok(())
}
