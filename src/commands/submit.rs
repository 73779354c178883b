use super::{CommandResult, Session};
use crate::model::StateResult;
use colored::*;

pub async fn submit(
    session: &Session,
    name: &str,
    votes_a: u64,
    votes_b: u64,
    seats: u32,
) -> CommandResult<()> {
    let result = StateResult::new(name, votes_a, votes_b, seats)?;

    let winner = session
        .election
        .submit_state_result(&session.caller, result.clone())?;
    session.log.record_submission(&result, winner).await?;

    let leader = session.election.current_leader();
    println!(
        "✅ {} awarded {} seats to {}",
        result.name.as_str().bright_cyan(),
        result.seats.to_string().bright_yellow(),
        session.config.label(winner).bright_green()
    );
    println!(
        "🏆 Current leader: {} ({})",
        session.config.label(leader).bright_green().bold(),
        leader.ordinal()
    );

    Ok(())
}

pub async fn end(session: &Session) -> CommandResult<()> {
    session.election.end_election(&session.caller)?;
    session.log.record_end().await?;

    let leader = session.election.current_leader();
    println!("🏁 {}", "Election ended".bright_green().bold());
    println!(
        "🏆 Final leader: {} ({})",
        session.config.label(leader).bright_green().bold(),
        leader.ordinal()
    );

    Ok(())
}
