use super::{CandidateStanding, StandingsReport, StateRow};
use crate::config::TallyConfig;
use crate::election::Standings;
use crate::model::Candidate;
use colored::*;
use itertools::Itertools;

/// Build the published report from a standings snapshot
pub fn generate_report(standings: &Standings, config: &TallyConfig) -> StandingsReport {
    let states: Vec<StateRow> = standings
        .results
        .iter()
        .sorted_by(|a, b| b.seats.cmp(&a.seats).then_with(|| a.name.cmp(&b.name)))
        .map(|result| StateRow {
            name: result.name.to_string(),
            votes_a: result.votes_a,
            votes_b: result.votes_b,
            seats: result.seats,
            winner: result.winner(),
        })
        .collect();

    let candidates = [Candidate::CandidateA, Candidate::CandidateB]
        .iter()
        .map(|&candidate| {
            let seats = match candidate {
                Candidate::CandidateA => standings.seats_a,
                _ => standings.seats_b,
            };
            let popular_votes = standings
                .results
                .iter()
                .map(|r| match candidate {
                    Candidate::CandidateA => r.votes_a,
                    _ => r.votes_b,
                })
                .fold(0u64, u64::saturating_add);

            CandidateStanding {
                candidate,
                name: config.label(candidate).to_string(),
                seats,
                states_won: states.iter().filter(|row| row.winner == candidate).count(),
                popular_votes,
            }
        })
        .collect();

    StandingsReport {
        candidates,
        leader: standings.leader,
        leader_name: config.label(standings.leader).to_string(),
        election_ended: standings.ended(),
        state_count: states.len(),
        states,
    }
}

/// Print the report as a coloured table
pub fn print_report(report: &StandingsReport) {
    println!("\n{}", "🗳️  Election Standings".bright_cyan().bold());
    println!("{}", "=".repeat(50).bright_cyan());

    for standing in &report.candidates {
        println!(
            "{}: {} seats, {} states, {} votes",
            standing.name.bright_white().bold(),
            standing.seats.to_string().bright_green().bold(),
            standing.states_won.to_string().bright_yellow(),
            standing.popular_votes.to_string().bright_yellow()
        );
    }

    println!("{}", "-".repeat(50).bright_cyan());

    for row in &report.states {
        println!(
            "  {:<24} {:>10} {:>10} {:>4}  {}",
            row.name,
            row.votes_a,
            row.votes_b,
            row.seats,
            row.winner.to_string().bright_yellow()
        );
    }

    println!("{}", "-".repeat(50).bright_cyan());
    println!(
        "{}: {} ({})",
        "Leader".bright_white().bold(),
        report.leader_name.bright_green().bold(),
        report.leader.ordinal()
    );
    println!(
        "{}: {}",
        "Status".bright_white().bold(),
        if report.election_ended {
            "ended".red()
        } else {
            "open".green()
        }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Caller, Owner};
    use crate::election::Election;
    use crate::model::StateResult;

    #[test]
    fn report_orders_states_and_totals_candidates() {
        let owner = Caller::new("owner");
        let election = Election::new(Owner::new(owner.clone()));
        for (name, a, b, seats) in [
            ("Ohio", 800, 1200, 33),
            ("California", 1000, 900, 32),
            ("Alaska", 10, 5, 3),
            ("Nevada", 5, 10, 3),
        ] {
            election
                .submit_state_result(&owner, StateResult::new(name, a, b, seats).unwrap())
                .unwrap();
        }

        let config = TallyConfig {
            candidate_a: "Biden".to_string(),
            candidate_b: "Trump".to_string(),
            ..TallyConfig::default()
        };
        let report = generate_report(&election.standings(), &config);

        let names: Vec<_> = report.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ohio", "California", "Alaska", "Nevada"]);
        assert_eq!(report.leader, Candidate::CandidateB);
        assert_eq!(report.leader_name, "Trump");
        assert_eq!(report.candidates[0].seats, 35);
        assert_eq!(report.candidates[0].states_won, 2);
        assert_eq!(report.candidates[0].popular_votes, 1815);
        assert_eq!(report.candidates[1].seats, 36);
        assert!(!report.election_ended);
    }

    #[test]
    fn report_serializes_candidate_ordinals() {
        let election = Election::new(Owner::new(Caller::new("owner")));
        let report = generate_report(&election.standings(), &TallyConfig::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["leader"], 0);
        assert_eq!(json["leaderName"], "Nobody");
        assert_eq!(json["candidates"][1]["candidate"], 2);
        assert_eq!(json["stateCount"], 0);
    }
}
