use seat_tally::{Caller, Candidate, Election, ElectionError, Owner, StateResult};

fn owner() -> Caller {
    Caller::new("owner")
}

fn addr1() -> Caller {
    Caller::new("addr1")
}

fn state(name: &str, votes_a: u64, votes_b: u64, seats: u32) -> StateResult {
    StateResult::new(name, votes_a, votes_b, seats).unwrap()
}

#[test]
fn full_election_walkthrough() {
    let election = Election::new(Owner::new(owner()));

    // Nothing submitted yet
    assert_eq!(election.current_leader(), Candidate::Nobody);
    assert!(!election.election_ended());

    assert_eq!(
        election.submit_state_result(&addr1(), state("California", 1000, 900, 32)),
        Err(ElectionError::Unauthorized)
    );
    assert_eq!(
        election.submit_state_result(&owner(), state("California", 1000, 900, 0)),
        Err(ElectionError::InvalidSeatCount)
    );
    assert_eq!(
        election.submit_state_result(&owner(), state("California", 300, 300, 100)),
        Err(ElectionError::TiedResult)
    );

    election
        .submit_state_result(&owner(), state("California", 1000, 900, 32))
        .unwrap();
    assert_eq!(election.current_leader(), Candidate::CandidateA);

    assert!(matches!(
        election.submit_state_result(&owner(), state("California", 1000, 900, 32)),
        Err(ElectionError::DuplicateState(_))
    ));

    election
        .submit_state_result(&owner(), state("Ohio", 800, 1200, 33))
        .unwrap();
    let standings = election.standings();
    assert_eq!((standings.seats_a, standings.seats_b), (32, 33));
    assert_eq!(election.current_leader(), Candidate::CandidateB);

    assert_eq!(
        election.end_election(&addr1()),
        Err(ElectionError::Unauthorized)
    );

    election.end_election(&owner()).unwrap();
    assert_eq!(election.current_leader(), Candidate::CandidateB);
    assert!(election.election_ended());

    assert_eq!(
        election.submit_state_result(&owner(), state("Ohio", 800, 1200, 33)),
        Err(ElectionError::ElectionClosed)
    );
    assert_eq!(
        election.end_election(&owner()),
        Err(ElectionError::ElectionClosed)
    );
}

#[test]
fn zero_seat_tie_reports_seat_count() {
    let election = Election::new(Owner::new(owner()));
    assert_eq!(
        election.submit_state_result(&owner(), state("Texas", 300, 300, 0)),
        Err(ElectionError::InvalidSeatCount)
    );
}

#[test]
fn access_control_can_be_any_predicate() {
    let election = Election::new(|caller: &Caller| caller.as_str().starts_with("admin-"));

    election
        .submit_state_result(&Caller::new("admin-1"), state("Ohio", 1, 2, 3))
        .unwrap();
    assert_eq!(
        election.end_election(&Caller::new("guest")),
        Err(ElectionError::Unauthorized)
    );
    election.end_election(&Caller::new("admin-2")).unwrap();
}
