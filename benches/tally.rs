use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use seat_tally::{Caller, Election, Owner, StateResult};

fn filled_election(states: usize) -> Election<Owner> {
    let owner = Caller::new("owner");
    let election = Election::new(Owner::new(owner.clone()));
    for i in 0..states {
        let (a, b) = if i % 2 == 0 { (10, 5) } else { (5, 10) };
        let result = StateResult::new(format!("state-{}", i), a, b, (i % 50 + 1) as u32).unwrap();
        election.submit_state_result(&owner, result).unwrap();
    }
    election
}

fn bench_submissions(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_state_result");

    for count in [50, 500, 5000] {
        group.bench_with_input(BenchmarkId::new("states", count), &count, |b, &count| {
            b.iter(|| black_box(filled_election(count)));
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let election = filled_election(5000);

    c.bench_function("current_leader", |b| {
        b.iter(|| black_box(election.current_leader()))
    });
    c.bench_function("standings", |b| b.iter(|| black_box(election.standings())));
}

criterion_group!(benches, bench_submissions, bench_queries);
criterion_main!(benches);
