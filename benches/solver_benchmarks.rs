use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use regina::{
    board::Board,
    problem::Problem,
    solver::{
        heuristics::{
            value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic},
            variable::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic},
        },
        search::BacktrackingSearch,
    },
};

fn conflict_count_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let board = Board::random(32, &mut rng);
    c.bench_function("conflicts/n=32", |b| {
        b.iter(|| black_box(&board).conflicts())
    });
}

fn exhaustive_search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_search");
    for n in [6usize, 8] {
        let problem = Problem::n_queens(n).unwrap();

        group.bench_with_input(BenchmarkId::new("baseline", n), &problem, |b, problem| {
            b.iter(|| {
                BacktrackingSearch::new(
                    Box::new(SelectFirstHeuristic),
                    Box::new(IdentityValueHeuristic),
                )
                .solve(problem)
            })
        });

        group.bench_with_input(
            BenchmarkId::new("mrv_lcv_ac3", n),
            &problem,
            |b, problem| {
                b.iter(|| {
                    BacktrackingSearch::new(
                        Box::new(MinimumRemainingValuesHeuristic),
                        Box::new(LeastConstrainingValueHeuristic),
                    )
                    .with_propagation()
                    .solve(problem)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, conflict_count_benchmark, exhaustive_search_benchmark);
criterion_main!(benches);
