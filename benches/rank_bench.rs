use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lehmer::{Ranker, Strategy, MAX_RANK_LEN};
use rand::seq::SliceRandom;

fn shuffled(n: usize) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    p.shuffle(&mut rand::rng());
    p
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let p = shuffled(MAX_RANK_LEN);

    for strategy in [Strategy::Implicit, Strategy::Fenwick] {
        let ranker = Ranker::new().with_strategy(strategy);
        group.bench_function(format!("{strategy:?}"), |b| {
            b.iter(|| black_box(ranker.rank(black_box(&p))))
        });
    }
    group.finish();
}

fn bench_lehmer_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("lehmer_code");

    for n in [64, 1_000, 10_000] {
        let p = shuffled(n);
        for strategy in [Strategy::Implicit, Strategy::Fenwick] {
            let ranker = Ranker::new().with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(format!("{strategy:?}"), n), &p, |b, p| {
                b.iter(|| black_box(ranker.lehmer_code(p)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_rank, bench_lehmer_code);
criterion_main!(benches);
