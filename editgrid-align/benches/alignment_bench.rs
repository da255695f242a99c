use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use editgrid_align::presets::classic_model;
use editgrid_align::{global_alignment, local_alignment, AlignmentEngine};
use editgrid_test::fixtures::{mutated_dna, random_sequence};

fn bench_full_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_matrix");

    for length in &[50, 100, 500, 1000] {
        let (first, second) = mutated_dna(*length, 0.05, 42);

        group.throughput(Throughput::Elements((*length * *length) as u64));

        group.bench_with_input(
            BenchmarkId::new("classic", length),
            &(first.clone(), second.clone()),
            |b, (first, second)| {
                b.iter(|| {
                    let mut engine = AlignmentEngine::new(
                        black_box(first.clone()),
                        black_box(second.clone()),
                        classic_model(),
                    );
                    engine.compute()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("global", length),
            &(first.clone(), second.clone()),
            |b, (first, second)| {
                b.iter(|| {
                    global_alignment(black_box(first.clone()), black_box(second.clone()), 1)
                        .compute()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("local", length),
            &(first.clone(), second.clone()),
            |b, (first, second)| {
                b.iter(|| {
                    let mut engine =
                        local_alignment(black_box(first.clone()), black_box(second.clone()), 1);
                    engine.compute();
                    engine.best_cell()
                });
            },
        );
    }

    group.finish();
}

fn bench_partial_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_queries");
    let (first, second) = mutated_dna(1000, 0.1, 7);

    for fraction in &[10, 25, 50, 100] {
        let i = first.len() * fraction / 100;
        let j = second.len() * fraction / 100;

        group.bench_with_input(
            BenchmarkId::new("compute_at", fraction),
            &(i, j),
            |b, &(i, j)| {
                b.iter(|| {
                    let mut engine =
                        AlignmentEngine::new(first.clone(), second.clone(), classic_model());
                    engine.compute_at(black_box(i), black_box(j))
                });
            },
        );
    }

    group.finish();
}

fn bench_traceback(c: &mut Criterion) {
    let (first, second) = mutated_dna(500, 0.05, 42);

    c.bench_function("traceback_500", |b| {
        let mut engine = global_alignment(first.clone(), second.clone(), 1);
        engine.compute();
        b.iter(|| engine.traceback());
    });
}

fn bench_unrelated_sequences(c: &mut Criterion) {
    let first = random_sequence(500, b"ACGT", 1);
    let second = random_sequence(500, b"ACGT", 2);

    c.bench_function("local_unrelated_500", |b| {
        b.iter(|| {
            let mut engine = local_alignment(first.clone(), second.clone(), 1);
            engine.local_traceback()
        });
    });
}

criterion_group!(
    benches,
    bench_full_matrix,
    bench_partial_queries,
    bench_traceback,
    bench_unrelated_sequences
);
criterion_main!(benches);
