use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dp_tables::{problems::cut::CutProblem, TableEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cuts(rng: &mut StdRng, length: usize, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.gen_range(1..length)).collect()
}

fn bench_cut_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_interval_dp");
    let length = 1_000_000;
    for &count in &[16usize, 64, 256] {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let cuts = random_cuts(&mut rng, length, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &cuts, |b, cuts| {
            b.iter(|| {
                let problem = CutProblem::new(length, cuts).expect("cuts within range");
                let (cost, plan) = TableEngine::new(problem).run();
                criterion::black_box((cost, plan.len()));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cut_spans);
criterion_main!(benches);
