//! Benchmarks for the comparison pipeline.
//!
//! Run with `cargo bench --bench compare`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use latency_lab::analysis::{cliffs_delta, u_test};
use latency_lab::statistics::UnitNormal;
use latency_lab::{Lab, SampleRecord};

fn synthetic_arm(n: usize, offset: f64) -> Vec<f64> {
    (0..n).map(|i| offset + (i as f64 * 7.31) % 40.0).collect()
}

fn synthetic_batch(scenarios: usize, variants: usize, reps: usize) -> Vec<SampleRecord> {
    let mut records = Vec::new();
    for s in 0..scenarios {
        let scenario = format!("scenario{s}");
        for v in 0..variants {
            let variant = if v == 0 { "B0".to_string() } else { format!("V{v}") };
            for (i, value) in synthetic_arm(reps, v as f64 * 3.0).into_iter().enumerate() {
                records.push(
                    SampleRecord::new(scenario.clone(), variant.clone(), i as u32 + 1)
                        .with_metric("latency_ms", Some(value)),
                );
            }
        }
    }
    records
}

fn bench_u_test(c: &mut Criterion) {
    let x = synthetic_arm(50, 5.0);
    let y = synthetic_arm(50, 0.0);
    let cdf = UnitNormal::new();

    c.bench_function("u_test_50x50", |b| {
        b.iter(|| u_test(black_box(&x), black_box(&y), &cdf))
    });

    c.bench_function("cliffs_delta_50x50", |b| {
        b.iter(|| cliffs_delta(black_box(&x), black_box(&y)))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let batch = synthetic_batch(4, 8, 30);
    let lab = Lab::new();

    c.bench_function("lab_run_4x8x30", |b| b.iter(|| lab.run(black_box(&batch))));
}

criterion_group!(benches, bench_u_test, bench_full_run);
criterion_main!(benches);
