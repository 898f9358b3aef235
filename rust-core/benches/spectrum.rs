use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use signal_helpers::spectrum::{compute_spectrum, compute_spectrum_windowed, WindowType};
use std::f64::consts::PI;

fn bench_compute_spectrum(c: &mut Criterion) {
    let signal: Vec<f64> = (0..4096)
        .map(|n| (2.0 * PI * 1000.0 * n as f64 / 48000.0).sin())
        .collect();

    let mut group = c.benchmark_group("compute_spectrum");
    for window_length in [1024, 4096, 8192] {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_length),
            &window_length,
            |b, &n| b.iter(|| compute_spectrum(black_box(&signal), n).unwrap()),
        );
    }
    group.finish();

    c.bench_function("compute_spectrum_windowed/hann_4096", |b| {
        b.iter(|| compute_spectrum_windowed(black_box(&signal), 4096, WindowType::Hann).unwrap())
    });
}

criterion_group!(benches, bench_compute_spectrum);
criterion_main!(benches);
