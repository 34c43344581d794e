use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use radixft::{
    convolve, dct2, transform_with_opts_and_plan, ConvolutionMethod, ConvolutionMode,
    DctDerivation, Direction, Options, Planner, Radix, Variant,
};
use rand::{distributions::Standard, thread_rng, Rng};
use utilities::rustfft::FftPlanner;

const LENGTHS: &[usize] = &[6, 8, 10, 12, 14, 16, 18, 20];

fn generate_complex_numbers(n: usize) -> Vec<Complex64> {
    let samples: Vec<f64> = thread_rng().sample_iter(Standard).take(2 * n).collect();
    samples
        .chunks_exact(2)
        .map(|c| Complex64::new(c[0], c[1]))
        .collect()
}

fn generate_real_numbers(n: usize) -> Vec<f64> {
    thread_rng().sample_iter(Standard).take(n).collect()
}

fn benchmark_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));
        let options = Options::guess_options(len);

        for radix in [Radix::Two, Radix::Four] {
            let planner = Planner::new(len, radix, Direction::Forward).unwrap();
            for variant in [Variant::Dit, Variant::Dif] {
                let id = format!("radixft radix-{} {variant:?}", radix.value());
                group.bench_function(BenchmarkId::new(id, len), |b| {
                    b.iter_batched(
                        || generate_complex_numbers(len),
                        |mut signal| {
                            transform_with_opts_and_plan(&mut signal, variant, &options, &planner)
                                .unwrap();
                        },
                        BatchSize::SmallInput,
                    );
                });
            }
        }

        let id = "RustFFT FFT Forward";
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(len);

        group.bench_function(BenchmarkId::new(id, len), |b| {
            b.iter_batched(
                || generate_complex_numbers(len),
                |mut signal| {
                    fft.process(&mut signal);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse f64");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));
        let options = Options::guess_options(len);

        let planner = Planner::new(len, Radix::Four, Direction::Inverse).unwrap();
        group.bench_function(BenchmarkId::new("radixft radix-4 Dit", len), |b| {
            b.iter_batched(
                || generate_complex_numbers(len),
                |mut signal| {
                    transform_with_opts_and_plan(&mut signal, Variant::Dit, &options, &planner)
                        .unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT-II");

    for len in [64, 1024, 16384] {
        group.throughput(Throughput::Elements(len as u64));
        for derivation in [
            DctDerivation::MirrorPad,
            DctDerivation::ZeroPad,
            DctDerivation::Reorder,
        ] {
            group.bench_function(BenchmarkId::new(format!("{derivation:?}"), len), |b| {
                b.iter_batched(
                    || generate_real_numbers(len),
                    |x| dct2(&x, derivation).unwrap(),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn benchmark_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convolution");

    for (n, m) in [(256, 16), (4096, 64), (16384, 1024)] {
        for method in [ConvolutionMethod::Direct, ConvolutionMethod::Fft] {
            let id = format!("{method:?} {n}x{m}");
            group.bench_function(id, |b| {
                b.iter_batched(
                    || (generate_real_numbers(n), generate_real_numbers(m)),
                    |(signal, filter)| {
                        convolve(&signal, &filter, ConvolutionMode::Same, method).unwrap()
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_forward,
    benchmark_inverse,
    benchmark_dct,
    benchmark_convolution
);
criterion_main!(benches);
