use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    ALL_DISTRIBUTIONS, Distribution, apply_runtime_for_size, apply_small_runtime_config,
    default_rng, generate_i64, random_points,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dnc::{
    DEFAULT_PARAMS, Metrics, SortAlgorithm, algorithm_name, all_algorithms, find_closest_pair,
    select, sort_i64_with_params,
};

const SORT_SIZES: [usize; 3] = [1024, 16384, 131072];
const SELECT_SIZES: [usize; 3] = [1024, 16384, 131072];
const POINT_SIZES: [usize; 3] = [256, 4096, 65536];
const POINT_SPAN: f64 = 1_000_000.0;

fn bench_sort(c: &mut Criterion) {
    let params = DEFAULT_PARAMS.with_pivot_seed(0xBE4C_2026);

    for &dist in &ALL_DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &algo in all_algorithms() {
            if !is_benchmark_target(algo) {
                continue;
            }
            for &size in &SORT_SIZES {
                apply_runtime_for_size(&mut group, size);
                let base = generate_i64(&mut default_rng(), dist, size);

                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            sort_i64_with_params(algo, &mut data, None, &params);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });

                // Instrumented run: shows the cost of counting, not the sort.
                group.bench_function(
                    BenchmarkId::new(format!("{}_metrics", algorithm_name(algo)), size),
                    |bencher| {
                        bencher.iter_custom(|iters| {
                            let mut total = Duration::ZERO;
                            let mut metrics = Metrics::new();
                            for _ in 0..iters {
                                let mut data = base.clone();
                                let start = Instant::now();
                                sort_i64_with_params(algo, &mut data, Some(&mut metrics), &params);
                                total += start.elapsed();
                                black_box(&data);
                            }
                            total
                        });
                    },
                );
            }
        }

        for &size in &SORT_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_i64(&mut default_rng(), dist, size);
            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn bench_select(c: &mut Criterion) {
    for dist in [Distribution::RandomUniform, Distribution::Sorted, Distribution::FewUnique] {
        let mut group = c.benchmark_group(format!("select/{}", dist.label()));
        for &size in &SELECT_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_i64(&mut default_rng(), dist, size);
            let k = size / 2;

            group.bench_function(BenchmarkId::new("median_of_medians", size), |bencher| {
                bencher.iter(|| select(black_box(&base), k));
            });

            group.bench_function(BenchmarkId::new("std_select_nth_unstable", size), |bencher| {
                bencher.iter(|| {
                    let mut data = base.clone();
                    let (_, nth, _) = data.select_nth_unstable(k - 1);
                    black_box(*nth)
                });
            });
        }
        group.finish();
    }
}

fn bench_closest_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair/random_uniform");
    for &size in &POINT_SIZES {
        apply_small_runtime_config(&mut group);
        let points = random_points(&mut default_rng(), size, POINT_SPAN);
        group.bench_function(BenchmarkId::new("divide_and_conquer", size), |bencher| {
            bencher.iter(|| find_closest_pair(black_box(&points)));
        });
    }
    group.finish();
}

#[inline]
fn is_benchmark_target(algo: SortAlgorithm) -> bool {
    !matches!(algo, SortAlgorithm::InsertionSort)
}

criterion_group!(benches, bench_sort, bench_select, bench_closest_pair);
criterion_main!(benches);
