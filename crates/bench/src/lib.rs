use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use dnc::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the preset by input size.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4096 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input orderings that stress different worst cases of the array engines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    Sorted,
    Reversed,
    NearlySorted1pctSwaps,
    OrganPipe,
    FewUnique,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 6] = [
    Distribution::RandomUniform,
    Distribution::Sorted,
    Distribution::Reversed,
    Distribution::NearlySorted1pctSwaps,
    Distribution::OrganPipe,
    Distribution::FewUnique,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::OrganPipe => "organ_pipe",
            Self::FewUnique => "few_unique",
        }
    }
}

pub fn generate_i64<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, size: usize) -> Vec<i64> {
    let n = size as i64;
    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<i64>()).collect(),
        Distribution::Sorted => (0..n).collect(),
        Distribution::Reversed => (0..n).rev().collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i64> = (0..n).collect();
            if size >= 2 {
                for _ in 0..(size / 100).max(1) {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::OrganPipe => (0..n / 2).chain((0..n - n / 2).rev()).collect(),
        Distribution::FewUnique => (0..size).map(|_| rng.random_range(0..10_i64)).collect(),
    }
}

/// `size` points spread uniformly over `[-span, span)²`.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, size: usize, span: f64) -> Vec<Point> {
    (0..size)
        .map(|_| Point::new(rng.random_range(-span..span), rng.random_range(-span..span)))
        .collect()
}
