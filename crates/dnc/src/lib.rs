pub mod algorithms;
mod context;
mod error;
mod geometry;
mod metrics;

pub use algorithms::closest_pair::{
    brute_force_closest_pair, find_closest_pair, find_closest_pair_with_metrics,
};
pub use algorithms::select::{select, select_with_metrics, select_with_params};
pub use algorithms::{closest_pair, insertion_sort, merge_sort, quick_sort};
pub use context::{Recorder, SortContext};
pub use error::{Error, Result};
pub use geometry::{Point, PointPair};
pub use metrics::{Metrics, partition_balance, theoretical_depth};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    MergeSort,
    QuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
    }
}

/// Tunables shared by the array engines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EngineParams {
    /// Segments of at most this many elements are finished by insertion sort.
    pub cutoff: usize,
    /// Seed for quicksort's pivot draws; `None` seeds from the OS.
    pub pivot_seed: Option<u64>,
}

pub const DEFAULT_PARAMS: EngineParams = EngineParams {
    cutoff: 7,
    pivot_seed: None,
};

impl Default for EngineParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl EngineParams {
    pub const fn with_cutoff(self, cutoff: usize) -> Self {
        Self { cutoff, ..self }
    }

    pub const fn with_pivot_seed(self, seed: u64) -> Self {
        Self {
            pivot_seed: Some(seed),
            ..self
        }
    }
}

pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) {
    sort_i64_with_params(algo, data, None, &DEFAULT_PARAMS);
}

/// Sorts `data` and leaves the run's counters in `metrics` (reset first).
pub fn sort_i64_with_metrics(algo: SortAlgorithm, data: &mut [i64], metrics: &mut Metrics) {
    sort_i64_with_params(algo, data, Some(metrics), &DEFAULT_PARAMS);
}

pub fn sort_i64_with_params(
    algo: SortAlgorithm,
    data: &mut [i64],
    metrics: Option<&mut Metrics>,
    params: &EngineParams,
) {
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort::sort_with_params(data, metrics, params),
        SortAlgorithm::MergeSort => merge_sort::sort_with_params(data, metrics, params),
        SortAlgorithm::QuickSort => quick_sort::sort_with_params(data, metrics, params),
    }
}
