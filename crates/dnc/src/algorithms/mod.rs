pub mod closest_pair;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod select;

use log::debug;

use crate::metrics::Metrics;

/// Resets `metrics`, times `run` and logs a one-line summary of the counters.
pub(crate) fn run_instrumented<R>(
    metrics: &mut Metrics,
    name: &str,
    n: usize,
    run: impl FnOnce(&mut Metrics) -> R,
) -> R {
    metrics.reset();
    metrics.start_timing();
    let out = run(metrics);
    metrics.end_timing();

    debug!(
        "{name}: n={n} depth={} comparisons={} accesses={} swaps={} partitions={} time={:.3}ms",
        metrics.max_recursion_depth(),
        metrics.total_comparisons(),
        metrics.total_accesses(),
        metrics.total_swaps(),
        metrics.partition_calls(),
        metrics.execution_time_ms(),
    );
    out
}
