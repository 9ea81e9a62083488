use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::context::SortContext;
use crate::metrics::Metrics;
use crate::{DEFAULT_PARAMS, EngineParams};

use super::{insertion_sort, run_instrumented};

/// Which side of a Lomuto partition elements equal to the pivot end up on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PartitionRule {
    /// `x <= pivot` moves left (quicksort).
    LessEq,
    /// `x < pivot` moves left (selection).
    Less,
}

pub fn sort(data: &mut [i64]) {
    sort_with_params(data, None, &DEFAULT_PARAMS);
}

pub fn sort_with_metrics(data: &mut [i64], metrics: &mut Metrics) {
    sort_with_params(data, Some(metrics), &DEFAULT_PARAMS);
}

pub fn sort_with_params(data: &mut [i64], metrics: Option<&mut Metrics>, params: &EngineParams) {
    match metrics {
        Some(metrics) => run_instrumented(metrics, "quick_sort", data.len(), |m| {
            run(data, Some(m), params)
        }),
        None => run(data, None, params),
    }
}

fn run(data: &mut [i64], metrics: Option<&mut Metrics>, params: &EngineParams) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut rng = pivot_rng(params);
    let mut ctx = SortContext::with_cutoff(data, metrics, params.cutoff);
    quick_sort(&mut ctx, &mut rng, 0, len - 1);
}

fn pivot_rng(params: &EngineParams) -> StdRng {
    match params.pivot_seed {
        Some(seed) => {
            trace!("quick_sort: pivot seed {seed:#x}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Sorts `[left, right]`. Only the smaller side of each split is handled by a
/// recursive call, the larger one by the next loop iteration, so the stack
/// never holds more than `log2 n` frames whatever the pivots turn out to be.
fn quick_sort(ctx: &mut SortContext<'_>, rng: &mut StdRng, mut left: usize, mut right: usize) {
    ctx.enter_recursion();
    while left < right {
        if ctx.should_use_cutoff(left, right) {
            insertion_sort::sort_range(ctx, left, right);
            break;
        }

        let pivot_index = rng.random_range(left..=right);
        let p = partition(ctx, left, right, pivot_index, PartitionRule::LessEq);

        let left_size = p - left;
        let right_size = right - p;
        if left_size < right_size {
            if left_size > 1 {
                quick_sort(ctx, rng, left, p - 1);
            }
            left = p + 1;
        } else {
            if right_size > 1 {
                quick_sort(ctx, rng, p + 1, right);
            }
            // left_size >= right_size and left < right imply p > left.
            right = p - 1;
        }
    }
    ctx.exit_recursion();
}

/// Lomuto partition of `[left, right]` around `data[pivot_index]`.
///
/// Returns the pivot's final index `p`: everything in `[left, p)` satisfies
/// `rule` against the pivot, everything in `(p, right]` does not.
pub(crate) fn partition(
    ctx: &mut SortContext<'_>,
    left: usize,
    right: usize,
    pivot_index: usize,
    rule: PartitionRule,
) -> usize {
    if pivot_index != right {
        ctx.swap(pivot_index, right);
    }
    let pivot = ctx.read(right);

    let mut store = left;
    for j in left..right {
        let value = ctx.read(j);
        let goes_left = match rule {
            PartitionRule::LessEq => ctx.less_eq(value, pivot),
            PartitionRule::Less => ctx.less(value, pivot),
        };
        if goes_left {
            if store != j {
                ctx.swap(store, j);
            }
            store += 1;
        }
    }

    if store != right {
        ctx.swap(store, right);
    }
    ctx.record_partition(store - left, right - store);
    store
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn seeded(seed: u64) -> EngineParams {
        DEFAULT_PARAMS.with_pivot_seed(seed)
    }

    fn quick_depth_bound(n: usize) -> usize {
        let log = (n as f64).log2();
        (2.0 * log) as usize + 3
    }

    #[test]
    fn partition_places_pivot() {
        let mut data = vec![5, 9, 1, 7, 3, 8, 2];
        let mut metrics = Metrics::new();
        let p = {
            let mut ctx = SortContext::new(&mut data, Some(&mut metrics));
            partition(&mut ctx, 0, 6, 0, PartitionRule::LessEq)
        };
        assert_eq!(data[p], 5);
        assert!(data[..p].iter().all(|&x| x <= 5));
        assert!(data[p + 1..].iter().all(|&x| x > 5));
        assert_eq!(metrics.partition_calls(), 1);
        assert_eq!(metrics.total_comparisons(), 6);
    }

    #[test]
    fn partition_rules_differ_on_ties() {
        let mut data = vec![4, 4, 4, 4];
        let p = {
            let mut ctx = SortContext::new(&mut data, None);
            partition(&mut ctx, 0, 3, 3, PartitionRule::LessEq)
        };
        assert_eq!(p, 3);

        let p = {
            let mut ctx = SortContext::new(&mut data, None);
            partition(&mut ctx, 0, 3, 3, PartitionRule::Less)
        };
        assert_eq!(p, 0);
    }

    #[test]
    fn sorts_fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x9017_2026);
        for &size in &[2_usize, 3, 7, 8, 31, 64, 511, 2048] {
            let data: Vec<i64> = (0..size).map(|_| rng.random::<i64>()).collect();
            let mut actual = data.clone();
            sort_with_params(&mut actual, None, &seeded(size as u64));
            let mut expected = data;
            expected.sort_unstable();
            assert_eq!(actual, expected, "size={size}");
        }
    }

    #[test]
    fn unseeded_sort_is_correct() {
        let mut data: Vec<i64> = (0..500).map(|i| (i * 7919) % 503 - 250).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn depth_stays_logarithmic_on_adversarial_orders() {
        let size = 4096_usize;
        let sorted: Vec<i64> = (0..size as i64).collect();
        let reversed: Vec<i64> = sorted.iter().rev().copied().collect();
        let organ_pipe: Vec<i64> = (0..size as i64 / 2).chain((0..size as i64 / 2).rev()).collect();
        let all_equal = vec![42_i64; 1000];

        for (name, input) in [
            ("sorted", sorted),
            ("reversed", reversed),
            ("organ_pipe", organ_pipe),
            ("all_equal", all_equal),
        ] {
            for seed in 0..4_u64 {
                let mut data = input.clone();
                let mut metrics = Metrics::new();
                sort_with_params(&mut data, Some(&mut metrics), &seeded(seed));
                assert!(data.windows(2).all(|w| w[0] <= w[1]), "{name}");
                assert!(
                    metrics.max_recursion_depth() <= quick_depth_bound(input.len()),
                    "{name} seed={seed} depth={}",
                    metrics.max_recursion_depth()
                );
                assert_eq!(metrics.current_depth(), 0);
            }
        }
    }

    #[test]
    fn depth_bound_holds_without_cutoff() {
        let mut rng = StdRng::seed_from_u64(0xDEE9_2026);
        let size = 10_000_usize;
        let mut data: Vec<i64> = (0..size).map(|_| rng.random_range(-50..50)).collect();
        let mut metrics = Metrics::new();
        sort_with_params(&mut data, Some(&mut metrics), &seeded(7).with_cutoff(0));
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
        assert!(metrics.max_recursion_depth() <= quick_depth_bound(size));
    }

    #[test]
    fn random_input_partitions_are_balanced() {
        let mut rng = StdRng::seed_from_u64(0xBA1A_2026);
        let mut data: Vec<i64> = (0..10_000).map(|_| rng.random::<i64>()).collect();
        let mut metrics = Metrics::new();
        sort_with_params(&mut data, Some(&mut metrics), &seeded(11));
        assert!(metrics.partition_calls() > 0);
        let avg = metrics.average_partition_balance();
        assert!(avg < 75.0, "average balance {avg}");
        assert!(metrics.best_partition() <= avg);
        assert!(avg <= metrics.worst_partition());
        assert!(metrics.total_swaps() > 0);
    }
}
