use crate::context::SortContext;
use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::{DEFAULT_PARAMS, EngineParams};

use super::quick_sort::{self, PartitionRule};
use super::{insertion_sort, run_instrumented};

/// Group width used when collecting medians.
pub const GROUP_SIZE: usize = 5;

/// Returns the `k`-th smallest value of `array` (1-indexed).
///
/// Works on a private copy: `array` is never reordered. Worst-case linear
/// time thanks to the median-of-medians pivot.
pub fn select(array: &[i64], k: usize) -> Result<i64> {
    select_with_params(array, k, None, &DEFAULT_PARAMS)
}

pub fn select_with_metrics(array: &[i64], k: usize, metrics: &mut Metrics) -> Result<i64> {
    select_with_params(array, k, Some(metrics), &DEFAULT_PARAMS)
}

pub fn select_with_params(
    array: &[i64],
    k: usize,
    metrics: Option<&mut Metrics>,
    params: &EngineParams,
) -> Result<i64> {
    validate(array, k)?;

    let value = match metrics {
        Some(metrics) => run_instrumented(metrics, "select", array.len(), |m| {
            run(array, k, Some(m), params)
        }),
        None => run(array, k, None, params),
    };
    Ok(value)
}

fn validate(array: &[i64], k: usize) -> Result<()> {
    if array.is_empty() {
        return Err(Error::InvalidArgument("cannot select from an empty array"));
    }
    if k == 0 || k > array.len() {
        return Err(Error::InvalidArgument("rank must be within 1..=len"));
    }
    Ok(())
}

fn run(array: &[i64], k: usize, metrics: Option<&mut Metrics>, params: &EngineParams) -> i64 {
    let mut working = array.to_vec();
    let last = working.len() - 1;
    let mut ctx = SortContext::with_cutoff(&mut working, metrics, params.cutoff);
    select_kth(&mut ctx, 0, last, k - 1)
}

/// Value that would sit at absolute index `k` of `[left, right]` once sorted.
fn select_kth(ctx: &mut SortContext<'_>, left: usize, right: usize, k: usize) -> i64 {
    debug_assert!(left <= k && k <= right);
    ctx.enter_recursion();

    let value = if left == right {
        ctx.read(left)
    } else if ctx.should_use_cutoff(left, right) {
        insertion_sort::sort_range(ctx, left, right);
        ctx.read(k)
    } else {
        let pivot_index = median_of_medians(ctx, left, right);
        let (lo, hi) = partition_around(ctx, left, right, pivot_index);
        if k < lo {
            select_kth(ctx, left, lo - 1, k)
        } else if k > hi {
            select_kth(ctx, hi + 1, right, k)
        } else {
            ctx.read(k)
        }
    };

    ctx.exit_recursion();
    value
}

/// Index of an element of `[left, right]` holding the median of the group
/// medians.
fn median_of_medians(ctx: &mut SortContext<'_>, left: usize, right: usize) -> usize {
    let n = ctx.subarray_size(left, right);
    if n <= GROUP_SIZE {
        insertion_sort::sort_range(ctx, left, right);
        return left + (n - 1) / 2;
    }

    let groups = n.div_ceil(GROUP_SIZE);
    let mut medians = Vec::with_capacity(groups);
    for g in 0..groups {
        let group_left = left + g * GROUP_SIZE;
        let group_right = (group_left + GROUP_SIZE - 1).min(right);
        insertion_sort::sort_range(ctx, group_left, group_right);
        medians.push(ctx.read(group_left + (group_right - group_left) / 2));
    }

    let target = medians.len() / 2;
    let last = medians.len() - 1;
    let cutoff = ctx.cutoff();
    let pivot = {
        let mut child = SortContext::with_recorder(&mut medians, ctx.recorder(), cutoff);
        select_kth(&mut child, 0, last, target)
    };

    for i in left..=right {
        let value = ctx.read(i);
        if ctx.equal(value, pivot) {
            return i;
        }
    }
    // Unreachable: the pivot value was read out of this very segment.
    left
}

/// Partitions around `data[pivot_index]` and gathers every copy of the pivot
/// into one run. Returns the inclusive bounds of that run.
///
/// Pulling the equal run together keeps each round discarding a constant
/// fraction of the segment even when the input is full of duplicates.
fn partition_around(
    ctx: &mut SortContext<'_>,
    left: usize,
    right: usize,
    pivot_index: usize,
) -> (usize, usize) {
    let lo = quick_sort::partition(ctx, left, right, pivot_index, PartitionRule::Less);
    let pivot = ctx.read(lo);

    // Everything right of `lo` is >= pivot, so `<=` picks out the equal keys.
    let mut hi = lo;
    for i in (lo + 1)..=right {
        let value = ctx.read(i);
        if ctx.less_eq(value, pivot) {
            hi += 1;
            if hi != i {
                ctx.swap(hi, i);
            }
        }
    }
    (lo, hi)
}
