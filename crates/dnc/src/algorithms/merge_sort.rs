use crate::context::SortContext;
use crate::metrics::Metrics;
use crate::{DEFAULT_PARAMS, EngineParams};

use super::{insertion_sort, run_instrumented};

pub fn sort(data: &mut [i64]) {
    sort_with_params(data, None, &DEFAULT_PARAMS);
}

pub fn sort_with_metrics(data: &mut [i64], metrics: &mut Metrics) {
    sort_with_params(data, Some(metrics), &DEFAULT_PARAMS);
}

pub fn sort_with_params(data: &mut [i64], metrics: Option<&mut Metrics>, params: &EngineParams) {
    match metrics {
        Some(metrics) => run_instrumented(metrics, "merge_sort", data.len(), |m| {
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

    let mut ctx = SortContext::with_cutoff(data, metrics, params.cutoff);
    ctx.ensure_scratch();
    merge_sort(&mut ctx, 0, len - 1);
}

fn merge_sort(ctx: &mut SortContext<'_>, left: usize, right: usize) {
    ctx.enter_recursion();
    if left < right {
        if ctx.should_use_cutoff(left, right) {
            insertion_sort::sort_range(ctx, left, right);
        } else {
            let middle = left + (right - left) / 2;
            merge_sort(ctx, left, middle);
            merge_sort(ctx, middle + 1, right);
            merge(ctx, left, middle, right);
        }
    }
    ctx.exit_recursion();
}

/// Merges the sorted runs `[left, middle]` and `[middle + 1, right]`.
///
/// Only the left run is copied out (to scratch offset `0`); the right run is
/// consumed in place. The write cursor can never overtake the right-run
/// cursor, and once scratch is drained the right remainder already sits in
/// its final slots.
fn merge(ctx: &mut SortContext<'_>, left: usize, middle: usize, right: usize) {
    let left_len = middle - left + 1;
    debug_assert!(left_len <= ctx.scratch_len());

    for offset in 0..left_len {
        ctx.stash(offset, left + offset);
    }

    let mut i = 0;
    let mut j = middle + 1;
    let mut k = left;
    while i < left_len && j <= right {
        let a = ctx.peek_scratch(i);
        let b = ctx.read(j);
        // Ties take the left run: keeps equal keys in input order.
        if ctx.less_eq(a, b) {
            ctx.unstash(i, k);
            i += 1;
        } else {
            ctx.write(k, b);
            j += 1;
        }
        k += 1;
    }

    while i < left_len {
        ctx.unstash(i, k);
        i += 1;
        k += 1;
    }
}
