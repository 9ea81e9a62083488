use crate::context::SortContext;
use crate::metrics::Metrics;
use crate::{DEFAULT_PARAMS, EngineParams};

use super::run_instrumented;

pub fn sort(data: &mut [i64]) {
    sort_with_params(data, None, &DEFAULT_PARAMS);
}

pub fn sort_with_metrics(data: &mut [i64], metrics: &mut Metrics) {
    sort_with_params(data, Some(metrics), &DEFAULT_PARAMS);
}

pub fn sort_with_params(data: &mut [i64], metrics: Option<&mut Metrics>, params: &EngineParams) {
    match metrics {
        Some(metrics) => run_instrumented(metrics, "insertion_sort", data.len(), |m| {
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
    sort_range(&mut ctx, 0, len - 1);
}

/// Sorts `[left, right]` in place by shifting larger elements one slot right
/// until the held key fits. Stable; linear on already sorted input.
pub fn sort_range(ctx: &mut SortContext<'_>, left: usize, right: usize) {
    if right <= left {
        return;
    }

    for i in (left + 1)..=right {
        let key = ctx.read(i);
        let mut j = i;
        while j > left {
            let prev = ctx.read(j - 1);
            if ctx.less_eq(prev, key) {
                break;
            }
            ctx.write(j, prev);
            j -= 1;
        }
        ctx.write(j, key);
    }
}
