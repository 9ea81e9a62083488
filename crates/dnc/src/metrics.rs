use std::time::{Duration, Instant};

/// Counters collected during a single top-level run.
///
/// Call [`Metrics::reset`] before each independent run. The `*_with_metrics`
/// entry points do this themselves and bracket the work with
/// [`Metrics::start_timing`] / [`Metrics::end_timing`].
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    current_depth: usize,
    max_depth: usize,
    comparisons: u64,
    accesses: u64,
    swaps: u64,
    partition_calls: u64,
    balance_sum: f64,
    best_balance: f64,
    worst_balance: f64,
    started: Option<Instant>,
    finished: Option<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn start_timing(&mut self) {
        self.started = Some(Instant::now());
        self.finished = None;
    }

    pub fn end_timing(&mut self) {
        self.finished = Some(Instant::now());
    }

    #[inline]
    pub fn enter_recursion(&mut self) {
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            self.max_depth = self.current_depth;
        }
    }

    #[inline]
    pub fn exit_recursion(&mut self) {
        debug_assert!(self.current_depth > 0, "unbalanced exit_recursion");
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn record_access(&mut self) {
        self.accesses += 1;
    }

    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    pub fn record_partition(&mut self, left_size: usize, right_size: usize) {
        let balance = partition_balance(left_size, right_size);
        if self.partition_calls == 0 {
            self.best_balance = balance;
            self.worst_balance = balance;
        } else {
            self.best_balance = self.best_balance.min(balance);
            self.worst_balance = self.worst_balance.max(balance);
        }
        self.balance_sum += balance;
        self.partition_calls += 1;
    }

    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    pub fn max_recursion_depth(&self) -> usize {
        self.max_depth
    }

    pub fn total_comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn total_accesses(&self) -> u64 {
        self.accesses
    }

    pub fn total_swaps(&self) -> u64 {
        self.swaps
    }

    pub fn partition_calls(&self) -> u64 {
        self.partition_calls
    }

    pub fn best_partition(&self) -> f64 {
        self.best_balance
    }

    pub fn worst_partition(&self) -> f64 {
        self.worst_balance
    }

    pub fn average_partition_balance(&self) -> f64 {
        if self.partition_calls == 0 {
            0.0
        } else {
            self.balance_sum / self.partition_calls as f64
        }
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started, self.finished) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }

    /// Whether the maximum depth stays within `ceil(log2 n) + slack`.
    pub fn depth_within(&self, n: usize, slack: usize) -> bool {
        self.max_depth <= theoretical_depth(n) + slack
    }
}

#[inline]
pub fn theoretical_depth(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Deviation of the smaller side from an ideal half split: `0` is perfect,
/// `100` means everything landed on one side.
pub fn partition_balance(left_size: usize, right_size: usize) -> f64 {
    let total = left_size + right_size;
    if total == 0 {
        return 0.0;
    }
    let ideal = total as f64 / 2.0;
    let smaller = left_size.min(right_size) as f64;
    (ideal - smaller) / ideal * 100.0
}
