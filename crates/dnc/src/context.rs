use crate::DEFAULT_PARAMS;
use crate::metrics::Metrics;

/// Optional handle to a [`Metrics`] recorder.
///
/// Every method is a no-op when nothing is attached, so the uninstrumented
/// path pays only for a branch on `None`.
#[derive(Debug, Default)]
pub struct Recorder<'a> {
    metrics: Option<&'a mut Metrics>,
}

impl<'a> Recorder<'a> {
    pub fn new(metrics: Option<&'a mut Metrics>) -> Self {
        Self { metrics }
    }

    pub fn detached() -> Self {
        Self { metrics: None }
    }

    /// Shorter-lived handle onto the same recorder, for nested contexts.
    pub fn reborrow(&mut self) -> Recorder<'_> {
        Recorder {
            metrics: self.metrics.as_deref_mut(),
        }
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        if let Some(m) = self.metrics.as_deref_mut() {
            m.record_comparison();
        }
    }

    #[inline]
    pub fn record_access(&mut self) {
        if let Some(m) = self.metrics.as_deref_mut() {
            m.record_access();
        }
    }

    #[inline]
    pub fn record_swap(&mut self) {
        if let Some(m) = self.metrics.as_deref_mut() {
            m.record_swap();
        }
    }

    #[inline]
    pub fn record_partition(&mut self, left_size: usize, right_size: usize) {
        if let Some(m) = self.metrics.as_deref_mut() {
            m.record_partition(left_size, right_size);
        }
    }

    #[inline]
    pub fn enter_recursion(&mut self) {
        if let Some(m) = self.metrics.as_deref_mut() {
            m.enter_recursion();
        }
    }

    #[inline]
    pub fn exit_recursion(&mut self) {
        if let Some(m) = self.metrics.as_deref_mut() {
            m.exit_recursion();
        }
    }
}

/// Working state threaded through every recursive call of the array engines.
///
/// All ranges handed to the engines are inclusive `[left, right]` indices
/// into the one buffer the context borrows. Element reads, writes and
/// comparisons go through the context so that they are counted exactly once.
#[derive(Debug)]
pub struct SortContext<'a> {
    data: &'a mut [i64],
    scratch: Vec<i64>,
    recorder: Recorder<'a>,
    cutoff: usize,
}

impl<'a> SortContext<'a> {
    pub fn new(data: &'a mut [i64], metrics: Option<&'a mut Metrics>) -> Self {
        Self::with_cutoff(data, metrics, DEFAULT_PARAMS.cutoff)
    }

    pub fn with_cutoff(data: &'a mut [i64], metrics: Option<&'a mut Metrics>, cutoff: usize) -> Self {
        Self::with_recorder(data, Recorder::new(metrics), cutoff)
    }

    pub fn with_recorder(data: &'a mut [i64], recorder: Recorder<'a>, cutoff: usize) -> Self {
        Self {
            data,
            scratch: Vec::new(),
            recorder,
            cutoff,
        }
    }

    #[inline]
    pub fn data(&self) -> &[i64] {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn recorder(&mut self) -> Recorder<'_> {
        self.recorder.reborrow()
    }

    /// Allocates the merge buffer (`ceil(n / 2)` slots) on first use. Later
    /// calls leave it untouched.
    pub fn ensure_scratch(&mut self) {
        if self.scratch.is_empty() {
            self.scratch = vec![0; self.data.len().div_ceil(2)];
        }
    }

    #[inline]
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    #[inline]
    pub fn subarray_size(&self, left: usize, right: usize) -> usize {
        right - left + 1
    }

    #[inline]
    pub fn should_use_cutoff(&self, left: usize, right: usize) -> bool {
        self.subarray_size(left, right) <= self.cutoff
    }

    #[inline]
    pub fn read(&mut self, index: usize) -> i64 {
        self.recorder.record_access();
        self.data[index]
    }

    #[inline]
    pub fn write(&mut self, index: usize, value: i64) {
        self.recorder.record_access();
        self.data[index] = value;
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        for _ in 0..4 {
            self.recorder.record_access();
        }
        self.recorder.record_swap();
        self.data.swap(a, b);
    }

    #[inline]
    pub fn less_eq(&mut self, a: i64, b: i64) -> bool {
        self.recorder.record_comparison();
        a <= b
    }

    #[inline]
    pub fn less(&mut self, a: i64, b: i64) -> bool {
        self.recorder.record_comparison();
        a < b
    }

    #[inline]
    pub fn equal(&mut self, a: i64, b: i64) -> bool {
        self.recorder.record_comparison();
        a == b
    }

    #[inline]
    pub fn stash(&mut self, offset: usize, index: usize) {
        self.recorder.record_access();
        self.scratch[offset] = self.data[index];
    }

    #[inline]
    pub fn unstash(&mut self, offset: usize, index: usize) {
        self.recorder.record_access();
        self.data[index] = self.scratch[offset];
    }

    /// Scratch is private working memory; peeking at it is not counted.
    #[inline]
    pub fn peek_scratch(&self, offset: usize) -> i64 {
        self.scratch[offset]
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.recorder.record_comparison();
    }

    #[inline]
    pub fn record_access(&mut self) {
        self.recorder.record_access();
    }

    #[inline]
    pub fn record_swap(&mut self) {
        self.recorder.record_swap();
    }

    #[inline]
    pub fn record_partition(&mut self, left_size: usize, right_size: usize) {
        self.recorder.record_partition(left_size, right_size);
    }

    #[inline]
    pub fn enter_recursion(&mut self) {
        self.recorder.enter_recursion();
    }

    #[inline]
    pub fn exit_recursion(&mut self) {
        self.recorder.exit_recursion();
    }
}
