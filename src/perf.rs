//! Performance monitoring utilities.
//!
//! Hit-testing, edge distortion and rendering run on every pointer move or
//! frame. They are wrapped in `profile_scope!` so slow calls show up in the
//! logs without a profiler attached.
//!
//! Enable detailed timing with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! topodraw = { features = ["profiling"] }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Budget for a single interactive operation (one 60 FPS frame)
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for operation statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// ```ignore
/// fn hit_test() {
///     profile_scope!("hit_test");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Rolling timing statistics for one named operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Aggregates operation timings reported by the editor.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    operation_stats: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operation_stats.entry(name).or_default().record(elapsed_ms);
    }

    /// Run `f`, recording how long it took under `name`.
    pub fn time<R>(&mut self, name: &'static str, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record_operation(name, start.elapsed().as_secs_f64() * 1000.0);
        result
    }

    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operation_stats.get(name)
    }

    /// Warn about operations whose average exceeds the frame budget.
    pub fn log_summary_if_slow(&self) {
        for (name, stats) in &self.operation_stats {
            if stats.average() > TARGET_FRAME_MS {
                warn!(
                    operation = *name,
                    avg_ms = format!("{:.2}", stats.average()),
                    max_ms = format!("{:.2}", stats.max()),
                    count = stats.count(),
                    "Operation below target"
                );
            }
        }
    }

    pub fn reset(&mut self) {
        self.operation_stats.clear();
    }
}

/// A scoped timer that logs its duration on drop when over threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a 1ms threshold, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}
