//! Shared criterion setup for the confz benches

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Criterion tuned for store operations
///
/// Most store calls finish in well under a microsecond, so a short warm-up
/// and measurement window already collect millions of iterations. The larger
/// sample count and noise threshold keep nanosecond jitter from being
/// reported as a regression.
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
        .sample_size(200)
        .noise_threshold(0.03)
        .significance_level(0.01)
        .with_profiler(PProfProfiler::new(1000, Output::Flamegraph(None)))
}

/// Criterion for benches that touch the filesystem
///
/// File loads are dominated by IO, so fewer samples over a longer window.
pub fn io_criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(50)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}
