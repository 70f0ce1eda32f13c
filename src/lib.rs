//! # relbench
//!
//! A minimal fixed-iteration benchmark runner for comparing alternative
//! implementations of a routine.
//!
//! Unlike Criterion (which uses statistical sampling), this crate runs a
//! work unit a fixed number of times and reports total and average
//! wall-clock time. Harness overhead is constant across all measured
//! variants, so it cancels out of relative comparisons.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! // One-shot: 100 iterations, summary printed to stdout.
//! let summary = relbench::bench(|| {
//!     let v: Vec<u64> = (0..1000).collect();
//!     std::hint::black_box(&v);
//! })?;
//!
//! println!("{} ms total", summary.total_ms);
//! # Ok::<(), relbench::BenchError>(())
//! ```
//!
//! For control over the reporter and precision, drive the runner directly:
//!
//! ```rust,no_run
//! use relbench::{BenchRunner, ConsoleReporter, RunnerConfig};
//!
//! let mut reporter = ConsoleReporter::new();
//! let config = RunnerConfig::new().average_precision(6);
//! let mut runner = BenchRunner::with_config(500, Some("parse"), config, &mut reporter)?;
//! runner.run(|| { /* work under measurement */ })?;
//! # Ok::<(), relbench::BenchError>(())
//! ```

mod config;
mod error;
mod reporter;
mod result;
mod runner;

pub use config::RunnerConfig;
pub use error::BenchError;
pub use reporter::{ConsoleReporter, Reporter};
pub use result::RunSummary;
pub use runner::BenchRunner;

/// Iteration count used by [`bench`] when none is given.
pub const DEFAULT_ITERATIONS: u64 = 100;

/// One-shot benchmark with [`DEFAULT_ITERATIONS`] iterations and no name.
///
/// Constructs a runner over a stdout console reporter, runs it to
/// completion, and returns the statistics.
pub fn bench<F>(work: F) -> Result<RunSummary, BenchError>
where
    F: FnMut(),
{
    bench_with(work, DEFAULT_ITERATIONS, None)
}

/// One-shot benchmark with an explicit iteration count and optional name.
pub fn bench_with<F>(work: F, iterations: u64, name: Option<&str>) -> Result<RunSummary, BenchError>
where
    F: FnMut(),
{
    let mut reporter = ConsoleReporter::new();
    let mut runner = BenchRunner::new(iterations, name, &mut reporter)?;
    runner.run(work)?;
    runner.summary()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_one_hundred_iterations() {
        let mut count = 0u64;
        let summary = bench(|| count += 1).unwrap();

        assert_eq!(count, 100);
        assert_eq!(summary.iterations, 100);
        assert!(summary.name.is_none());
    }

    #[test]
    fn should_run_named_one_shot() {
        let mut count = 0u64;
        let summary = bench_with(|| count += 1, 5, Some("addition")).unwrap();

        assert_eq!(count, 5);
        assert_eq!(summary.name.as_deref(), Some("addition"));
        assert!(summary.total_ms >= 0.0);
    }
}
