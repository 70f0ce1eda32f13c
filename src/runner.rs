//! The benchmark runner and its measurement lifecycle.

use crate::config::RunnerConfig;
use crate::error::BenchError;
use crate::reporter::Reporter;
use crate::result::RunSummary;
use std::time::Instant;

/// Fixed-iteration benchmark runner.
///
/// Drives the full measurement lifecycle: construction emits a configuration
/// banner, [`run`](BenchRunner::run) executes the work unit the configured
/// number of times between two timestamp captures, and completion emits the
/// timing summary. Statistics stay queryable on the runner afterwards.
///
/// The reporter is borrowed, not owned; it must outlive the runner and its
/// teardown is the caller's responsibility.
///
/// # Example
///
/// ```rust,no_run
/// use relbench::{BenchRunner, ConsoleReporter};
///
/// let mut reporter = ConsoleReporter::new();
/// let mut runner = BenchRunner::new(1000, Some("string concat"), &mut reporter)?;
/// runner.run(|| {
///     let s = String::from("a") + "b";
///     std::hint::black_box(&s);
/// })?;
///
/// let avg = runner.average_execution_time_ms()?;
/// # Ok::<(), relbench::BenchError>(())
/// ```
pub struct BenchRunner<'r> {
    iterations: u64,
    name: Option<String>,
    config: RunnerConfig,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    reporter: &'r mut dyn Reporter,
}

impl std::fmt::Debug for BenchRunner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchRunner")
            .field("iterations", &self.iterations)
            .field("name", &self.name)
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .finish_non_exhaustive()
    }
}

impl<'r> BenchRunner<'r> {
    /// Create a runner with the default config.
    ///
    /// Validates the iteration count, then emits the configuration banner.
    /// Fails with [`BenchError::InvalidConfiguration`] before emitting any
    /// output if `iterations` is below 1.
    pub fn new(
        iterations: u64,
        name: Option<&str>,
        reporter: &'r mut dyn Reporter,
    ) -> Result<Self, BenchError> {
        Self::with_config(iterations, name, RunnerConfig::default(), reporter)
    }

    /// Create a runner with an explicit config.
    pub fn with_config(
        iterations: u64,
        name: Option<&str>,
        config: RunnerConfig,
        reporter: &'r mut dyn Reporter,
    ) -> Result<Self, BenchError> {
        if iterations < 1 {
            return Err(BenchError::InvalidConfiguration(iterations));
        }

        let mut runner = Self {
            iterations,
            name: name.map(String::from),
            config,
            started_at: None,
            finished_at: None,
            reporter,
        };
        runner.report_banner()?;
        Ok(runner)
    }

    /// The configured iteration count.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The run's label, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Execute the work unit `iterations` times and report the summary.
    ///
    /// Iterations run strictly sequentially with no per-iteration error
    /// isolation; a panicking work unit unwinds through this call and leaves
    /// the end timestamp unset, so statistics remain unavailable.
    ///
    /// Not idempotent: invoking it again re-runs and overwrites both
    /// timestamps. Callers should treat a runner as single-use.
    pub fn run<F>(&mut self, mut work: F) -> Result<(), BenchError>
    where
        F: FnMut(),
    {
        self.try_run(|| {
            work();
            Ok(())
        })
    }

    /// Execute a fallible work unit `iterations` times.
    ///
    /// A work-unit error propagates immediately as
    /// [`BenchError::WorkUnit`]; the run is abandoned and no summary is
    /// printed.
    pub fn try_run<F>(&mut self, mut work: F) -> Result<(), BenchError>
    where
        F: FnMut() -> anyhow::Result<()>,
    {
        self.reporter.info("Starting benchmark...")?;

        // The timestamps bound exactly the iteration loop, nothing else.
        self.finished_at = None;
        self.started_at = Some(Instant::now());
        for i in 0..self.iterations {
            work().map_err(|source| BenchError::WorkUnit {
                iteration: i + 1,
                iterations: self.iterations,
                source,
            })?;
        }
        self.finished_at = Some(Instant::now());

        self.reporter.success("Benchmark complete.")?;
        self.report_summary()
    }

    /// Total wall-clock time in milliseconds, at the configured precision.
    ///
    /// Fails with [`BenchError::IncompleteRun`] before the run completes.
    pub fn total_execution_time_ms(&self) -> Result<f64, BenchError> {
        self.total_execution_time_ms_with_precision(self.config.total_precision)
    }

    /// Total wall-clock time in milliseconds, rounded to `precision` decimals.
    pub fn total_execution_time_ms_with_precision(
        &self,
        precision: u32,
    ) -> Result<f64, BenchError> {
        Ok(round_to(self.total_ms_unrounded()?, precision))
    }

    /// Average time per iteration in milliseconds, at the configured precision.
    ///
    /// Fails with [`BenchError::IncompleteRun`] before the run completes.
    pub fn average_execution_time_ms(&self) -> Result<f64, BenchError> {
        self.average_execution_time_ms_with_precision(self.config.average_precision)
    }

    /// Average time per iteration in milliseconds, rounded to `precision`
    /// decimals.
    ///
    /// Divides the full-precision total, never the already-rounded one, so
    /// rounding error does not compound.
    pub fn average_execution_time_ms_with_precision(
        &self,
        precision: u32,
    ) -> Result<f64, BenchError> {
        let total = self.total_ms_unrounded()?;
        Ok(round_to(total / self.iterations as f64, precision))
    }

    /// Build the completed run's statistics.
    pub fn summary(&self) -> Result<RunSummary, BenchError> {
        Ok(RunSummary {
            name: self.name.clone(),
            iterations: self.iterations,
            total_ms: self.total_execution_time_ms()?,
            average_ms: self.average_execution_time_ms()?,
        })
    }

    fn total_ms_unrounded(&self) -> Result<f64, BenchError> {
        match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => Ok((finished - started).as_secs_f64() * 1000.0),
            _ => Err(BenchError::IncompleteRun),
        }
    }

    fn report_banner(&mut self) -> Result<(), BenchError> {
        let rule = "=".repeat(self.config.banner_width);
        self.reporter.comment(&rule)?;
        self.reporter.info(&format!(
            "{} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))?;
        self.reporter
            .debug(&format!("Started at {} (unix ms)", epoch_millis()))?;
        self.reporter
            .line(&format!("Iterations: {}", self.iterations))?;
        self.reporter
            .line(&format!("Name: {}", self.name.as_deref().unwrap_or("[not set]")))?;
        self.reporter.comment(&rule)?;
        Ok(())
    }

    fn report_summary(&mut self) -> Result<(), BenchError> {
        let total = self.total_execution_time_ms()?;
        let average = self.average_execution_time_ms()?;

        let rule = "-".repeat(self.config.banner_width);
        self.reporter.comment(&rule)?;
        self.reporter.line(&format!(
            "Total execution time:   {:.*} ms",
            self.config.total_precision as usize,
            total
        ))?;
        self.reporter.line(&format!(
            "Average iteration time: {:.*} ms",
            self.config.average_precision as usize,
            average
        ))?;
        self.reporter
            .line(&format!("Iterations:             {}", self.iterations))?;
        self.reporter.comment(&rule)?;
        self.reporter.newline(1)?;
        Ok(())
    }

    #[cfg(test)]
    fn force_elapsed(&mut self, elapsed: std::time::Duration) {
        let now = Instant::now();
        self.started_at = Some(now);
        self.finished_at = Some(now + elapsed);
    }
}

/// Round half away from zero at `precision` decimals.
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

fn epoch_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
