//! Error taxonomy for the benchmark runner.

use thiserror::Error;

/// Errors surfaced by the runner and its reporting sink.
///
/// All errors propagate synchronously to the immediate caller. Nothing is
/// retried (re-running a work unit would corrupt timing semantics) and
/// nothing is logged internally.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The iteration count was below 1 at construction.
    ///
    /// Raised before any output is emitted.
    #[error("iteration count must be at least 1, got {0}")]
    InvalidConfiguration(u64),

    /// Statistics were requested before the run completed.
    ///
    /// Signals misuse of the accessors, not a runtime fault.
    #[error("benchmark has not completed, statistics are unavailable")]
    IncompleteRun,

    /// The work unit failed partway through the run.
    ///
    /// The run is abandoned: no end timestamp is captured and no summary
    /// is printed.
    #[error("work unit failed on iteration {iteration} of {iterations}")]
    WorkUnit {
        /// 1-based iteration on which the failure occurred.
        iteration: u64,
        /// Total iterations the run was configured for.
        iterations: u64,
        #[source]
        source: anyhow::Error,
    },

    /// The reporter's output sink rejected a write.
    ///
    /// Never swallowed, since that would hide whether the report was
    /// actually delivered.
    #[error("failed to write to report sink")]
    Sink(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_failing_iteration_in_message() {
        let err = BenchError::WorkUnit {
            iteration: 3,
            iterations: 10,
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.to_string(), "work unit failed on iteration 3 of 10");
    }

    #[test]
    fn should_convert_io_errors_into_sink_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: BenchError = io.into();
        assert!(matches!(err, BenchError::Sink(_)));
    }
}
