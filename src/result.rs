//! Benchmark result types.

use serde::{Deserialize, Serialize};

/// Statistics of a completed benchmark run.
///
/// Produced once the runner reaches its completed state; the values are
/// already rounded at the configured precisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Optional human-readable label of the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of times the work unit executed.
    pub iterations: u64,
    /// Total wall-clock time across all iterations, in milliseconds.
    pub total_ms: f64,
    /// Average wall-clock time per iteration, in milliseconds.
    pub average_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_omit_name_when_not_set() {
        let summary = RunSummary {
            name: None,
            iterations: 5,
            total_ms: 1.23,
            average_ms: 0.246,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("name"));
        assert!(json.contains("\"iterations\":5"));
    }
}
