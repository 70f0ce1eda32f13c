//! Configuration for the benchmark runner.

/// Configuration for the benchmark runner.
///
/// Only cosmetic/numeric knobs live here; the iteration count and name are
/// per-run and belong to [`BenchRunner`](crate::BenchRunner) itself.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Decimal precision for the total execution time (ms).
    pub total_precision: u32,
    /// Decimal precision for the average iteration time (ms).
    pub average_precision: u32,
    /// Width of the banner and separator rules, in characters.
    pub banner_width: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            total_precision: 2,
            average_precision: 8,
            banner_width: 40,
        }
    }
}

impl RunnerConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config from environment variables.
    ///
    /// Supported variables:
    /// - `BENCH_TOTAL_PRECISION`: decimals for total time (default: 2)
    /// - `BENCH_AVERAGE_PRECISION`: decimals for average time (default: 8)
    /// - `BENCH_BANNER_WIDTH`: banner rule width (default: 40)
    ///
    /// Malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("BENCH_TOTAL_PRECISION") {
            if let Ok(n) = v.parse() {
                cfg.total_precision = n;
            }
        }
        if let Ok(v) = std::env::var("BENCH_AVERAGE_PRECISION") {
            if let Ok(n) = v.parse() {
                cfg.average_precision = n;
            }
        }
        if let Ok(v) = std::env::var("BENCH_BANNER_WIDTH") {
            if let Ok(n) = v.parse() {
                cfg.banner_width = n;
            }
        }

        cfg
    }

    /// Set the decimal precision for the total execution time.
    pub fn total_precision(mut self, p: u32) -> Self {
        self.total_precision = p;
        self
    }

    /// Set the decimal precision for the average iteration time.
    pub fn average_precision(mut self, p: u32) -> Self {
        self.average_precision = p;
        self
    }

    /// Set the banner rule width.
    pub fn banner_width(mut self, w: usize) -> Self {
        self.banner_width = w;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_env_not_set() {
        let cfg = RunnerConfig::default();
        assert_eq!(cfg.total_precision, 2);
        assert_eq!(cfg.average_precision, 8);
        assert_eq!(cfg.banner_width, 40);
    }

    #[test]
    fn should_build_config_with_builder() {
        let cfg = RunnerConfig::new()
            .total_precision(3)
            .average_precision(6)
            .banner_width(60);

        assert_eq!(cfg.total_precision, 3);
        assert_eq!(cfg.average_precision, 6);
        assert_eq!(cfg.banner_width, 60);
    }
}
