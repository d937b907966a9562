//! Metric helpers for `scenario_runner`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers do nothing.

/// Name of the counter tracking finished expanded tests.
pub const EXPANDED_TESTS_TOTAL: &str = "scenario_expanded_tests_total";
/// Name of the counter tracking failed suite-level hooks.
pub const SUITE_FAILURES_TOTAL: &str = "scenario_suite_failures_total";

/// Result of an expanded test, used as the `outcome` label.
#[derive(Clone, Copy, Debug)]
pub enum Outcome {
    /// Every phase succeeded.
    Passed,
    /// At least one phase failed.
    Failed,
}

impl Outcome {
    #[cfg_attr(not(feature = "metrics"), allow(dead_code))]
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
        }
    }
}

/// Record a finished expanded test.
pub fn inc_tests(outcome: Outcome) {
    #[cfg(feature = "metrics")]
    metrics::counter!(EXPANDED_TESTS_TOTAL, "outcome" => outcome.as_str()).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = outcome;
}

/// Record a failed suite-level hook.
pub fn inc_suite_failures() {
    #[cfg(feature = "metrics")]
    metrics::counter!(SUITE_FAILURES_TOTAL).increment(1);
}
