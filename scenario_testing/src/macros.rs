//! Assertion macros shared by test helpers and integration tests.

/// Create a [`ScenarioRunner`](scenario_runner::ScenarioRunner) and panic
/// with contextual diagnostics if the fixture is rejected.
#[macro_export]
macro_rules! runner_expect {
    ($descriptor:expr) => {{
        ::scenario_runner::ScenarioRunner::new($descriptor)
            .expect(concat!("fixture rejected at ", file!(), ":", line!()))
    }};
    ($descriptor:expr, $config:expr) => {{
        ::scenario_runner::ScenarioRunner::with_config($descriptor, $config)
            .expect(concat!("fixture rejected at ", file!(), ":", line!()))
    }};
}

/// Assert that a [`RunReport`](scenario_runner::RunReport) holds the given
/// outcome for the test labelled `label`.
#[macro_export]
macro_rules! assert_outcome {
    ($report:expr, $label:expr, passed) => {{
        let outcome = $report
            .outcome($label)
            .unwrap_or_else(|| panic!("test {} did not run", $label));
        assert!(outcome.is_passed(), "{} failed: {:?}", $label, outcome);
    }};
    ($report:expr, $label:expr, failed) => {{
        let outcome = $report
            .outcome($label)
            .unwrap_or_else(|| panic!("test {} did not run", $label));
        assert!(!outcome.is_passed(), "{} unexpectedly passed", $label);
    }};
}

pub use crate::{assert_outcome, runner_expect};
