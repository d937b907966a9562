//! Callbacks through which a host observes a run.
//!
//! [`RunListener`] is the result sink the runner reports to while it
//! executes. Every callback has an empty default so hosts implement only the
//! events they care about.

use crate::{
    naming::TestId,
    report::{RunReport, TestFailure, TestOutcome},
    runner::{ScenarioGroup, SuitePlan},
};

/// Observer of a scenario run.
///
/// ```rust
/// use scenario_runner::{RunListener, TestId, TestOutcome};
///
/// struct Dots;
///
/// impl RunListener for Dots {
///     fn test_finished(&mut self, _id: &TestId, outcome: &TestOutcome) {
///         print!("{}", if outcome.is_passed() { "." } else { "F" });
///     }
/// }
/// ```
pub trait RunListener {
    /// Called once before any hook runs.
    fn suite_started(&mut self, _plan: &SuitePlan) {}

    /// Called before the first test of a scenario group.
    fn group_started(&mut self, _group: &ScenarioGroup) {}

    /// Called before an expanded test is constructed.
    fn test_started(&mut self, _id: &TestId) {}

    /// Called after an expanded test's after hooks have run.
    fn test_finished(&mut self, _id: &TestId, _outcome: &TestOutcome) {}

    /// Called after the last test of a scenario group.
    fn group_finished(&mut self, _group: &ScenarioGroup) {}

    /// Called when a suite-level hook fails.
    fn suite_failed(&mut self, _failure: &TestFailure) {}

    /// Called once after the after-all hooks.
    fn suite_finished(&mut self, _report: &RunReport) {}
}

/// Listener that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentListener;

impl RunListener for SilentListener {}

impl<L: RunListener + ?Sized> RunListener for &mut L {
    fn suite_started(&mut self, plan: &SuitePlan) { (**self).suite_started(plan); }

    fn group_started(&mut self, group: &ScenarioGroup) { (**self).group_started(group); }

    fn test_started(&mut self, id: &TestId) { (**self).test_started(id); }

    fn test_finished(&mut self, id: &TestId, outcome: &TestOutcome) {
        (**self).test_finished(id, outcome);
    }

    fn group_finished(&mut self, group: &ScenarioGroup) { (**self).group_finished(group); }

    fn suite_failed(&mut self, failure: &TestFailure) { (**self).suite_failed(failure); }

    fn suite_finished(&mut self, report: &RunReport) { (**self).suite_finished(report); }
}
