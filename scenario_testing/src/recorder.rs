//! A [`RunListener`] that records every callback.

use scenario_runner::{
    RunListener,
    RunReport,
    ScenarioGroup,
    SuitePlan,
    TestFailure,
    TestId,
    TestOutcome,
};

/// Records runner callbacks as text lines and keeps each test's outcome.
///
/// Lines take the form `<event> <subject>`, for example
/// `group_started [0+0=0]` or `test_finished sum[0+0=0] failed`.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Vec<String>,
    outcomes: Vec<(TestId, TestOutcome)>,
    suite_failures: Vec<TestFailure>,
}

impl RecordingListener {
    /// Every recorded event in callback order.
    #[must_use]
    pub fn events(&self) -> &[String] { &self.events }

    /// Outcomes reported through `test_finished`.
    #[must_use]
    pub fn outcomes(&self) -> &[(TestId, TestOutcome)] { &self.outcomes }

    /// Failures reported through `suite_failed`.
    #[must_use]
    pub fn suite_failures(&self) -> &[TestFailure] { &self.suite_failures }

    /// Events whose name is `event`, without the name itself.
    #[must_use]
    pub fn subjects(&self, event: &str) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|line| line.strip_prefix(event)?.strip_prefix(' '))
            .collect()
    }
}

impl RunListener for RecordingListener {
    fn suite_started(&mut self, plan: &SuitePlan) {
        self.events.push(format!("suite_started {}", plan.fixture()));
    }

    fn group_started(&mut self, group: &ScenarioGroup) {
        self.events.push(format!("group_started {}", group.label()));
    }

    fn test_started(&mut self, id: &TestId) { self.events.push(format!("test_started {id}")); }

    fn test_finished(&mut self, id: &TestId, outcome: &TestOutcome) {
        let status = if outcome.is_passed() { "passed" } else { "failed" };
        self.events.push(format!("test_finished {id} {status}"));
        self.outcomes.push((id.clone(), outcome.clone()));
    }

    fn group_finished(&mut self, group: &ScenarioGroup) {
        self.events.push(format!("group_finished {}", group.label()));
    }

    fn suite_failed(&mut self, failure: &TestFailure) {
        self.events.push(format!("suite_failed {failure}"));
        self.suite_failures.push(failure.clone());
    }

    fn suite_finished(&mut self, report: &RunReport) {
        self.events.push(format!(
            "suite_finished {}/{}",
            report.passed_count(),
            report.run_count()
        ));
    }
}
