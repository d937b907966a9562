//! Outcomes of expanded tests and the aggregate run report.

use std::fmt;

use serde::Serialize;

use crate::naming::TestId;

/// Where a failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePhase {
    /// A suite-level hook run before every scenario.
    BeforeAll,
    /// Binding the scenario to a fresh fixture.
    Construct,
    /// A hook run before the test body.
    BeforeEach,
    /// The test body.
    Test,
    /// A hook run after the test body.
    AfterEach,
    /// A suite-level hook run after every scenario.
    AfterAll,
}

impl FailurePhase {
    fn as_str(self) -> &'static str {
        match self {
            Self::BeforeAll => "before_all",
            Self::Construct => "construct",
            Self::BeforeEach => "before_each",
            Self::Test => "test",
            Self::AfterEach => "after_each",
            Self::AfterAll => "after_all",
        }
    }
}

impl fmt::Display for FailurePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A single recorded failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestFailure {
    phase: FailurePhase,
    message: String,
    panicked: bool,
}

impl TestFailure {
    /// A failure returned as an error.
    pub fn error(phase: FailurePhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            panicked: false,
        }
    }

    /// A failure raised by a panic.
    pub fn panic(phase: FailurePhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            panicked: true,
        }
    }

    /// Phase the failure happened in.
    #[must_use]
    pub fn phase(&self) -> FailurePhase { self.phase }

    /// Failure message.
    #[must_use]
    pub fn message(&self) -> &str { &self.message }

    /// Whether the failure was a panic.
    #[must_use]
    pub fn panicked(&self) -> bool { self.panicked }
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.phase, self.message)
    }
}

/// Outcome of one expanded test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "failures", rename_all = "snake_case")]
pub enum TestOutcome {
    /// Construction, hooks and body all succeeded.
    Passed,
    /// At least one phase failed; failures are in the order they happened.
    Failed(Vec<TestFailure>),
}

impl TestOutcome {
    /// Returns `true` for [`TestOutcome::Passed`].
    #[must_use]
    pub fn is_passed(&self) -> bool { matches!(self, Self::Passed) }

    /// Failures recorded for this test.
    #[must_use]
    pub fn failures(&self) -> &[TestFailure] {
        match self {
            Self::Passed => &[],
            Self::Failed(failures) => failures,
        }
    }

    pub(crate) fn from_failures(failures: Vec<TestFailure>) -> Self {
        if failures.is_empty() {
            Self::Passed
        } else {
            Self::Failed(failures)
        }
    }
}

/// Outcome of one expanded test together with its identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// Identity of the expanded test.
    pub id: TestId,
    /// What happened.
    pub outcome: TestOutcome,
}

/// Aggregate result of running one fixture across its scenarios.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    fixture: String,
    tests: Vec<TestReport>,
    suite_failures: Vec<TestFailure>,
}

impl RunReport {
    pub(crate) fn new(fixture: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, report: TestReport) { self.tests.push(report); }

    pub(crate) fn record_suite_failure(&mut self, failure: TestFailure) {
        self.suite_failures.push(failure);
    }

    /// Name of the fixture that was run.
    #[must_use]
    pub fn fixture(&self) -> &str { &self.fixture }

    /// Every executed test in execution order.
    #[must_use]
    pub fn tests(&self) -> &[TestReport] { &self.tests }

    /// Failures of suite-level hooks.
    #[must_use]
    pub fn suite_failures(&self) -> &[TestFailure] { &self.suite_failures }

    /// Number of tests that ran.
    #[must_use]
    pub fn run_count(&self) -> usize { self.tests.len() }

    /// Number of tests that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tests.iter().filter(|t| !t.outcome.is_passed()).count()
    }

    /// Number of tests that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize { self.run_count() - self.failure_count() }

    /// Every test failure paired with the test it belongs to.
    pub fn failures(&self) -> impl Iterator<Item = (&TestId, &TestFailure)> {
        self.tests
            .iter()
            .flat_map(|t| t.outcome.failures().iter().map(move |f| (&t.id, f)))
    }

    /// Outcome of the test with label `label`, if it ran.
    #[must_use]
    pub fn outcome(&self, label: &str) -> Option<&TestOutcome> {
        self.tests
            .iter()
            .find(|t| t.id.label() == label)
            .map(|t| &t.outcome)
    }

    /// Returns `true` when every test passed and no suite hook failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.suite_failures.is_empty() && self.failure_count() == 0
    }
}
