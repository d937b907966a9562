//! Execution of a planned suite.

use log::warn;

use super::{ScenarioGroup, ScenarioRunner, SuiteState, plan::PlannedTest};
use crate::{
    binding::bind,
    fixture::{TestContext, TestResult},
    listener::RunListener,
    metrics::{self, Outcome},
    naming::TestId,
    panic::guard,
    report::{FailurePhase, RunReport, TestFailure, TestOutcome, TestReport},
};

impl<F> ScenarioRunner<F> {
    /// Execute every planned test, reporting progress to `listener`.
    ///
    /// Before-all hooks run first and stop at the first failure; when one
    /// fails no scenario group runs. After-all hooks always run. Each
    /// expanded test gets a freshly bound fixture, its before-each hooks,
    /// the body (skipped when a before-each hook failed) and every
    /// after-each hook.
    ///
    /// Panics are recorded as failures unless the [`RunConfig`] disables
    /// catching them. An uncaught panic resumes once the after-all hooks
    /// have run.
    ///
    /// [`RunConfig`]: crate::RunConfig
    pub fn run<L: RunListener>(mut self, mut listener: L) -> RunReport {
        let span = tracing::info_span!("scenario_suite", fixture = %self.plan.fixture());
        let _enter = span.enter();

        self.transition(SuiteState::Executing);
        listener.suite_started(&self.plan);
        let mut report = RunReport::new(self.plan.fixture());

        let mut ready = true;
        for hook in &self.descriptor.before_all {
            if let Some(failure) = self.attempt(FailurePhase::BeforeAll, None, hook) {
                self.suite_failure(failure, &mut listener, &mut report);
                ready = false;
                break;
            }
        }

        let escaped = if ready {
            guard(true, || {
                for group in self.plan.groups() {
                    self.run_group(group, &mut listener, &mut report);
                }
            })
            .err()
        } else {
            None
        };

        for hook in &self.descriptor.after_all {
            if let Some(failure) = self.attempt(FailurePhase::AfterAll, None, hook) {
                self.suite_failure(failure, &mut listener, &mut report);
            }
        }

        if let Some(panic) = escaped {
            panic.resume();
        }

        self.transition(SuiteState::Completed);
        listener.suite_finished(&report);
        report
    }

    fn run_group<L: RunListener>(
        &self,
        group: &ScenarioGroup,
        listener: &mut L,
        report: &mut RunReport,
    ) {
        let span = tracing::info_span!("scenario_group", label = %group.label());
        let _enter = span.enter();
        listener.group_started(group);
        for test in group.tests() {
            tracing::debug!(test = %test.id(), "expanded test started");
            listener.test_started(test.id());
            let outcome = self.run_test(group, test);
            for failure in outcome.failures() {
                warn!(
                    "expanded test failed: test={}, phase={}, message={}",
                    test.id().header(),
                    failure.phase(),
                    failure.message()
                );
            }
            metrics::inc_tests(if outcome.is_passed() {
                Outcome::Passed
            } else {
                Outcome::Failed
            });
            listener.test_finished(test.id(), &outcome);
            report.record(TestReport {
                id: test.id().clone(),
                outcome,
            });
        }
        listener.group_finished(group);
    }

    fn run_test(&self, group: &ScenarioGroup, test: &PlannedTest) -> TestOutcome {
        let id = test.id();
        let catch = self.config.catches_panics();
        let mut fixture = match guard(catch, || bind(&self.constructor, group.scenario())) {
            Ok(Ok(fixture)) => fixture,
            Ok(Err(e)) => {
                return TestOutcome::from_failures(vec![TestFailure::error(
                    FailurePhase::Construct,
                    e.to_string(),
                )]);
            }
            Err(panic) => {
                self.log_panic(FailurePhase::Construct, Some(id), &panic.to_string());
                return TestOutcome::from_failures(vec![TestFailure::panic(
                    FailurePhase::Construct,
                    panic.to_string(),
                )]);
            }
        };

        let mut failures = Vec::new();
        for hook in &self.descriptor.before_each {
            let failure = self.attempt(FailurePhase::BeforeEach, Some(id), || hook(&mut fixture));
            if let Some(failure) = failure {
                failures.push(failure);
                break;
            }
        }

        if failures.is_empty() {
            let body = &self.descriptor.tests[test.method].body;
            let context = TestContext::new(id);
            failures.extend(self.attempt(FailurePhase::Test, Some(id), || {
                body(&mut fixture, &context)
            }));
        }

        for hook in &self.descriptor.after_each {
            failures.extend(self.attempt(FailurePhase::AfterEach, Some(id), || {
                hook(&mut fixture)
            }));
        }
        TestOutcome::from_failures(failures)
    }

    /// Run one hook or body, converting an error or caught panic into a
    /// failure.
    fn attempt(
        &self,
        phase: FailurePhase,
        id: Option<&TestId>,
        f: impl FnOnce() -> TestResult,
    ) -> Option<TestFailure> {
        match guard(self.config.catches_panics(), f) {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(TestFailure::error(phase, e.to_string())),
            Err(panic) => {
                let message = panic.to_string();
                self.log_panic(phase, id, &message);
                Some(TestFailure::panic(phase, message))
            }
        }
    }

    fn log_panic(&self, phase: FailurePhase, id: Option<&TestId>, message: &str) {
        match id {
            Some(id) => {
                tracing::warn!(panic = %message, %phase, test = %id, "fixture code panicked");
            }
            None => tracing::warn!(
                panic = %message,
                %phase,
                fixture = %self.plan.fixture(),
                "fixture code panicked"
            ),
        }
    }

    fn suite_failure<L: RunListener>(
        &self,
        failure: TestFailure,
        listener: &mut L,
        report: &mut RunReport,
    ) {
        tracing::error!(
            fixture = %self.plan.fixture(),
            phase = %failure.phase(),
            message = %failure.message(),
            "suite hook failed"
        );
        metrics::inc_suite_failures();
        listener.suite_failed(&failure);
        report.record_suite_failure(failure);
    }
}
