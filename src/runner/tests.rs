//! Unit tests for planning and executing scenario suites.

use std::{cell::RefCell, rc::Rc};

use proptest::prelude::*;
use rstest::{fixture, rstest};

use super::*;
use crate::{
    FailurePhase,
    Scenario,
    SilentListener,
    TestOutcome,
    binding::CUSTOM_SCENARIO_CONSTRUCTOR_MESSAGE,
    naming::TestId,
    params,
};

#[derive(Debug)]
struct Pair {
    left: i64,
    right: i64,
}

fn three_scenarios() -> ScenarioList {
    ScenarioList::from_array([
        ("zero", params![0, 0]),
        ("one", params![1, 1]),
        ("two", params![2, 3]),
    ])
    .unwrap_or_default()
}

fn no_scenarios() -> ScenarioList { ScenarioList::empty() }

fn single_scenario() -> ScenarioList {
    ScenarioList::from_array([("only", params![])]).unwrap_or_default()
}

fn pair_fixture() -> FixtureDescriptor<Pair> {
    FixtureDescriptor::builder("Pairs")
        .scenarios(three_scenarios)
        .constructor(Constructor::positional(|(left, right): (i64, i64)| Pair { left, right }))
        .test("equal", |p: &mut Pair| {
            if p.left == p.right {
                Ok(())
            } else {
                Err(format!("{} != {}", p.left, p.right).into())
            }
        })
        .test("non_negative", |p: &mut Pair| {
            assert!(p.left >= 0);
            Ok(())
        })
        .build()
}

type Journal = Rc<RefCell<Vec<String>>>;

#[fixture]
fn journal() -> Journal { Rc::default() }

fn entries(journal: &Journal) -> Vec<String> { journal.borrow().clone() }

#[test]
fn plan_is_known_before_running() {
    let runner = ScenarioRunner::new(pair_fixture()).expect("valid fixture");
    assert_eq!(runner.state(), SuiteState::ChildrenBuilt);
    assert_eq!(runner.test_count(), 6);
    let groups: Vec<_> = runner.plan().groups().iter().map(ScenarioGroup::label).collect();
    assert_eq!(groups, ["[zero]", "[one]", "[two]"]);
    let labels: Vec<_> = runner.plan().test_ids().map(TestId::label).collect();
    assert_eq!(
        labels,
        [
            "equal[zero]",
            "non_negative[zero]",
            "equal[one]",
            "non_negative[one]",
            "equal[two]",
            "non_negative[two]",
        ]
    );
}

#[test]
fn plan_renders_as_a_tree() {
    let runner = ScenarioRunner::new(pair_fixture()).expect("valid fixture");
    let rendered = runner.plan().to_string();
    assert!(rendered.starts_with("Pairs\n  [zero]\n    equal[zero]\n    non_negative[zero]\n"));
    assert_eq!(rendered.lines().count(), 10);
}

#[test]
fn run_records_every_expanded_test() {
    let report = ScenarioRunner::new(pair_fixture())
        .expect("valid fixture")
        .run(SilentListener);
    assert_eq!(report.run_count(), 6);
    assert_eq!(report.failure_count(), 1);
    let outcome = report.outcome("equal[two]").expect("test ran");
    assert_eq!(outcome.failures()[0].phase(), FailurePhase::Test);
    assert_eq!(outcome.failures()[0].message(), "2 != 3");
}

#[test]
fn empty_scenario_list_plans_nothing() {
    let descriptor = FixtureDescriptor::builder("Empty")
        .scenarios(no_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .test("never", |_: &mut ()| Ok(()))
        .build();
    let runner = ScenarioRunner::new(descriptor).expect("valid fixture");
    assert_eq!(runner.test_count(), 0);
    let report = runner.run(SilentListener);
    assert_eq!(report.run_count(), 0);
    assert!(report.is_success());
}

#[test]
fn fixture_without_tests_yields_empty_groups() {
    let descriptor = FixtureDescriptor::builder("NoTests")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .build();
    let runner = ScenarioRunner::new(descriptor).expect("valid fixture");
    assert_eq!(runner.plan().groups().len(), 3);
    assert!(runner.plan().groups().iter().all(|g| g.tests().is_empty()));
}

#[rstest]
#[case("[one]", &["equal[one]", "non_negative[one]"])]
#[case("equal", &["equal[zero]", "equal[one]", "equal[two]"])]
#[case("missing", &[])]
fn filter_limits_the_plan(#[case] pattern: &str, #[case] expected: &[&str]) {
    let config = RunConfig::default().filter(pattern);
    let runner = ScenarioRunner::with_config(pair_fixture(), config).expect("valid fixture");
    let labels: Vec<_> = runner.plan().test_ids().map(TestId::label).collect();
    assert_eq!(labels, expected);
    assert!(runner.plan().groups().iter().all(|g| !g.tests().is_empty()));
}

#[rstest]
fn each_test_gets_a_fresh_fixture(journal: Journal) {
    let log = journal.clone();
    let descriptor = FixtureDescriptor::builder("Fresh")
        .scenarios(three_scenarios)
        .constructor(Constructor::positional(move |(left, _): (i64, i64)| {
            log.borrow_mut().push(format!("new {left}"));
            Vec::<i64>::new()
        }))
        .test("push", |v: &mut Vec<i64>| {
            v.push(1);
            assert_eq!(v.len(), 1);
            Ok(())
        })
        .test("push_again", |v: &mut Vec<i64>| {
            v.push(1);
            assert_eq!(v.len(), 1);
            Ok(())
        })
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert!(report.is_success());
    assert_eq!(
        entries(&journal),
        ["new 0", "new 0", "new 1", "new 1", "new 2", "new 2"]
    );
}

#[rstest]
fn hooks_wrap_each_test_in_order(journal: Journal) {
    let (a, b, c, d, e) = (
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
        journal.clone(),
    );
    let descriptor = FixtureDescriptor::builder("Hooks")
        .scenarios(single_scenario)
        .constructor(Constructor::no_args(|| ()))
        .before_all(move || {
            a.borrow_mut().push("before_all".into());
            Ok(())
        })
        .before_each(move |_: &mut ()| {
            b.borrow_mut().push("before_each".into());
            Ok(())
        })
        .test("body", move |_: &mut ()| {
            c.borrow_mut().push("body".into());
            Ok(())
        })
        .after_each(move |_: &mut ()| {
            d.borrow_mut().push("after_each".into());
            Ok(())
        })
        .after_all(move || {
            e.borrow_mut().push("after_all".into());
            Ok(())
        })
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert!(report.is_success());
    assert_eq!(
        entries(&journal),
        ["before_all", "before_each", "body", "after_each", "after_all"]
    );
}

#[rstest]
fn failing_before_each_skips_body_but_runs_after_each(journal: Journal) {
    let (body_log, after_log) = (journal.clone(), journal.clone());
    let descriptor = FixtureDescriptor::builder("BeforeEachFails")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .before_each(|_: &mut ()| Err("not ready".into()))
        .before_each(|_: &mut ()| panic!("second before_each must not run"))
        .test("body", move |_: &mut ()| {
            body_log.borrow_mut().push("body".into());
            Ok(())
        })
        .after_each(move |_: &mut ()| {
            after_log.borrow_mut().push("after_each".into());
            Ok(())
        })
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert_eq!(report.failure_count(), 3);
    assert_eq!(entries(&journal), ["after_each"; 3]);
    let failures: Vec<_> = report.failures().map(|(_, f)| f.phase()).collect();
    assert_eq!(failures, [FailurePhase::BeforeEach; 3]);
}

#[rstest]
fn failing_before_all_skips_every_group(journal: Journal) {
    let (body_log, after_log) = (journal.clone(), journal.clone());
    let descriptor = FixtureDescriptor::builder("BeforeAllFails")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .before_all(|| Err("no database".into()))
        .test("body", move |_: &mut ()| {
            body_log.borrow_mut().push("body".into());
            Ok(())
        })
        .after_all(move || {
            after_log.borrow_mut().push("after_all".into());
            Ok(())
        })
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert_eq!(report.run_count(), 0);
    assert_eq!(entries(&journal), ["after_all"]);
    assert_eq!(report.suite_failures().len(), 1);
    assert_eq!(report.suite_failures()[0].phase(), FailurePhase::BeforeAll);
    assert!(!report.is_success());
}

#[test]
fn after_each_failures_are_all_recorded() {
    let descriptor = FixtureDescriptor::builder("Cleanup")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .test("body", |_: &mut ()| Err("body".into()))
        .after_each(|_: &mut ()| Err("first".into()))
        .after_each(|_: &mut ()| panic!("second"))
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    let outcome = report.outcome("body[zero]").expect("test ran");
    let rendered: Vec<_> = outcome.failures().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["test: body", "after_each: first", "after_each: second"]);
    assert!(outcome.failures()[2].panicked());
}

#[test]
fn construction_failure_fails_only_that_test() {
    let descriptor = FixtureDescriptor::builder("Strict")
        .scenarios(three_scenarios)
        .constructor(Constructor::positional(|(left, right): (i64, i64)| {
            assert_ne!(left, 1, "left may not be one");
            Pair { left, right }
        }))
        .test("body", |_: &mut Pair| Ok(()))
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert_eq!(report.run_count(), 3);
    let outcome = report.outcome("body[one]").expect("test ran");
    assert_eq!(outcome.failures()[0].phase(), FailurePhase::Construct);
    assert!(outcome.failures()[0].panicked());
    assert_eq!(report.outcome("body[two]"), Some(&TestOutcome::Passed));
}

#[derive(Debug)]
struct Named(&'static str);

impl crate::CustomScenario for Named {
    fn name(&self) -> &str { self.0 }
}

fn custom_scenarios() -> ScenarioList {
    ScenarioList::from_collection([Named("a"), Named("b")]).expect("scenarios are named")
}

#[test]
fn positional_constructor_rejects_custom_scenarios() {
    let descriptor = FixtureDescriptor::builder("Mismatch")
        .scenarios(custom_scenarios)
        .constructor(Constructor::positional(|(name,): (String,)| name))
        .test("body", |_: &mut String| Ok(()))
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert_eq!(report.failure_count(), 2);
    for (_, failure) in report.failures() {
        assert_eq!(failure.phase(), FailurePhase::Construct);
        assert_eq!(failure.message(), CUSTOM_SCENARIO_CONSTRUCTOR_MESSAGE);
    }
}

#[test]
fn scenario_constructor_receives_the_listed_instance() {
    let descriptor = FixtureDescriptor::builder("Custom")
        .scenarios(custom_scenarios)
        .constructor(Constructor::scenario(|s: Scenario| s))
        .test_with_context("body", |s: &mut Scenario, ctx| {
            assert_eq!(ctx.id().scenario(), s.name());
            assert!(s.downcast_ref::<Named>().is_some());
            Ok(())
        })
        .build();
    let report = ScenarioRunner::new(descriptor)
        .expect("valid fixture")
        .run(SilentListener);
    assert!(report.is_success());
}

#[rstest]
#[case::none(0)]
#[case::two(2)]
fn constructor_count_must_be_one(#[case] count: usize) {
    let mut builder = FixtureDescriptor::builder("Ctor").scenarios(three_scenarios);
    for _ in 0..count {
        builder = builder.constructor(Constructor::no_args(|| ()));
    }
    let err = ScenarioRunner::new(builder.build()).expect_err("invalid fixture");
    assert!(matches!(err, SuiteError::ConstructorCount { found } if found == count));
    assert_eq!(err.to_string(), "Test class should have exactly one public constructor");
}

#[rstest]
#[case::none(0)]
#[case::two(2)]
fn supplier_count_must_be_one(#[case] count: usize) {
    let mut builder = FixtureDescriptor::builder("Supplier").constructor(Constructor::no_args(|| ()));
    for _ in 0..count {
        builder = builder.scenarios(three_scenarios);
    }
    let err = ScenarioRunner::new(builder.build()).expect_err("invalid fixture");
    assert!(matches!(err, SuiteError::ScenarioSupplier { found } if found == count));
    assert_eq!(err.to_string(), "No public static scenario-supplier method on class.");
}

fn failing_supplier() -> Result<ScenarioList, std::io::Error> {
    Err(std::io::Error::other("fixtures unavailable"))
}

fn panicking_supplier() -> ScenarioList { panic!("supplier exploded") }

#[test]
fn supplier_error_is_suite_fatal() {
    let descriptor = FixtureDescriptor::builder("Failing")
        .scenarios(failing_supplier)
        .constructor(Constructor::no_args(|| ()))
        .build();
    let err = ScenarioRunner::new(descriptor).expect_err("supplier fails");
    assert!(matches!(err, SuiteError::SupplierFailed(_)));
    assert_eq!(err.to_string(), "scenario supplier failed: fixtures unavailable");
}

#[test]
fn supplier_panic_is_suite_fatal() {
    let descriptor = FixtureDescriptor::builder("Panicking")
        .scenarios(panicking_supplier)
        .constructor(Constructor::no_args(|| ()))
        .build();
    let err = ScenarioRunner::new(descriptor).expect_err("supplier panics");
    assert!(matches!(err, SuiteError::SupplierPanicked(ref msg) if msg == "supplier exploded"));
}

#[test]
fn duplicate_test_names_are_rejected() {
    let descriptor = FixtureDescriptor::builder("Dupes")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .test("same", |_: &mut ()| Ok(()))
        .test("same", |_: &mut ()| Ok(()))
        .build();
    let err = ScenarioRunner::new(descriptor).expect_err("duplicate names");
    assert!(matches!(err, SuiteError::DuplicateTestMethod(ref name) if name == "same"));
}

#[test]
#[should_panic(expected = "uncaught")]
fn disabled_panic_catching_propagates() {
    let descriptor = FixtureDescriptor::builder("Uncaught")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .test("body", |_: &mut ()| panic!("uncaught"))
        .build();
    let config = RunConfig::default().catch_panics(false);
    let _ = ScenarioRunner::with_config(descriptor, config)
        .expect("valid fixture")
        .run(SilentListener);
}

#[rstest]
fn uncaught_panic_still_runs_after_all(journal: Journal) {
    let teardown = Rc::clone(&journal);
    let descriptor = FixtureDescriptor::builder("Uncaught")
        .scenarios(three_scenarios)
        .constructor(Constructor::no_args(|| ()))
        .test("body", |_: &mut ()| panic!("uncaught"))
        .after_all(move || {
            teardown.borrow_mut().push("after_all".to_owned());
            Ok(())
        })
        .build();
    let config = RunConfig::default().catch_panics(false);
    let runner = ScenarioRunner::with_config(descriptor, config).expect("valid fixture");

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        runner.run(SilentListener)
    }));
    let payload = result.expect_err("panic propagates");
    assert_eq!(crate::panic::format_panic(payload).to_string(), "uncaught");
    assert_eq!(entries(&journal), ["after_all"]);
}

#[test]
fn suite_state_display_names() {
    assert_eq!(SuiteState::Uninitialized.to_string(), "uninitialized");
    assert_eq!(SuiteState::Completed.to_string(), "completed");
}

#[test]
#[tracing_test::traced_test]
fn state_transitions_are_traced() {
    let report = ScenarioRunner::new(pair_fixture())
        .expect("valid fixture")
        .run(SilentListener);
    assert_eq!(report.run_count(), 6);
    assert!(logs_contain("to=scenarios_resolved"));
    assert!(logs_contain("to=children_built"));
    assert!(logs_contain("to=executing"));
    assert!(logs_contain("to=completed"));
    logs_assert(|lines: &[&str]| {
        lines
            .iter()
            .find(|line| {
                line.contains("to=completed") && line.contains("scenario_suite{fixture=Pairs}")
            })
            .map(|_| ())
            .ok_or_else(|| "completion not traced inside the suite span".to_owned())
    });
}

proptest! {
    #[test]
    fn plan_holds_every_method_for_every_scenario(methods in 0usize..6, scenarios in 0usize..12) {
        let mut builder = FixtureDescriptor::<()>::builder("Grid");
        for m in 0..methods {
            builder = builder.test(format!("m{m}"), |_: &mut ()| Ok(()));
        }
        let list = ScenarioList::from_scenarios(
            (0..scenarios).map(|n| Scenario::parameterized(format!("s{n}"), params![])),
        )
        .expect("scenarios are named");
        let plan = expand(&builder.build(), list, &RunConfig::default());

        prop_assert_eq!(plan.test_count(), methods * scenarios);
        prop_assert_eq!(plan.groups().len(), scenarios);
        let labels: Vec<_> = plan.test_ids().map(TestId::label).collect();
        let expected: Vec<_> = (0..scenarios)
            .flat_map(|n| (0..methods).map(move |m| format!("m{m}[s{n}]")))
            .collect();
        prop_assert_eq!(labels, expected);
    }
}
