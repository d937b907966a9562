//! Steps for planning and running sample fixtures.

use cucumber::{given, then, when};

use crate::world::{ExpansionWorld, SampleFixture};

#[given("the calculator fixture")]
fn calculator(world: &mut ExpansionWorld) { world.select(SampleFixture::Calculator); }

#[given("a fixture whose test always fails")]
fn always_fails(world: &mut ExpansionWorld) { world.select(SampleFixture::AlwaysFails); }

#[given("a positional fixture over custom scenarios")]
fn positional_over_custom(world: &mut ExpansionWorld) {
    world.select(SampleFixture::PositionalOverCustom);
}

#[given("the hook journaling fixture")]
fn journaling(world: &mut ExpansionWorld) { world.select(SampleFixture::Journaling); }

#[given("a fixture without a scenario supplier")]
fn without_supplier(world: &mut ExpansionWorld) { world.select(SampleFixture::WithoutSupplier); }

#[when("the suite is planned")]
fn plan(world: &mut ExpansionWorld) { world.plan(); }

#[when("the suite is run")]
fn run(world: &mut ExpansionWorld) { world.run(); }

#[then(expr = "{int} tests are planned")]
fn planned_count(world: &mut ExpansionWorld, count: usize) {
    let (planned, _) = world.planned().as_ref().expect("suite planned");
    assert_eq!(*planned, count);
}

#[then(expr = "the groups are labelled {string}")]
fn group_labels(world: &mut ExpansionWorld, labels: String) {
    let (_, groups) = world.planned().as_ref().expect("suite planned");
    assert_eq!(groups.join(" "), labels);
}

#[then(expr = "planning fails with {string}")]
fn planning_fails(world: &mut ExpansionWorld, message: String) {
    let err = world.planned().as_ref().expect_err("planning fails");
    assert_eq!(*err, message);
}

#[then(expr = "{int} tests ran and {int} failed")]
fn run_counts(world: &mut ExpansionWorld, ran: usize, failed: usize) {
    assert_eq!(world.report().run_count(), ran);
    assert_eq!(world.report().failure_count(), failed);
}

#[then(expr = "the first failure header is {string}")]
fn first_failure_header(world: &mut ExpansionWorld, header: String) {
    let (id, _) = world.report().failures().next().expect("a failure");
    assert_eq!(id.header(), header);
}

#[then(expr = "every failure message contains {string}")]
fn failure_messages(world: &mut ExpansionWorld, fragment: String) {
    let mut failures = world.report().failures().peekable();
    assert!(failures.peek().is_some(), "no failures recorded");
    for (id, failure) in failures {
        assert!(failure.message().contains(&fragment), "{id}: {failure}");
    }
}

#[then(expr = "the journal reads {string}")]
fn journal_reads(world: &mut ExpansionWorld, expected: String) {
    assert_eq!(world.journal(), expected);
}

#[then(expr = "the listener saw {int} groups")]
fn listener_groups(world: &mut ExpansionWorld, groups: usize) {
    let started = world
        .events()
        .iter()
        .filter(|e| e.starts_with("group_started "))
        .count();
    assert_eq!(started, groups);
}
