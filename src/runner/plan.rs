//! Static expansion of a fixture across its scenarios.

use std::fmt;

use crate::{
    config::RunConfig,
    fixture::FixtureDescriptor,
    naming::{TestId, group_label},
    scenario::Scenario,
    scenario_list::ScenarioList,
};

/// One expanded test awaiting execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedTest {
    pub(crate) method: usize,
    id: TestId,
}

impl PlannedTest {
    /// Identity of the expanded test.
    #[must_use]
    pub fn id(&self) -> &TestId { &self.id }
}

/// The child run-unit for one scenario: every planned test method bound to
/// that scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioGroup {
    label: String,
    scenario: Scenario,
    tests: Vec<PlannedTest>,
}

impl ScenarioGroup {
    /// The group label, `[scenario]`.
    #[must_use]
    pub fn label(&self) -> &str { &self.label }

    /// The scenario every test in the group is bound to.
    #[must_use]
    pub fn scenario(&self) -> &Scenario { &self.scenario }

    /// Planned tests in method registration order.
    #[must_use]
    pub fn tests(&self) -> &[PlannedTest] { &self.tests }
}

/// Ordered scenario groups for one fixture, known before anything runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuitePlan {
    fixture: String,
    groups: Vec<ScenarioGroup>,
}

impl SuitePlan {
    /// Name of the planned fixture.
    #[must_use]
    pub fn fixture(&self) -> &str { &self.fixture }

    /// Groups in scenario order.
    #[must_use]
    pub fn groups(&self) -> &[ScenarioGroup] { &self.groups }

    /// Total number of expanded tests.
    #[must_use]
    pub fn test_count(&self) -> usize { self.groups.iter().map(|g| g.tests.len()).sum() }

    /// Identities of every expanded test in execution order.
    pub fn test_ids(&self) -> impl Iterator<Item = &TestId> {
        self.groups
            .iter()
            .flat_map(|g| g.tests.iter().map(PlannedTest::id))
    }
}

impl fmt::Display for SuitePlan {
    /// Renders the plan as an indented tree of group and test labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fixture)?;
        for group in &self.groups {
            writeln!(f, "  {}", group.label)?;
            for test in &group.tests {
                writeln!(f, "    {}", test.id)?;
            }
        }
        Ok(())
    }
}

/// Expand `descriptor` over `scenarios`.
///
/// Produces one [`ScenarioGroup`] per scenario in list order, each holding
/// the descriptor's test methods in registration order. Tests rejected by
/// the config's filter are left out, as are groups left empty by it. This
/// function only plans; nothing is constructed or run.
pub fn expand<F>(
    descriptor: &FixtureDescriptor<F>,
    scenarios: ScenarioList,
    config: &RunConfig,
) -> SuitePlan {
    let groups = scenarios
        .into_iter()
        .filter_map(|scenario| {
            let tests: Vec<PlannedTest> = descriptor
                .test_names()
                .enumerate()
                .map(|(method, name)| PlannedTest {
                    method,
                    id: TestId::new(descriptor.name(), name, &scenario),
                })
                .filter(|test| config.matches(&test.id.label()))
                .collect();
            if tests.is_empty() && config.filter_pattern().is_some() {
                return None;
            }
            Some(ScenarioGroup {
                label: group_label(&scenario),
                scenario,
                tests,
            })
        })
        .collect();
    SuitePlan {
        fixture: descriptor.name().to_owned(),
        groups,
    }
}
