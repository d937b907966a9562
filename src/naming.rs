//! Display names for expanded tests.
//!
//! Names are plain concatenation: nothing is escaped or validated, so a
//! scenario called `with()parentheses` or `a]b` is reported exactly as
//! written.

use std::fmt;

use serde::Serialize;

use crate::scenario::Scenario;

/// Label of the group holding every test for `scenario`: `[name]`.
///
/// ```
/// use scenario_runner::{Scenario, naming::group_label, params};
///
/// let scenario = Scenario::parameterized("1+2=3", params![1, 2, 3]);
/// assert_eq!(group_label(&scenario), "[1+2=3]");
/// ```
#[must_use]
pub fn group_label(scenario: &Scenario) -> String { format!("[{}]", scenario.name()) }

/// Label of test `method` run under `scenario`: `method[name]`.
#[must_use]
pub fn test_label(method: &str, scenario: &Scenario) -> String {
    format!("{method}[{}]", scenario.name())
}

/// Identity of one expanded test.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TestId {
    fixture: String,
    method: String,
    scenario: String,
}

impl TestId {
    /// Identify `method` of `fixture` run under `scenario`.
    pub fn new(fixture: impl Into<String>, method: impl Into<String>, scenario: &Scenario) -> Self {
        Self {
            fixture: fixture.into(),
            method: method.into(),
            scenario: scenario.name().to_owned(),
        }
    }

    /// Name of the fixture the test belongs to.
    #[must_use]
    pub fn fixture(&self) -> &str { &self.fixture }

    /// Name of the test method.
    #[must_use]
    pub fn method(&self) -> &str { &self.method }

    /// Name of the scenario.
    #[must_use]
    pub fn scenario(&self) -> &str { &self.scenario }

    /// The test label, `method[scenario]`.
    #[must_use]
    pub fn label(&self) -> String { self.to_string() }

    /// The label qualified by fixture, `method[scenario](fixture)`.
    #[must_use]
    pub fn header(&self) -> String { format!("{self}({})", self.fixture) }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.method, self.scenario)
    }
}
