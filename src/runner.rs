//! Expansion and execution of a fixture across its scenarios.
//!
//! [`ScenarioRunner::new`] validates a [`FixtureDescriptor`], resolves its
//! scenarios and plans one [`ScenarioGroup`] per scenario.
//! [`ScenarioRunner::run`] then executes the plan, binding a fresh fixture
//! for every expanded test.

mod execute;
mod plan;
mod state;
#[cfg(test)]
mod tests;

use std::collections::HashSet;

pub use plan::{PlannedTest, ScenarioGroup, SuitePlan, expand};
pub use state::SuiteState;

use crate::{
    binding::Constructor,
    config::RunConfig,
    error::SuiteError,
    fixture::FixtureDescriptor,
    panic::guard,
    scenario_list::ScenarioList,
};

/// Runs every test method of a fixture once per scenario.
///
/// ```
/// use scenario_runner::{
///     Constructor,
///     FixtureDescriptor,
///     ScenarioList,
///     ScenarioRunner,
///     SilentListener,
///     params,
/// };
///
/// struct Sum(i64, i64, i64);
///
/// fn scenarios() -> ScenarioList {
///     ScenarioList::from_array([
///         ("0+0=0", params![0, 0, 0]),
///         ("1+2=3", params![1, 2, 3]),
///         ("2+2=4", params![2, 2, 4]),
///     ])
///     .unwrap_or_default()
/// }
///
/// let descriptor = FixtureDescriptor::builder("Calculator")
///     .scenarios(scenarios)
///     .constructor(Constructor::positional(|(a, b, sum): (i64, i64, i64)| Sum(a, b, sum)))
///     .test("sum", |s: &mut Sum| {
///         assert_eq!(s.0 + s.1, s.2);
///         Ok(())
///     })
///     .build();
///
/// let runner = ScenarioRunner::new(descriptor).expect("valid fixture");
/// assert_eq!(runner.test_count(), 3);
/// let report = runner.run(SilentListener);
/// assert!(report.is_success());
/// ```
pub struct ScenarioRunner<F> {
    descriptor: FixtureDescriptor<F>,
    constructor: Constructor<F>,
    plan: SuitePlan,
    config: RunConfig,
    state: SuiteState,
}

impl<F> ScenarioRunner<F> {
    /// Create a runner with the default [`RunConfig`].
    ///
    /// # Errors
    ///
    /// See [`ScenarioRunner::with_config`].
    pub fn new(descriptor: FixtureDescriptor<F>) -> Result<Self, SuiteError> {
        Self::with_config(descriptor, RunConfig::default())
    }

    /// Validate `descriptor`, invoke its scenario supplier and plan the
    /// suite.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ConstructorCount`] unless exactly one
    /// constructor is registered, [`SuiteError::DuplicateTestMethod`] when
    /// two test methods share a name and [`SuiteError::ScenarioSupplier`]
    /// unless exactly one supplier is registered. A supplier that returns an
    /// error or panics yields [`SuiteError::SupplierFailed`] or
    /// [`SuiteError::SupplierPanicked`].
    pub fn with_config(
        mut descriptor: FixtureDescriptor<F>,
        config: RunConfig,
    ) -> Result<Self, SuiteError> {
        let fixture = descriptor.name.clone();
        let resolved = Self::validate(&mut descriptor, &config);
        let (constructor, scenarios) = match resolved {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!(%fixture, error = %e, "scenario suite failed to initialise");
                return Err(e);
            }
        };
        let mut runner = Self {
            plan: SuitePlan::default(),
            descriptor,
            constructor,
            config,
            state: SuiteState::Uninitialized,
        };
        runner.transition(SuiteState::ScenariosResolved);
        runner.plan = expand(&runner.descriptor, scenarios, &runner.config);
        runner.transition(SuiteState::ChildrenBuilt);
        Ok(runner)
    }

    fn validate(
        descriptor: &mut FixtureDescriptor<F>,
        config: &RunConfig,
    ) -> Result<(Constructor<F>, ScenarioList), SuiteError> {
        let found = descriptor.constructors.len();
        let constructor = match descriptor.constructors.pop() {
            Some(constructor) if found == 1 => constructor,
            _ => return Err(SuiteError::ConstructorCount { found }),
        };

        let mut seen = HashSet::new();
        if let Some(name) = descriptor.test_names().find(|name| !seen.insert(*name)) {
            return Err(SuiteError::DuplicateTestMethod(name.to_owned()));
        }

        let supplier = match descriptor.suppliers.as_slice() {
            [supplier] => supplier,
            other => return Err(SuiteError::ScenarioSupplier { found: other.len() }),
        };
        match guard(config.catches_panics(), || supplier()) {
            Ok(Ok(scenarios)) => Ok((constructor, scenarios)),
            Ok(Err(e)) => Err(SuiteError::SupplierFailed(e)),
            Err(panic) => Err(SuiteError::SupplierPanicked(panic.to_string())),
        }
    }

    fn transition(&mut self, next: SuiteState) {
        tracing::debug!(
            fixture = %self.descriptor.name,
            from = %self.state,
            to = %next,
            "scenario suite state changed"
        );
        self.state = next;
    }

    /// The expanded plan, available before anything runs.
    #[must_use]
    pub fn plan(&self) -> &SuitePlan { &self.plan }

    /// Number of expanded tests the run will execute.
    #[must_use]
    pub fn test_count(&self) -> usize { self.plan.test_count() }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SuiteState { self.state }

    /// The fixture being run.
    #[must_use]
    pub fn descriptor(&self) -> &FixtureDescriptor<F> { &self.descriptor }

    /// The configuration the plan was built with.
    #[must_use]
    pub fn config(&self) -> &RunConfig { &self.config }
}

impl<F> std::fmt::Debug for ScenarioRunner<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioRunner")
            .field("descriptor", &self.descriptor)
            .field("constructor", &self.constructor)
            .field("plan", &self.plan)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}
