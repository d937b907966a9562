#![doc(html_root_url = "https://docs.rs/scenario_runner/latest")]
//! Public API for the `scenario_runner` library.
//!
//! A fixture type declares one scenario supplier, one constructor and any
//! number of test methods. [`ScenarioRunner`] expands the fixture into one
//! group per scenario and runs every test method once per group, each on a
//! freshly constructed fixture bound to that scenario.

pub mod binding;
pub mod config;
pub mod error;
pub mod fixture;
pub mod listener;
pub mod metrics;
pub mod naming;
pub mod panic;
pub mod param;
pub mod prelude;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod scenario_list;

pub use binding::{BindError, Constructor, bind};
pub use config::RunConfig;
pub use error::SuiteError;
pub use fixture::{FixtureBuilder, FixtureDescriptor, IntoScenarioList, TestContext, TestResult};
pub use listener::{RunListener, SilentListener};
pub use metrics::{EXPANDED_TESTS_TOTAL, SUITE_FAILURES_TOTAL};
pub use naming::TestId;
pub use param::{FromParam, FromParams, Param};
pub use report::{FailurePhase, RunReport, TestFailure, TestOutcome, TestReport};
pub use runner::{ScenarioGroup, ScenarioRunner, SuitePlan, SuiteState, expand};
pub use scenario::{AsAny, CustomScenario, ParameterizedScenario, Scenario};
pub use scenario_list::{ScenarioList, ScenarioListError};
