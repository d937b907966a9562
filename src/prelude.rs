//! Optional convenience imports for declaring and running fixtures.
//!
//! This module is intentionally small and focused on the types used when
//! writing a fixture. Prefer importing specialised APIs directly from their
//! owning modules.
//!
//! # Examples
//!
//! ```rust
//! use scenario_runner::prelude::*;
//!
//! fn scenarios() -> ScenarioList { ScenarioList::empty() }
//!
//! let descriptor: FixtureDescriptor<()> = FixtureDescriptor::builder("Empty")
//!     .scenarios(scenarios)
//!     .constructor(Constructor::no_args(|| ()))
//!     .build();
//! let report = ScenarioRunner::new(descriptor)?.run(SilentListener);
//! assert_eq!(report.run_count(), 0);
//! # Ok::<(), SuiteError>(())
//! ```

pub use crate::{
    binding::Constructor,
    config::RunConfig,
    error::SuiteError,
    fixture::{FixtureDescriptor, TestContext, TestResult},
    listener::{RunListener, SilentListener},
    params,
    report::RunReport,
    runner::ScenarioRunner,
    scenario::{CustomScenario, Scenario},
    scenario_list::ScenarioList,
};
