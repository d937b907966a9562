//! Lifecycle states of a [`ScenarioRunner`](super::ScenarioRunner).

use std::fmt;

/// Where a suite is in its lifecycle.
///
/// A runner that fails to initialise never leaves `Uninitialized`; creation
/// returns a [`SuiteError`](crate::SuiteError) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuiteState {
    /// Nothing resolved yet.
    Uninitialized,
    /// The scenario supplier ran and produced its list.
    ScenariosResolved,
    /// One group per scenario has been planned.
    ChildrenBuilt,
    /// Hooks and tests are running.
    Executing,
    /// Every group ran and the after-all hooks finished.
    Completed,
}

impl SuiteState {
    fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::ScenariosResolved => "scenarios_resolved",
            Self::ChildrenBuilt => "children_built",
            Self::Executing => "executing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SuiteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
