//! Test bodies and lifecycle hooks registered on a fixture.

use crate::naming::TestId;

/// Error returned by a failing test body or hook.
pub type TestError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a test body or hook.
pub type TestResult = Result<(), TestError>;

/// Hook invoked once per suite, before or after every scenario.
///
/// # Examples
///
/// ```rust
/// use scenario_runner::fixture::SuiteHook;
///
/// let hook: SuiteHook = Box::new(|| Ok(()));
/// ```
pub type SuiteHook = Box<dyn Fn() -> TestResult>;

/// Hook invoked around each expanded test with the fresh fixture.
pub type EachHook<F> = Box<dyn Fn(&mut F) -> TestResult>;

/// Body of a test method.
pub type TestBody<F> = Box<dyn Fn(&mut F, &TestContext<'_>) -> TestResult>;

/// Information about the expanded test currently running.
#[derive(Clone, Copy, Debug)]
pub struct TestContext<'a> {
    id: &'a TestId,
}

impl<'a> TestContext<'a> {
    pub(crate) fn new(id: &'a TestId) -> Self { Self { id } }

    /// Identity of the running test.
    #[must_use]
    pub fn id(&self) -> &'a TestId { self.id }

    /// Display name of the running test, `method[scenario]`.
    #[must_use]
    pub fn display_name(&self) -> String { self.id.label() }
}
