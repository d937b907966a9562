//! Run configuration.
//!
//! [`RunConfig`] selects which expanded tests run and how panics raised by
//! fixture code are treated. The defaults run everything and record panics
//! as failures.

/// Options for a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct RunConfig {
    filter: Option<String>,
    catch_panics: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filter: None,
            catch_panics: true,
        }
    }
}

impl RunConfig {
    /// Only plan tests whose label (`method[scenario]`) contains `pattern`.
    ///
    /// Scenario groups left without tests are dropped from the plan.
    ///
    /// ```
    /// use scenario_runner::RunConfig;
    ///
    /// let config = RunConfig::default().filter("[1+2=3]");
    /// assert!(config.matches("sum[1+2=3]"));
    /// assert!(!config.matches("sum[0+0=0]"));
    /// ```
    pub fn filter(mut self, pattern: impl Into<String>) -> Self {
        self.filter = Some(pattern.into());
        self
    }

    /// Record panics from constructors, hooks and test bodies as failures
    /// (`true`, the default) or let them propagate to the caller.
    ///
    /// A propagating panic from a test still lets the after-all hooks run
    /// before it reaches the caller.
    pub fn catch_panics(mut self, catch: bool) -> Self {
        self.catch_panics = catch;
        self
    }

    /// Whether the test labelled `label` passes the filter.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|pattern| label.contains(pattern))
    }

    /// The configured filter pattern.
    #[must_use]
    pub fn filter_pattern(&self) -> Option<&str> { self.filter.as_deref() }

    /// Whether panics are recorded as failures.
    #[must_use]
    pub fn catches_panics(&self) -> bool { self.catch_panics }
}
