//! Fixture registration.
//!
//! A [`FixtureDescriptor`] declares everything the runner needs about a
//! fixture type: its scenario supplier, its constructor, its test methods
//! and its lifecycle hooks. It is assembled with [`FixtureBuilder`].
//!
//! ```
//! use scenario_runner::{Constructor, FixtureDescriptor, ScenarioList, params};
//!
//! struct Calculator {
//!     summand1: i64,
//!     summand2: i64,
//!     sum: i64,
//! }
//!
//! fn scenarios() -> ScenarioList {
//!     ScenarioList::from_array([("0+0=0", params![0, 0, 0]), ("1+2=3", params![1, 2, 3])])
//!         .unwrap_or_default()
//! }
//!
//! let descriptor = FixtureDescriptor::builder("Calculator")
//!     .scenarios(scenarios)
//!     .constructor(Constructor::positional(|(summand1, summand2, sum): (i64, i64, i64)| Calculator {
//!         summand1,
//!         summand2,
//!         sum,
//!     }))
//!     .test("sum", |c: &mut Calculator| {
//!         assert_eq!(c.summand1 + c.summand2, c.sum);
//!         Ok(())
//!     })
//!     .build();
//! assert_eq!(descriptor.test_names().count(), 1);
//! ```

mod hooks;

use std::fmt;

pub use hooks::{EachHook, SuiteHook, TestBody, TestContext, TestError, TestResult};

use crate::{binding::Constructor, scenario_list::ScenarioList};

/// Error type a fallible scenario supplier may return.
pub type SupplierError = Box<dyn std::error::Error + Send + Sync>;

/// A type-level, argument-free function producing the scenarios.
pub(crate) type ScenarioSupplier = Box<dyn Fn() -> Result<ScenarioList, SupplierError>>;

/// Values a scenario supplier may return.
pub trait IntoScenarioList {
    /// Convert into a list, or the error that prevented building one.
    ///
    /// # Errors
    ///
    /// Returns the supplier's own error unchanged.
    fn into_scenario_list(self) -> Result<ScenarioList, SupplierError>;
}

impl IntoScenarioList for ScenarioList {
    fn into_scenario_list(self) -> Result<ScenarioList, SupplierError> { Ok(self) }
}

impl<E> IntoScenarioList for Result<ScenarioList, E>
where
    E: Into<SupplierError>,
{
    fn into_scenario_list(self) -> Result<ScenarioList, SupplierError> { self.map_err(Into::into) }
}

/// A named test method.
pub(crate) struct TestMethod<F> {
    pub(crate) name: String,
    pub(crate) body: TestBody<F>,
}

/// Everything the runner knows about a fixture type.
///
/// Registration never fails; the shape is validated when a
/// [`ScenarioRunner`](crate::ScenarioRunner) is created.
pub struct FixtureDescriptor<F> {
    pub(crate) name: String,
    pub(crate) suppliers: Vec<ScenarioSupplier>,
    pub(crate) constructors: Vec<Constructor<F>>,
    pub(crate) tests: Vec<TestMethod<F>>,
    pub(crate) before_all: Vec<SuiteHook>,
    pub(crate) after_all: Vec<SuiteHook>,
    pub(crate) before_each: Vec<EachHook<F>>,
    pub(crate) after_each: Vec<EachHook<F>>,
}

impl<F> FixtureDescriptor<F> {
    /// Start describing the fixture called `name`.
    pub fn builder(name: impl Into<String>) -> FixtureBuilder<F> {
        FixtureBuilder {
            descriptor: Self {
                name: name.into(),
                suppliers: Vec::new(),
                constructors: Vec::new(),
                tests: Vec::new(),
                before_all: Vec::new(),
                after_all: Vec::new(),
                before_each: Vec::new(),
                after_each: Vec::new(),
            },
        }
    }

    /// The fixture's name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Names of the registered test methods, in registration order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|test| test.name.as_str())
    }

    /// Number of registered test methods.
    #[must_use]
    pub fn test_count(&self) -> usize { self.tests.len() }
}

impl<F> fmt::Debug for FixtureDescriptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureDescriptor")
            .field("name", &self.name)
            .field("suppliers", &self.suppliers.len())
            .field("constructors", &self.constructors)
            .field("tests", &self.test_names().collect::<Vec<_>>())
            .field("before_all", &self.before_all.len())
            .field("after_all", &self.after_all.len())
            .field("before_each", &self.before_each.len())
            .field("after_each", &self.after_each.len())
            .finish()
    }
}

/// Builder for [`FixtureDescriptor`].
///
/// Every method appends a registration. Hooks of one kind run in
/// registration order.
#[must_use]
pub struct FixtureBuilder<F> {
    descriptor: FixtureDescriptor<F>,
}

impl<F: 'static> FixtureBuilder<F> {
    /// Register the scenario supplier.
    ///
    /// The supplier is a plain function so it needs no fixture instance. It
    /// may return a [`ScenarioList`] or a `Result` of one.
    pub fn scenarios<R>(mut self, supplier: fn() -> R) -> Self
    where
        R: IntoScenarioList + 'static,
    {
        self.descriptor
            .suppliers
            .push(Box::new(move || supplier().into_scenario_list()));
        self
    }

    /// Register the fixture's constructor.
    pub fn constructor(mut self, constructor: Constructor<F>) -> Self {
        self.descriptor.constructors.push(constructor);
        self
    }

    /// Register a test method.
    pub fn test(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&mut F) -> TestResult + 'static,
    ) -> Self {
        self.descriptor.tests.push(TestMethod {
            name: name.into(),
            body: Box::new(move |fixture: &mut F, _: &TestContext<'_>| body(fixture)),
        });
        self
    }

    /// Register a test method that also receives its [`TestContext`].
    pub fn test_with_context(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&mut F, &TestContext<'_>) -> TestResult + 'static,
    ) -> Self {
        self.descriptor.tests.push(TestMethod {
            name: name.into(),
            body: Box::new(body),
        });
        self
    }

    /// Register a hook run once before any scenario.
    pub fn before_all(mut self, hook: impl Fn() -> TestResult + 'static) -> Self {
        self.descriptor.before_all.push(Box::new(hook));
        self
    }

    /// Register a hook run once after every scenario.
    pub fn after_all(mut self, hook: impl Fn() -> TestResult + 'static) -> Self {
        self.descriptor.after_all.push(Box::new(hook));
        self
    }

    /// Register a hook run before each test method of each scenario.
    pub fn before_each(mut self, hook: impl Fn(&mut F) -> TestResult + 'static) -> Self {
        self.descriptor.before_each.push(Box::new(hook));
        self
    }

    /// Register a hook run after each test method of each scenario.
    pub fn after_each(mut self, hook: impl Fn(&mut F) -> TestResult + 'static) -> Self {
        self.descriptor.after_each.push(Box::new(hook));
        self
    }

    /// Finish the description.
    pub fn build(self) -> FixtureDescriptor<F> { self.descriptor }
}
