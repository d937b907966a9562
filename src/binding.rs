//! Binding scenarios to fresh fixture instances.
//!
//! A fixture registers exactly one [`Constructor`]. For every test method of
//! every scenario the runner calls [`bind`], which picks the construction
//! strategy from the constructor's shape and the scenario's variant.

use std::{any::type_name, fmt};

use thiserror::Error;

use crate::{
    param::{FromParams, Param},
    scenario::{CustomScenario, Scenario},
};

/// Message reported when a custom scenario meets a positional constructor.
pub const CUSTOM_SCENARIO_CONSTRUCTOR_MESSAGE: &str =
    "Expected Constructor with single Scenario argument when using custom Scenario implementation.";

/// Errors raised while constructing a fixture for one expanded test.
///
/// These failures are local to the test being constructed.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindError {
    /// The parameter count differs from the constructor's arity.
    #[error("constructor expects {expected} parameter(s) but scenario supplies {found}")]
    Arity { expected: usize, found: usize },
    /// A parameter could not be converted to the declared argument type.
    #[error("parameter {position} cannot bind to `{expected}`: found {found}")]
    ParamType {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// A custom scenario was paired with a positional constructor.
    #[error("{}", CUSTOM_SCENARIO_CONSTRUCTOR_MESSAGE)]
    CustomScenarioRequiresScenarioConstructor,
    /// The constructor expects a different scenario type.
    #[error("constructor expects scenario type `{expected}` but scenario `{scenario}` differs")]
    ScenarioType {
        expected: &'static str,
        scenario: String,
    },
    /// A constructor rejected its arguments.
    #[error("{0}")]
    Rejected(String),
}

type NoArgsFn<F> = Box<dyn Fn() -> F>;
type ScenarioFn<F> = Box<dyn Fn(Scenario) -> Result<F, BindError>>;
type PositionalFn<F> = Box<dyn Fn(&[Param]) -> Result<F, BindError>>;

/// The single constructor of a fixture type.
pub enum Constructor<F> {
    /// Takes no arguments; the scenario only drives naming.
    NoArgs(NoArgsFn<F>),
    /// Takes the scenario itself.
    Scenario(ScenarioFn<F>),
    /// Takes the parameters of a [`ParameterizedScenario`](crate::ParameterizedScenario)
    /// positionally.
    Positional {
        /// Number of constructor parameters.
        arity: usize,
        /// Builds the fixture from exactly `arity` values.
        build: PositionalFn<F>,
    },
}

impl<F: 'static> Constructor<F> {
    /// A constructor without parameters.
    pub fn no_args(build: impl Fn() -> F + 'static) -> Self { Self::NoArgs(Box::new(build)) }

    /// A constructor receiving the scenario unmodified.
    ///
    /// Custom scenarios arrive as the same shared object held by the
    /// [`ScenarioList`](crate::ScenarioList).
    pub fn scenario(build: impl Fn(Scenario) -> F + 'static) -> Self {
        Self::Scenario(Box::new(move |scenario| Ok(build(scenario))))
    }

    /// A constructor receiving a custom scenario of concrete type `S`.
    ///
    /// Scenarios of any other type fail with [`BindError::ScenarioType`].
    pub fn custom<S: CustomScenario>(build: impl Fn(std::sync::Arc<S>) -> F + 'static) -> Self {
        Self::Scenario(Box::new(move |scenario| {
            scenario
                .downcast_arc::<S>()
                .map(&build)
                .ok_or_else(|| BindError::ScenarioType {
                    expected: type_name::<S>(),
                    scenario: scenario.name().to_owned(),
                })
        }))
    }

    /// A constructor taking typed positional arguments.
    ///
    /// ```
    /// use scenario_runner::Constructor;
    ///
    /// struct Calculator {
    ///     summand1: i64,
    ///     summand2: i64,
    ///     sum: i64,
    /// }
    ///
    /// let _ctor = Constructor::positional(|(summand1, summand2, sum): (i64, i64, i64)| {
    ///     Calculator { summand1, summand2, sum }
    /// });
    /// ```
    pub fn positional<A: FromParams + 'static>(build: impl Fn(A) -> F + 'static) -> Self {
        Self::Positional {
            arity: A::ARITY,
            build: Box::new(move |params: &[Param]| A::from_params(params).map(&build)),
        }
    }

    /// A constructor over raw parameter values.
    pub fn positional_raw(
        arity: usize,
        build: impl Fn(&[Param]) -> Result<F, BindError> + 'static,
    ) -> Self {
        Self::Positional {
            arity,
            build: Box::new(build),
        }
    }
}

impl<F> Constructor<F> {
    /// Number of declared constructor parameters; a scenario constructor
    /// declares one.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::NoArgs(_) => 0,
            Self::Scenario(_) => 1,
            Self::Positional { arity, .. } => *arity,
        }
    }
}

impl<F> fmt::Debug for Constructor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArgs(_) => f.write_str("Constructor::NoArgs"),
            Self::Scenario(_) => f.write_str("Constructor::Scenario"),
            Self::Positional { arity, .. } => write!(f, "Constructor::Positional({arity})"),
        }
    }
}

/// Construct a fresh fixture for `scenario`.
///
/// Strategies apply in order: no arguments, which includes a positional
/// constructor declaring none; the scenario itself; the scenario's
/// parameters positionally. A custom scenario paired with a
/// positional constructor is rejected with
/// [`BindError::CustomScenarioRequiresScenarioConstructor`].
///
/// # Errors
///
/// Returns a [`BindError`] when the scenario cannot be bound.
pub fn bind<F>(constructor: &Constructor<F>, scenario: &Scenario) -> Result<F, BindError> {
    match (constructor, scenario) {
        (Constructor::NoArgs(build), _) => Ok(build()),
        (Constructor::Positional { arity: 0, build }, _) => build(&[]),
        (Constructor::Scenario(build), scenario) => build(scenario.clone()),
        (Constructor::Positional { arity, build }, Scenario::Parameters(parameterized)) => {
            if parameterized.arity() != *arity {
                return Err(BindError::Arity {
                    expected: *arity,
                    found: parameterized.arity(),
                });
            }
            build(parameterized.parameters())
        }
        (Constructor::Positional { .. }, Scenario::Custom(_)) => {
            Err(BindError::CustomScenarioRequiresScenarioConstructor)
        }
    }
}
