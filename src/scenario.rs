//! Named units of parameterisation.
//!
//! A [`Scenario`] is either a [`ParameterizedScenario`], whose values are
//! bound positionally to the fixture constructor, or a caller-defined
//! [`CustomScenario`] handed to the fixture as a whole.

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::param::Param;

/// Scenario backed by an ordered vector of parameter values.
///
/// Two values are equal when their names and parameter vectors are equal
/// element by element, [`Param::Null`] included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterizedScenario {
    name: String,
    parameters: Vec<Param>,
}

impl ParameterizedScenario {
    /// Create a scenario called `name` with the given parameter values.
    ///
    /// ```
    /// use scenario_runner::{ParameterizedScenario, params};
    ///
    /// let scenario = ParameterizedScenario::new("1+2=3", params![1, 2, 3]);
    /// assert_eq!(scenario.name(), "1+2=3");
    /// assert_eq!(scenario.parameters().len(), 3);
    /// ```
    pub fn new(name: impl Into<String>, parameters: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// The scenario's display name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// The parameter values, in constructor order.
    #[must_use]
    pub fn parameters(&self) -> &[Param] { &self.parameters }

    /// Number of parameter values.
    #[must_use]
    pub fn arity(&self) -> usize { self.parameters.len() }
}

/// Access to a value as [`Any`], implemented for every `'static` type.
///
/// This is a supertrait of [`CustomScenario`] so fixtures can recover their
/// concrete scenario type.
pub trait AsAny: Any + Send + Sync {
    /// Borrow `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Convert a shared `self` into a shared [`Any`].
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any { self }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> { self }
}

/// A caller-defined scenario.
///
/// The runner only reads the name. Fixtures using custom scenarios must be
/// registered with [`Constructor::scenario`](crate::Constructor::scenario) or
/// [`Constructor::custom`](crate::Constructor::custom).
///
/// ```
/// use scenario_runner::CustomScenario;
///
/// #[derive(Debug)]
/// struct Login {
///     user: &'static str,
/// }
///
/// impl CustomScenario for Login {
///     fn name(&self) -> &str { self.user }
/// }
/// ```
pub trait CustomScenario: AsAny + fmt::Debug {
    /// Human readable name describing the purpose of this run.
    fn name(&self) -> &str;
}

/// One scenario in a [`ScenarioList`](crate::ScenarioList).
#[derive(Clone, Debug)]
pub enum Scenario {
    /// Values bound positionally to the fixture constructor.
    Parameters(ParameterizedScenario),
    /// A caller-defined scenario, shared rather than copied.
    Custom(Arc<dyn CustomScenario>),
}

impl Scenario {
    /// Create a parameterised scenario.
    ///
    /// The name is not checked here; [`ScenarioList`](crate::ScenarioList)
    /// rejects unnamed scenarios when they are collected.
    pub fn parameterized(name: impl Into<String>, parameters: Vec<Param>) -> Self {
        Self::Parameters(ParameterizedScenario::new(name, parameters))
    }

    /// Wrap a custom scenario value.
    pub fn custom<S: CustomScenario>(scenario: S) -> Self { Self::Custom(Arc::new(scenario)) }

    /// The scenario's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Parameters(scenario) => scenario.name(),
            Self::Custom(scenario) => scenario.name(),
        }
    }

    /// The parameter values if this is a [`Scenario::Parameters`].
    #[must_use]
    pub fn parameters(&self) -> Option<&[Param]> {
        match self {
            Self::Parameters(scenario) => Some(scenario.parameters()),
            Self::Custom(_) => None,
        }
    }

    /// Borrow a custom scenario as its concrete type.
    #[must_use]
    pub fn downcast_ref<S: CustomScenario>(&self) -> Option<&S> {
        match self {
            Self::Custom(scenario) => scenario.as_ref().as_any().downcast_ref::<S>(),
            Self::Parameters(_) => None,
        }
    }

    /// Share a custom scenario as its concrete type.
    ///
    /// The returned [`Arc`] points at the same object held by the list.
    #[must_use]
    pub fn downcast_arc<S: CustomScenario>(&self) -> Option<Arc<S>> {
        match self {
            Self::Custom(scenario) => Arc::clone(scenario).into_any_arc().downcast::<S>().ok(),
            Self::Parameters(_) => None,
        }
    }
}

impl PartialEq for Scenario {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Parameters(a), Self::Parameters(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Scenario {}

impl Hash for Scenario {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Parameters(scenario) => scenario.hash(state),
            Self::Custom(scenario) => Arc::as_ptr(scenario).cast::<()>().hash(state),
        }
    }
}

impl From<ParameterizedScenario> for Scenario {
    fn from(value: ParameterizedScenario) -> Self { Self::Parameters(value) }
}

impl From<Arc<dyn CustomScenario>> for Scenario {
    fn from(value: Arc<dyn CustomScenario>) -> Self { Self::Custom(value) }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}
