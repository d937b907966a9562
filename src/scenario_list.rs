//! Ordered, read-only collections of scenarios.
//!
//! A [`ScenarioList`] is what a fixture's scenario supplier returns. The
//! factory methods mirror the two ways scenarios are usually written down:
//! as `(name, values)` rows, or as a collection of custom scenario values.

use std::{slice, sync::Arc};

use thiserror::Error;

use crate::{
    param::Param,
    scenario::{CustomScenario, ParameterizedScenario, Scenario},
};

/// Errors raised while building a [`ScenarioList`] from rows.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioListError {
    /// The row at `index` has an empty scenario name.
    #[error("scenario at index {index} has no name")]
    MissingName { index: usize },
    /// The row at `index` does not consist of a name segment and a
    /// parameter segment.
    #[error("scenario at index {index} must have a name segment and a parameter segment, found {segments} segment(s)")]
    MalformedRow { index: usize, segments: usize },
    /// The name segment of the row at `index` is not a single string.
    #[error("scenario at index {index} must be named by a single string, found {found}")]
    InvalidName { index: usize, found: String },
}

/// An ordered, immutable list of [`Scenario`]s.
///
/// Iteration order is construction order. Duplicates are kept and an empty
/// list is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioList {
    scenarios: Vec<Scenario>,
}

impl ScenarioList {
    /// Build parameterised scenarios from `(name, values)` pairs.
    ///
    /// ```
    /// use scenario_runner::{ScenarioList, params};
    ///
    /// let list = ScenarioList::from_array([
    ///     ("add zero to zero is zero", params![0, 0, 0]),
    ///     ("1+0=1", params![1, 0, 1]),
    ///     ("1+2=3", params![1, 2, 3]),
    /// ])
    /// .expect("every scenario is named");
    /// assert_eq!(list.len(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioListError::MissingName`] if any name is empty.
    pub fn from_array<I, N>(pairs: I) -> Result<Self, ScenarioListError>
    where
        I: IntoIterator<Item = (N, Vec<Param>)>,
        N: Into<String>,
    {
        let scenarios = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (name, parameters))| {
                let name = name.into();
                if name.is_empty() {
                    return Err(ScenarioListError::MissingName { index });
                }
                Ok(Scenario::Parameters(ParameterizedScenario::new(
                    name, parameters,
                )))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { scenarios })
    }

    /// Build parameterised scenarios from nested rows of the form
    /// `[[name], [value, ...]]`.
    ///
    /// ```
    /// use scenario_runner::{Param, ScenarioList, params};
    ///
    /// let list = ScenarioList::from_rows(vec![
    ///     vec![params!["0+0=0"], params![0, 0, 0]],
    ///     vec![params!["1+0=1"], params![1, 0, 1]],
    /// ])
    /// .expect("rows are well formed");
    /// assert_eq!(list.iter().next().map(|s| s.name()), Some("0+0=0"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioListError`] naming the first malformed row.
    pub fn from_rows<I>(rows: I) -> Result<Self, ScenarioListError>
    where
        I: IntoIterator<Item = Vec<Vec<Param>>>,
    {
        let scenarios = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| parse_row(index, row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { scenarios })
    }

    /// Wrap caller-defined scenarios, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioListError::MissingName`] if any scenario's name is
    /// empty.
    pub fn from_collection<I, S>(scenarios: I) -> Result<Self, ScenarioListError>
    where
        I: IntoIterator<Item = S>,
        S: CustomScenario,
    {
        Self::from_scenarios(
            scenarios
                .into_iter()
                .map(|scenario| Scenario::Custom(Arc::new(scenario))),
        )
    }

    /// Wrap already tagged scenarios, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioListError::MissingName`] if any scenario's name is
    /// empty.
    pub fn from_scenarios<I>(scenarios: I) -> Result<Self, ScenarioListError>
    where
        I: IntoIterator<Item = Scenario>,
    {
        let scenarios = scenarios
            .into_iter()
            .enumerate()
            .map(|(index, scenario)| {
                if scenario.name().is_empty() {
                    Err(ScenarioListError::MissingName { index })
                } else {
                    Ok(scenario)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { scenarios })
    }

    /// An empty list.
    #[must_use]
    pub fn empty() -> Self { Self::default() }

    /// Iterate over the scenarios in order.
    pub fn iter(&self) -> slice::Iter<'_, Scenario> { self.scenarios.iter() }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize { self.scenarios.len() }

    /// Returns `true` when the list holds no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.scenarios.is_empty() }
}

fn parse_row(index: usize, row: Vec<Vec<Param>>) -> Result<Scenario, ScenarioListError> {
    let segments = row.len();
    let Ok([name, parameters]) = <[Vec<Param>; 2]>::try_from(row) else {
        return Err(ScenarioListError::MalformedRow { index, segments });
    };
    let name = match name.as_slice() {
        [Param::Str(name)] if name.is_empty() => {
            return Err(ScenarioListError::MissingName { index });
        }
        [Param::Str(name)] => name.clone(),
        [] => return Err(ScenarioListError::MissingName { index }),
        other => {
            return Err(ScenarioListError::InvalidName {
                index,
                found: format!("{other:?}"),
            });
        }
    };
    Ok(Scenario::Parameters(ParameterizedScenario::new(
        name, parameters,
    )))
}

impl<'a> IntoIterator for &'a ScenarioList {
    type Item = &'a Scenario;
    type IntoIter = slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl IntoIterator for ScenarioList {
    type Item = Scenario;
    type IntoIter = std::vec::IntoIter<Scenario>;

    fn into_iter(self) -> Self::IntoIter { self.scenarios.into_iter() }
}
