//! Suite-fatal errors.
//!
//! A [`SuiteError`] means no expanded test ran. Failures confined to one
//! expanded test are recorded on the [`RunReport`](crate::RunReport)
//! instead.

use thiserror::Error;

use crate::fixture::SupplierError;

/// Errors that prevent a fixture's scenarios from being expanded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SuiteError {
    /// The fixture does not register exactly one constructor.
    #[error("Test class should have exactly one public constructor")]
    ConstructorCount { found: usize },
    /// The fixture does not register exactly one scenario supplier.
    #[error("No public static scenario-supplier method on class.")]
    ScenarioSupplier { found: usize },
    /// The scenario supplier returned an error.
    #[error("scenario supplier failed: {0}")]
    SupplierFailed(#[source] SupplierError),
    /// The scenario supplier panicked.
    #[error("scenario supplier panicked: {0}")]
    SupplierPanicked(String),
    /// Two test methods share a name, so their labels would collide.
    #[error("test method `{0}` was already registered")]
    DuplicateTestMethod(String),
}
