//! Helpers for testing fixtures driven by
//! [`ScenarioRunner`](scenario_runner::ScenarioRunner).
//!
//! [`RecordingListener`] captures every runner callback as a line of text,
//! [`Journal`] collects the order in which hooks and bodies ran and
//! [`logger`] gives a test exclusive access to captured `log` records.
//!
//! ```rust
//! use scenario_runner::{Constructor, FixtureDescriptor, ScenarioList, ScenarioRunner};
//! use scenario_testing::RecordingListener;
//!
//! fn scenarios() -> ScenarioList { ScenarioList::empty() }
//!
//! let descriptor: FixtureDescriptor<()> = FixtureDescriptor::builder("Empty")
//!     .scenarios(scenarios)
//!     .constructor(Constructor::no_args(|| ()))
//!     .build();
//! let mut recorder = RecordingListener::default();
//! ScenarioRunner::new(descriptor)
//!     .expect("valid fixture")
//!     .run(&mut recorder);
//! assert_eq!(recorder.events(), ["suite_started Empty", "suite_finished 0/0"]);
//! ```

pub mod journal;
pub mod logging;
pub mod macros;
pub mod recorder;

pub use journal::Journal;
pub use logging::{LoggerHandle, logger};
pub use recorder::RecordingListener;
