//! Step definitions for the cucumber behaviour tests.

mod expansion_steps;
