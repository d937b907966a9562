//! Utilities for working with panic payloads.
//!
//! Fixture constructors, hooks and test bodies may panic. The runner catches
//! those panics and records the formatted payload as the failure message.

use std::{
    any::Any,
    fmt,
    panic::{AssertUnwindSafe, catch_unwind, resume_unwind},
};

/// Wrapper that formats a panic payload when logged or displayed.
///
/// The payload is downcast to `String` or `&'static str` if possible and falls
/// back to `Debug` formatting otherwise.
///
/// ```
/// use scenario_runner::panic::format_panic;
/// assert_eq!(format_panic(Box::new("boom")).to_string(), "boom");
/// assert_eq!(
///     format_panic(Box::new(String::from("boom"))).to_string(),
///     "boom"
/// );
/// assert!(format_panic(Box::new(5_u32)).to_string().contains("Any"));
/// ```
#[derive(Debug)]
#[must_use]
pub struct PanicMessage(Box<dyn Any + Send>);

impl PanicMessage {
    /// Continue unwinding with the original payload.
    pub fn resume(self) -> ! { resume_unwind(self.0) }
}

impl fmt::Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.0.downcast_ref::<String>() {
            f.write_str(s)
        } else if let Some(s) = self.0.downcast_ref::<&'static str>() {
            f.write_str(s)
        } else {
            write!(f, "{:?}", self.0)
        }
    }
}

/// Create a [`PanicMessage`] for the given payload.
pub fn format_panic(panic: Box<dyn Any + Send>) -> PanicMessage { PanicMessage(panic) }

/// Run `f`, turning a panic into a [`PanicMessage`].
///
/// When `catch` is `false` the panic propagates to the caller.
pub(crate) fn guard<T>(catch: bool, f: impl FnOnce() -> T) -> Result<T, PanicMessage> {
    if !catch {
        return Ok(f());
    }
    catch_unwind(AssertUnwindSafe(f)).map_err(format_panic)
}
