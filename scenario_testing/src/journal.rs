//! Shared record of what fixture code ran, and in which order.

use std::{cell::RefCell, rc::Rc};

/// Cheaply clonable log that hooks, constructors and bodies append to.
///
/// Clones share the same entries, so one clone can be moved into each
/// registered closure while the test keeps another for assertions.
///
/// ```rust
/// use scenario_testing::Journal;
///
/// let journal = Journal::default();
/// let writer = journal.clone();
/// writer.push("beforeClass(");
/// writer.push(")afterClass");
/// assert_eq!(journal.joined(), "beforeClass()afterClass");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    /// Append an entry.
    pub fn push(&self, entry: impl Into<String>) { self.entries.borrow_mut().push(entry.into()); }

    /// Snapshot of every entry in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> { self.entries.borrow().clone() }

    /// Every entry concatenated without separators.
    #[must_use]
    pub fn joined(&self) -> String { self.entries.borrow().concat() }

    /// Number of entries equal to `entry`.
    #[must_use]
    pub fn count(&self, entry: &str) -> usize {
        self.entries.borrow().iter().filter(|e| *e == entry).count()
    }

    /// Forget every entry.
    pub fn clear(&self) { self.entries.borrow_mut().clear(); }
}
