//! Shared invocation counting for operations under test.

use std::sync::Arc;

use parking_lot::Mutex;

/// Counts how often an operation ran and with which arguments.
///
/// Clones share the same log, so a clone can move into the operation while
/// the test keeps the original for assertions.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallCounter {
    /// Records one invocation described by `args`.
    pub fn record(&self, args: impl Into<String>) {
        self.calls.lock().push(args.into());
    }

    /// Returns the number of recorded invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns the recorded argument descriptions in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}
