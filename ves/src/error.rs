//! Error raised when slots cannot form a valid result pair.

use thiserror::Error;

/// Slot combinations rejected by [`crate::ResultPair::from_slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SlotsError {
    /// Both the value and the error slot were populated.
    #[error("result pair holds both a value and an error")]
    BothPresent,

    /// Neither slot was populated.
    #[error("result pair holds neither a value nor an error")]
    BothAbsent,
}
