//! The two-slot outcome produced when a wrapped operation settles.
//!
//! A [`ResultPair`] is a tagged union, so the "exactly one slot" rule holds by
//! construction. The slot view ([`ResultPair::slots`] and
//! [`ResultPair::into_slots`]) exposes the pair as `(value, error)` with
//! `None` as the absent marker for callers that prefer destructuring.

mod codec;

use crate::SlotsError;

/// Outcome of one settled operation: a value or an error.
///
/// The pair serialises as the two-element sequence `[value, error]` with
/// `null` in the absent slot. A success whose value itself serialises to
/// `null`, such as `ResultPair::<(), E>::Ok(())` or `Ok(None)`, is written as
/// `[null, null]` and is rejected with [`SlotsError::BothAbsent`] when read
/// back. Convert such pairs to a non-null value before serialising when they
/// must round-trip.
#[must_use = "a result pair may hold a failure that should be inspected"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultPair<T, E> {
    /// The operation succeeded; the error slot is absent.
    Ok(T),
    /// The operation failed; the value slot is absent.
    Failure(E),
}

impl<T, E> ResultPair<T, E> {
    /// Builds a successful pair.
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Builds a failed pair.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Rebuilds a pair from its slots.
    ///
    /// # Errors
    ///
    /// Returns [`SlotsError::BothPresent`] or [`SlotsError::BothAbsent`] when
    /// the slots do not hold exactly one populated entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ves::{ResultPair, SlotsError};
    ///
    /// let pair = ResultPair::<u8, String>::from_slots(Some(1), None);
    /// assert_eq!(pair, Ok(ResultPair::Ok(1)));
    ///
    /// let broken = ResultPair::<u8, String>::from_slots(None, None);
    /// assert_eq!(broken, Err(SlotsError::BothAbsent));
    /// ```
    pub fn from_slots(value_slot: Option<T>, error_slot: Option<E>) -> Result<Self, SlotsError> {
        match (value_slot, error_slot) {
            (Some(value), None) => Ok(Self::Ok(value)),
            (None, Some(error)) => Ok(Self::Failure(error)),
            (Some(_), Some(_)) => Err(SlotsError::BothPresent),
            (None, None) => Err(SlotsError::BothAbsent),
        }
    }

    /// Borrows both slots as `(value, error)`.
    #[must_use]
    pub const fn slots(&self) -> (Option<&T>, Option<&E>) {
        match self {
            Self::Ok(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Consumes the pair into `(value, error)`.
    #[must_use]
    pub fn into_slots(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Ok(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Returns the value slot.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.slots().0
    }

    /// Returns the error slot.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        self.slots().1
    }

    /// Returns `true` when the pair holds a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` when the pair holds an error.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts the pair back into a [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the error slot when the pair is a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Maps the value slot, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> ResultPair<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => ResultPair::Ok(f(value)),
            Self::Failure(error) => ResultPair::Failure(error),
        }
    }

    /// Maps the error slot, leaving a success untouched.
    pub fn map_failure<G, F>(self, f: F) -> ResultPair<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => ResultPair::Ok(value),
            Self::Failure(error) => ResultPair::Failure(f(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for ResultPair<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<ResultPair<T, E>> for Result<T, E> {
    fn from(pair: ResultPair<T, E>) -> Self {
        pair.into_result()
    }
}

#[cfg(test)]
mod tests;
