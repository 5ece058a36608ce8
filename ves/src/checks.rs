//! Predicates for branching on settled outcomes.
//!
//! Two tiers are provided. The loose checks, [`value_present`] and
//! [`error_present`], inspect a single slot and trust whoever produced the
//! slots to keep them mutually exclusive. The strict checks,
//! [`is_strict_success`] and [`is_success_pair`], look at both slots before
//! reporting success.
//!
//! ```
//! use ves::{ResultPair, error_present, is_strict_success, value_present};
//!
//! let (value, error) = ResultPair::<u8, String>::Ok(1).into_slots();
//! assert!(value_present(value.as_ref()));
//! assert!(!error_present(error.as_ref()));
//! assert!(is_strict_success(value.as_ref(), error.as_ref()));
//! ```

use crate::ResultPair;

/// Returns `true` when the value slot is populated.
///
/// The error slot is not consulted.
#[must_use]
pub const fn value_present<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Returns `true` when the error slot is populated.
///
/// The value slot is not consulted.
#[must_use]
pub const fn error_present<E: ?Sized>(error: Option<&E>) -> bool {
    error.is_some()
}

/// Returns `true` only when the value slot is populated and the error slot is
/// absent.
#[must_use]
pub const fn is_strict_success<T: ?Sized, E: ?Sized>(
    value: Option<&T>,
    error: Option<&E>,
) -> bool {
    value_present(value) && !error_present(error)
}

/// Destructures `pair` and applies [`is_strict_success`] to its slots.
#[must_use]
pub const fn is_success_pair<T, E>(pair: &ResultPair<T, E>) -> bool {
    let (value, error) = pair.slots();
    is_strict_success(value, error)
}
