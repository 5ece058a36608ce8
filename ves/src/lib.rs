//! Settle fallible asynchronous operations into value-or-error pairs.
//!
//! `ves` wraps an operation whose future resolves to `Result<T, E>` and turns
//! every call into a [`ResultPair`]: either a value or an error, never both
//! and never neither. Calling code then branches with the predicates in
//! [`checks`] or by matching on the pair directly.
//!
//! Two entry points produce identical pairs:
//!
//! - [`wrap`] takes the operation and returns a [`Wrapped`] handle awaiting
//!   its arguments.
//! - [`wrap_closure`] takes a zero-argument closure with its arguments already
//!   bound.
//!
//! ```
//! use std::future::ready;
//! use ves::{error_present, is_success_pair, wrap, wrap_closure};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let parse = wrap(|text: &str| ready(text.parse::<u32>()));
//! let pair = parse.call(("42",)).await;
//! assert!(is_success_pair(&pair));
//!
//! let (value, error) = wrap_closure(|| ready("x".parse::<u32>())).await.into_slots();
//! assert!(value.is_none());
//! assert!(error_present(error.as_ref()));
//! # }
//! ```
//!
//! Failures are whatever the operation returned as `Err`. Panics are not
//! intercepted.

mod adapter;
pub mod checks;
mod error;
mod pair;
mod result_ext;

pub use adapter::{Operation, Wrapped, settle, wrap, wrap_closure};
pub use checks::{error_present, is_strict_success, is_success_pair, value_present};
pub use error::SlotsError;
pub use pair::ResultPair;
pub use result_ext::{IntoResultPair, SettleExt};
