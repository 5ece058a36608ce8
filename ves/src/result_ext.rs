//! Extension traits for reaching a [`ResultPair`] without the free functions.
//!
//! - [`IntoResultPair::into_pair`] converts an existing `Result`.
//! - [`SettleExt::settle`] settles any future of a `Result`, matching
//!   [`crate::settle`].
//!
//! # Examples
//!
//! ```
//! use std::future::ready;
//! use ves::{IntoResultPair, ResultPair, SettleExt};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let pair = "12".parse::<u8>().into_pair();
//! assert_eq!(pair, ResultPair::Ok(12));
//!
//! let settled = ready(Err::<u8, _>("boom")).settle().await;
//! assert_eq!(settled, ResultPair::Failure("boom"));
//! # }
//! ```

use std::future::{Future, IntoFuture};

use crate::ResultPair;

/// Converts a `Result<T, E>` into a [`ResultPair<T, E>`].
pub trait IntoResultPair<T, E> {
    /// Moves `Ok` into the value slot and `Err` into the error slot.
    fn into_pair(self) -> ResultPair<T, E>;
}

impl<T, E> IntoResultPair<T, E> for Result<T, E> {
    fn into_pair(self) -> ResultPair<T, E> {
        self.into()
    }
}

/// Settles a future of `Result<T, E>` into a [`ResultPair<T, E>`].
pub trait SettleExt<T, E>: IntoFuture<Output = Result<T, E>> + Sized {
    /// Awaits the future and records its outcome.
    fn settle(self) -> impl Future<Output = ResultPair<T, E>> {
        crate::settle(self)
    }
}

impl<Fut, T, E> SettleExt<T, E> for Fut where Fut: IntoFuture<Output = Result<T, E>> {}
