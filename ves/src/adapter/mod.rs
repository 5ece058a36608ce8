//! Wrapping adapter turning fallible operations into pair-returning ones.
//!
//! Both entry points funnel into [`settle`], which awaits the operation once
//! and records `Ok` in the value slot and `Err` in the error slot. Nothing is
//! retried, logged by default, or rewritten on the way through.

mod operation;

use std::future::IntoFuture;

pub use operation::Operation;

use crate::ResultPair;

/// A wrapped operation whose calls always resolve to a [`ResultPair`].
///
/// Built by [`wrap`]. The handle can be called any number of times; each call
/// invokes the operation exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Wrapped<Op> {
    operation: Op,
}

impl<Op> Wrapped<Op> {
    /// Invokes the operation with `args` and settles its outcome.
    ///
    /// Arguments are passed as a tuple: `()` for none, `(a,)` for one,
    /// `(a, b)` for two, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::future::ready;
    /// use ves::{ResultPair, wrap};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let divide = wrap(|n: u32, d: u32| ready(n.checked_div(d).ok_or("divide by zero")));
    /// assert_eq!(divide.call((6_u32, 3_u32)).await, ResultPair::Ok(2));
    /// assert_eq!(divide.call((6_u32, 0_u32)).await, ResultPair::Failure("divide by zero"));
    /// # }
    /// ```
    pub async fn call<Args>(&self, args: Args) -> ResultPair<Op::Value, Op::Error>
    where
        Op: Operation<Args>,
    {
        settle(self.operation.invoke(args)).await
    }

    /// Borrows the wrapped operation.
    #[must_use]
    pub const fn operation(&self) -> &Op {
        &self.operation
    }

    /// Returns the wrapped operation.
    #[must_use]
    pub fn into_inner(self) -> Op {
        self.operation
    }
}

/// Wraps `operation` so that calling it yields a [`ResultPair`] instead of a
/// `Result`.
#[must_use]
pub const fn wrap<Op>(operation: Op) -> Wrapped<Op> {
    Wrapped { operation }
}

/// Runs a zero-argument closure and settles its outcome.
///
/// Equivalent to `wrap(closure).call(())` for call sites that bind their
/// arguments inside the closure.
///
/// # Examples
///
/// ```
/// use std::future::ready;
/// use ves::{ResultPair, wrap_closure};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let raw = "seven";
/// let pair = wrap_closure(|| ready(raw.parse::<u8>())).await;
/// assert!(matches!(pair, ResultPair::Failure(_)));
/// # }
/// ```
pub async fn wrap_closure<F, Fut, T, E>(closure: F) -> ResultPair<T, E>
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture<Output = Result<T, E>>,
{
    settle(closure()).await
}

/// Awaits `future` and records its outcome as a [`ResultPair`].
///
/// This is the single suspension point behind [`Wrapped::call`] and
/// [`wrap_closure`]. A future that never completes never settles.
pub async fn settle<Fut, T, E>(future: Fut) -> ResultPair<T, E>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    let pair = ResultPair::from(future.await);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        outcome = if pair.is_ok() { "ok" } else { "failure" },
        "operation settled"
    );
    pair
}
