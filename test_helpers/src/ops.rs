//! Ready-made fallible operations.
//!
//! [`succeed_with`] and [`fail_with`] settle on first poll. [`resolve_later`]
//! and [`reject_later`] hand control back to the executor once before
//! settling, so callers exercise a real suspension.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::Boom;

/// Returns a future that immediately succeeds with `value`.
pub fn succeed_with<T>(value: T) -> Ready<Result<T, Boom>> {
    ready(Ok(value))
}

/// Returns a future that immediately fails with a [`Boom`] carrying
/// `message`.
pub fn fail_with<T>(message: &str) -> Ready<Result<T, Boom>> {
    ready(Err(Boom::new(message)))
}

/// Yields once, then succeeds with `value`.
///
/// # Errors
///
/// Never fails; the `Result` matches the shape of wrapped operations.
pub async fn resolve_later<T>(value: T) -> Result<T, Boom> {
    yield_once().await;
    Ok(value)
}

/// Yields once, then fails with a [`Boom`] carrying `message`.
///
/// # Errors
///
/// Always returns the [`Boom`] after yielding.
pub async fn reject_later<T>(message: String) -> Result<T, Boom> {
    yield_once().await;
    Err(Boom::new(message))
}

/// Future that returns `Pending` exactly once before completing.
#[derive(Debug, Default)]
pub struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Yields execution back to the executor once.
#[must_use]
pub fn yield_once() -> YieldOnce {
    YieldOnce::default()
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    use super::{fail_with, resolve_later};
    use crate::Boom;

    #[test]
    fn resolve_later_is_pending_on_first_poll() {
        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = pin!(resolve_later(5_u8));
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Ok(5)));
    }

    #[test]
    fn fail_with_settles_on_first_poll() {
        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = pin!(fail_with::<u8>("boom"));
        assert_eq!(
            fut.as_mut().poll(&mut cx),
            Poll::Ready(Err(Boom::new("boom")))
        );
    }
}
