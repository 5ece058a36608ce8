//! Uniform calling convention for operations of different arities.
//!
//! Arguments travel as a tuple so a single [`Operation`] trait covers any
//! `Fn(A, B, ..) -> F` where `F` resolves to a `Result`.

use std::future::{Future, IntoFuture};

/// An operation that can be invoked with the argument tuple `Args`.
///
/// Implemented for every `Fn` of up to six arguments whose return value
/// converts into a future of `Result<Value, Error>`. Synchronous operations
/// return [`std::future::ready`].
pub trait Operation<Args> {
    /// Value produced on success.
    type Value;
    /// Payload produced on failure.
    type Error;
    /// Future driving one invocation to completion.
    type Future: Future<Output = Result<Self::Value, Self::Error>>;

    /// Starts one invocation with `args`.
    fn invoke(&self, args: Args) -> Self::Future;
}

macro_rules! impl_operation {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, Fut, T, E, $($ty,)*> Operation<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Fut,
            Fut: IntoFuture<Output = Result<T, E>>,
        {
            type Value = T;
            type Error = E;
            type Future = Fut::IntoFuture;

            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Self::Future {
                (self)($($arg),*).into_future()
            }
        }
    };
}

impl_operation!();
impl_operation!(a: A);
impl_operation!(a: A, b: B);
impl_operation!(a: A, b: B, c: C);
impl_operation!(a: A, b: B, c: C, d: D);
impl_operation!(a: A, b: B, c: C, d: D, e: E2);
impl_operation!(a: A, b: B, c: C, d: D, e: E2, f: F);
