//! Test helpers shared across crates in the `ves` workspace.
//!
//! Provides a comparable failure payload ([`Boom`]), an invocation counter
//! ([`CallCounter`]), and ready-made operations that succeed, fail, or
//! suspend before settling.

mod boom;
mod calls;
pub mod ops;

pub use boom::Boom;
pub use calls::CallCounter;
