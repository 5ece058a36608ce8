//! Library facade for the `hello-ves` demonstration so integration tests can
//! drive each walkthrough step directly.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod walkthrough;
