//! Error types for the `hello-ves` demonstration.
//!
//! Failures of the demonstrated operations never surface here: they travel in
//! result pairs and are reported as warnings. `DemoError` only covers problems
//! with the demo itself.
use std::io;

use thiserror::Error;

/// Errors raised by the demonstration binary.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing walkthrough output failed.
    #[error("failed to write walkthrough output: {0}")]
    Output(#[from] io::Error),
    /// Command-line settings were rejected before any step ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The HTTP client for the whole-pair step could not be built.
    #[error("failed to build the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Validation issues detected in the command-line settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The fetch URL uses a scheme other than `http` or `https`.
    #[error("the fetch URL must use http or https (got {0:?})")]
    UnsupportedScheme(String),
    /// The path to read collapsed to nothing after trimming.
    #[error("the path to read must not be empty")]
    BlankPath,
}

/// Convenient result alias for the demonstration.
pub type Result<T, E = DemoError> = std::result::Result<T, E>;
