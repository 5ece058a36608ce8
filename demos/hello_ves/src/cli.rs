//! Command-line settings for the `hello-ves` demonstration.
//!
//! Every option can also come from a `HELLO_VES_*` environment variable so
//! tests and scripts can drive the binary without arguments.
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use reqwest::Url;

use crate::error::ValidationError;

/// Resource fetched when no URL is given.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Command-line surface exposed by the demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "hello-ves",
    bin_name = "hello-ves",
    about = "Walk through settling fallible operations into value-or-error pairs",
    version
)]
pub struct DemoCli {
    /// File read by the file-based steps.
    #[arg(
        long,
        short = 'p',
        value_name = "PATH",
        env = "HELLO_VES_PATH",
        default_value = "Cargo.toml"
    )]
    pub path: Utf8PathBuf,
    /// URL fetched by the whole-pair step.
    #[arg(
        long,
        short = 'u',
        value_name = "URL",
        env = "HELLO_VES_URL",
        default_value = DEFAULT_URL
    )]
    pub url: Url,
    /// Skips the network step entirely.
    #[arg(long, env = "HELLO_VES_SKIP_FETCH", action = ArgAction::SetTrue)]
    pub skip_fetch: bool,
}

/// Validated settings consumed by the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File read by the file-based steps.
    pub path: Utf8PathBuf,
    /// URL for the whole-pair step, or `None` when skipped.
    pub url: Option<Url>,
}

impl DemoCli {
    /// Checks the raw options and produces walkthrough settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the path is blank or the URL does
    /// not use HTTP or HTTPS.
    pub fn settings(&self) -> Result<Settings, ValidationError> {
        if self.path.as_str().trim().is_empty() {
            return Err(ValidationError::BlankPath);
        }
        let url = if self.skip_fetch {
            None
        } else {
            Some(self.checked_url()?)
        };
        Ok(Settings {
            path: self.path.clone(),
            url,
        })
    }

    fn checked_url(&self) -> Result<Url, ValidationError> {
        match self.url.scheme() {
            "http" | "https" => Ok(self.url.clone()),
            other => Err(ValidationError::UnsupportedScheme(other.to_owned())),
        }
    }
}
