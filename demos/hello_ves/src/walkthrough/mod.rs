//! The five call-site styles, run in order against a file and a URL.
//!
//! Each step prints a heading and whatever it managed to read to `out`.
//! Failures of the underlying operations are reported with `tracing::warn!`
//! and never abort the walkthrough, except in the loose-check step, which
//! stops early when its read fails.
use std::io::{self, Write};

use camino::Utf8Path;
use reqwest::Url;
use tracing::{info, warn};
use ves::{
    ResultPair, error_present, is_strict_success, is_success_pair, value_present, wrap,
    wrap_closure,
};

use crate::cli::Settings;
use crate::error::Result;
use crate::fetch::{Fetcher, json};

/// How far the walkthrough got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Every step ran.
    Finished,
    /// The loose-check step saw an error and stopped the walkthrough.
    StoppedAtLooseCheck,
}

/// Reads the whole file at `path`.
///
/// # Errors
///
/// Returns the I/O error reported by the filesystem.
pub async fn read_file(path: &Utf8Path) -> io::Result<Vec<u8>> {
    tokio::fs::read(path).await
}

/// Runs every step against `settings`, writing results to `out`.
///
/// # Errors
///
/// Returns [`crate::error::DemoError::Output`] when writing to `out` fails,
/// or [`crate::error::DemoError::HttpClient`] when the fetch step cannot
/// build its client.
pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Completion> {
    classic(&settings.path, out).await?;
    if loose_checks(&settings.path, out).await? == Completion::StoppedAtLooseCheck {
        return Ok(Completion::StoppedAtLooseCheck);
    }
    strict_check(&settings.path, out).await?;
    match &settings.url {
        Some(url) => whole_pair(&Fetcher::new()?, url, out).await?,
        None => info!("skipping the whole-pair fetch step"),
    }
    closure_style(&settings.path, out).await?;
    Ok(Completion::Finished)
}

/// Step 1: conventional `match` on the `Result`.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub async fn classic<W: Write>(path: &Utf8Path, out: &mut W) -> Result<()> {
    writeln!(out, "# 1. classic error handling")?;
    match read_file(path).await {
        Ok(bytes) => write_contents(out, &bytes)?,
        Err(error) => warn!(step = "classic", %path, %error, "read failed"),
    }
    Ok(())
}

/// Step 2: loose checks on each slot; stops the walkthrough on error.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub async fn loose_checks<W: Write>(path: &Utf8Path, out: &mut W) -> Result<Completion> {
    writeln!(out, "# 2. loose checks")?;
    let (buffer, error) = wrap(read_file).call((path,)).await.into_slots();
    if error_present(error.as_ref()) {
        warn!(step = "loose", %path, error = ?error, "read failed; stopping");
        return Ok(Completion::StoppedAtLooseCheck);
    }
    if value_present(buffer.as_ref()) {
        write_contents(out, buffer.as_deref().unwrap_or_default())?;
    }
    Ok(Completion::Finished)
}

/// Step 3: strict check across both slots.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub async fn strict_check<W: Write>(path: &Utf8Path, out: &mut W) -> Result<()> {
    writeln!(out, "# 3. strict check")?;
    let (buffer, error) = wrap(read_file).call((path,)).await.into_slots();
    if is_strict_success(buffer.as_ref(), error.as_ref()) {
        write_contents(out, buffer.as_deref().unwrap_or_default())?;
    } else {
        warn!(step = "strict", %path, error = ?error, "read failed");
    }
    Ok(())
}

/// Step 4: check the whole pair, then decode the response body as JSON.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub async fn whole_pair<W: Write>(fetcher: &Fetcher, url: &Url, out: &mut W) -> Result<()> {
    writeln!(out, "# 4. whole-pair check")?;
    let result = wrap(move |target: Url| fetcher.fetch(target))
        .call((url.clone(),))
        .await;
    if !is_success_pair(&result) {
        warn!(step = "whole-pair", %url, ?result, "fetch failed");
        return Ok(());
    }
    if let ResultPair::Ok(response) = result {
        let status = response.status();
        match json(response).await {
            Ok(body) => writeln!(out, "{body}")?,
            Err(error) => warn!(
                step = "whole-pair",
                %url,
                %status,
                %error,
                "response body is not JSON"
            ),
        }
    }
    Ok(())
}

/// Step 5: pre-bound closure with a strict check.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub async fn closure_style<W: Write>(path: &Utf8Path, out: &mut W) -> Result<()> {
    writeln!(out, "# 5. closure style")?;
    let (buffer, error) = wrap_closure(|| read_file(path)).await.into_slots();
    if is_strict_success(buffer.as_ref(), error.as_ref()) {
        write_contents(out, buffer.as_deref().unwrap_or_default())?;
    } else {
        warn!(step = "closure", %path, error = ?error, "read failed");
    }
    Ok(())
}

fn write_contents<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    writeln!(out, "{}", String::from_utf8_lossy(bytes))
}

#[cfg(test)]
mod tests;
