//! Unit tests for the file-based walkthrough steps.

use anyhow::{Context, Result, ensure};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::{Completion, classic, closure_style, loose_checks, run, strict_check};
use crate::cli::Settings;

struct Scratch {
    _dir: TempDir,
    present: Utf8PathBuf,
    missing: Utf8PathBuf,
}

#[fixture]
fn scratch() -> Result<Scratch> {
    let dir = tempfile::tempdir()?;
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .map_err(|path| anyhow::anyhow!("non UTF-8 temp dir {}", path.display()))?;
    let present = root.join("manifest.toml");
    std::fs::write(&present, "name = \"demo\"").context("write scratch manifest")?;
    Ok(Scratch {
        _dir: dir,
        present,
        missing: root.join("absent.toml"),
    })
}

fn output(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).context("walkthrough output is UTF-8")
}

#[rstest]
#[tokio::test]
async fn every_file_step_prints_the_contents(scratch: Result<Scratch>) -> Result<()> {
    let files = scratch?;
    let settings = Settings {
        path: files.present.clone(),
        url: None,
    };
    let mut out = Vec::new();
    let completion = run(&settings, &mut out).await?;
    let text = output(out)?;

    ensure!(completion == Completion::Finished, "unexpected {completion:?}");
    ensure!(
        text.matches("name = \"demo\"").count() == 4,
        "contents should appear once per file step:\n{text}"
    );
    ensure!(!text.contains("# 4."), "fetch step should be skipped:\n{text}");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn missing_file_stops_at_the_loose_check(scratch: Result<Scratch>) -> Result<()> {
    let files = scratch?;
    let settings = Settings {
        path: files.missing.clone(),
        url: None,
    };
    let mut out = Vec::new();
    let completion = run(&settings, &mut out).await?;
    let text = output(out)?;

    ensure!(
        completion == Completion::StoppedAtLooseCheck,
        "unexpected {completion:?}"
    );
    ensure!(
        text == "# 1. classic error handling\n# 2. loose checks\n",
        "unexpected output:\n{text}"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn strict_and_closure_steps_agree_on_failure(scratch: Result<Scratch>) -> Result<()> {
    let files = scratch?;
    let mut strict = Vec::new();
    strict_check(&files.missing, &mut strict).await?;
    let mut closure = Vec::new();
    closure_style(&files.missing, &mut closure).await?;

    ensure!(output(strict)? == "# 3. strict check\n", "strict step printed contents");
    ensure!(
        output(closure)? == "# 5. closure style\n",
        "closure step printed contents"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn loose_check_continues_after_a_successful_read(
    scratch: Result<Scratch>,
) -> Result<()> {
    let files = scratch?;
    let mut out = Vec::new();
    let completion = loose_checks(&files.present, &mut out).await?;
    ensure!(completion == Completion::Finished, "unexpected {completion:?}");

    let mut classic_out = Vec::new();
    classic(&files.present, &mut classic_out).await?;
    let loose_text = output(out)?;
    let classic_text = output(classic_out)?;
    ensure!(
        loose_text.lines().nth(1) == classic_text.lines().nth(1),
        "loose and classic steps should print the same contents"
    );
    Ok(())
}
