//! `hello-ves` entry point: parse settings, install logging, run the walkthrough.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hello_ves::cli::DemoCli;
use hello_ves::error::Result;
use hello_ves::walkthrough::run;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    demo().await.map_err(color_eyre::eyre::Report::from)
}

async fn demo() -> Result<()> {
    let settings = DemoCli::parse().settings()?;
    let mut stdout = std::io::stdout().lock();
    let completion = run(&settings, &mut stdout).await?;
    info!(?completion, "walkthrough finished");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
