use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use fsprobe_core::{config::DEFAULT_FIXTURE_PATH, fixture::write_fixture};
use tracing::info;

#[derive(clap::Args, Debug)]
pub struct SeedCommand {
    /// Path to the fixture file (will be created or truncated)
    #[clap(default_value = DEFAULT_FIXTURE_PATH)]
    pub path: Utf8PathBuf,
}

pub fn seed_command(command: SeedCommand) -> Result<()> {
    write_fixture(&command.path)
        .with_context(|| format!("Writing fixture to {}", command.path))?;
    info!("Wrote fixture to {}", command.path);
    Ok(())
}
