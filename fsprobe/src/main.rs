mod seed;
mod verify;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{seed::SeedCommand, verify::VerifyCommand};

#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[clap(subcommand)]
    action: FsprobeAction,
}

#[derive(clap::Subcommand, Debug)]
enum FsprobeAction {
    /// Open, stat, read, check and close the fixture file, logging each step
    Verify(VerifyCommand),
    /// Write the fixture file the verification expects
    Seed(SeedCommand),
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();
    let args = Args::parse();
    match args.action {
        FsprobeAction::Verify(cmd) => verify::verify_command(cmd),
        FsprobeAction::Seed(cmd) => seed::seed_command(cmd).map(|()| ExitCode::SUCCESS),
    }
}
