use std::process::ExitCode;

use anyhow::Result;
use camino::Utf8PathBuf;
use fsprobe_core::{
    Probe, ProbeConfig, ProbeError, ProbeReport, TimeZoneMode,
    config::DEFAULT_FIXTURE_PATH,
    sink::{StdoutSink, Tee, TracingSink},
};
use tracing::debug;

#[derive(clap::Args, Debug)]
pub struct VerifyCommand {
    /// Path to the file to verify
    #[clap(default_value = DEFAULT_FIXTURE_PATH)]
    pub path: Utf8PathBuf,
    /// Render timestamps in UTC instead of the local time zone
    #[clap(long)]
    pub utc: bool,
}

impl VerifyCommand {
    fn config(&self) -> ProbeConfig {
        let time_zone = if self.utc {
            TimeZoneMode::Utc
        } else {
            TimeZoneMode::Local
        };
        ProbeConfig::new(self.path.clone()).with_time_zone(time_zone)
    }
}

/// Any failure of the probe itself maps to exit status 1.
fn exit_status(result: &Result<ProbeReport, ProbeError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

pub fn verify_command(command: VerifyCommand) -> Result<ExitCode> {
    let config = command.config();
    debug!(?config, "Running probe");

    let mut probe = Probe::new(config, Tee(StdoutSink, TracingSink));
    let result = probe.run();

    Ok(ExitCode::from(exit_status(&result)))
}
