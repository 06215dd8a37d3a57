use camino::Utf8PathBuf;
use snafu::Snafu;

use crate::stage::Stage;

/// Every way a probe run can fail.
///
/// The [`Display`](std::fmt::Display) output is the short fixed message logged to the transcript,
/// the underlying cause is kept as the error source (or as fields) for diagnostics.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ProbeError {
    #[snafu(display("open error"))]
    Open {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("stat error"))]
    Stat {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("read error"))]
    ReadIo { source: std::io::Error },
    #[snafu(display("read error"))]
    ShortRead { read: usize, expected: usize },
    #[snafu(display("data error"))]
    DataMismatch {
        index: usize,
        expected: u8,
        actual: u8,
    },
    #[snafu(display("close error"))]
    Close { source: std::io::Error },
}

impl ProbeError {
    /// The stage the probe was in when it failed.
    pub fn stage(&self) -> Stage {
        match self {
            ProbeError::Open { .. } => Stage::Opening,
            ProbeError::Stat { .. } => Stage::Stating,
            ProbeError::ReadIo { .. } | ProbeError::ShortRead { .. } => Stage::Reading,
            ProbeError::DataMismatch { .. } => Stage::Checking,
            ProbeError::Close { .. } => Stage::Closing,
        }
    }

    /// A longer human-readable description, including the underlying cause.
    pub fn details(&self) -> String {
        match self {
            ProbeError::Open { path, source } => format!("cannot open {}: {}", path, source),
            ProbeError::Stat { path, source } => format!("cannot stat {}: {}", path, source),
            ProbeError::ReadIo { source } => format!("read failed: {}", source),
            ProbeError::ShortRead { read, expected } => {
                format!("expected {} bytes, got {}", expected, read)
            }
            ProbeError::DataMismatch {
                index,
                expected,
                actual,
            } => format!("byte {} is {}, expected {}", index, actual, expected),
            ProbeError::Close { source } => format!("close failed: {}", source),
        }
    }
}
