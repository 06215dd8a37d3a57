//! The verification procedure: open, stat, read, check and close a single file.
//!
//! Every step logs its progress to a [`ProbeSink`], and the first failure ends the run.
//! On failure the short error message is logged as the last line of the transcript.

use std::time::{Instant, SystemTime};

pub use fsprobe_primitives::probe_file::FileStatus;
use fsprobe_primitives::probe_file::{self, ProbeFile};
use snafu::{ResultExt as _, ensure};
use tracing::{debug, debug_span, error};

use crate::{
    config::ProbeConfig,
    error::{
        CloseSnafu, DataMismatchSnafu, OpenSnafu, ProbeError, ReadIoSnafu, ShortReadSnafu,
        StatSnafu,
    },
    fixture::{FIXTURE_LEN, expected_byte},
    sink::{LogLine, ProbeSink},
    stage::Stage,
    timestamp::format_ctime,
};

/// What a successful run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub descriptor: i64,
    pub status: FileStatus,
    pub bytes: [u8; FIXTURE_LEN],
}

pub struct Probe<S> {
    config: ProbeConfig,
    sink: S,
}

impl<S: ProbeSink> Probe<S> {
    pub fn new(config: ProbeConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs the whole procedure once.
    ///
    /// The file is only read, so running it repeatedly against the same file produces the same transcript.
    pub fn run(&mut self) -> Result<ProbeReport, ProbeError> {
        match run_stages(&self.config, &mut self.sink) {
            Ok(report) => {
                enter(&mut self.sink, Stage::Done);
                Ok(report)
            }
            Err(err) => {
                error!(stage = ?err.stage(), "{}", err.details());
                self.sink.emit(LogLine::message(err.to_string()));
                Err(err)
            }
        }
    }
}

fn enter<S: ProbeSink>(sink: &mut S, stage: Stage) {
    sink.emit(LogLine::message(stage.progress_message()));
}

/// Runs one filesystem operation inside a span, recording how long it took.
fn timed<T>(stage: Stage, op: impl FnOnce() -> T) -> T {
    let _span = debug_span!("stage", ?stage).entered();
    let start = Instant::now();
    let result = op();
    debug!(elapsed = ?start.elapsed(), "finished");
    result
}

fn run_stages<S: ProbeSink>(config: &ProbeConfig, sink: &mut S) -> Result<ProbeReport, ProbeError> {
    let path = &config.path;

    enter(sink, Stage::Opening);
    let mut file = timed(Stage::Opening, || ProbeFile::open(path)).context(OpenSnafu {
        path: path.clone(),
    })?;
    let descriptor = file.descriptor();
    sink.emit(LogLine::Descriptor(descriptor));

    enter(sink, Stage::Stating);
    // nothing has been queried yet, log the epoch in place of a real timestamp
    sink.emit(LogLine::message(format_ctime(
        SystemTime::UNIX_EPOCH,
        config.time_zone,
    )));
    let status = timed(Stage::Stating, || probe_file::stat(path)).context(StatSnafu {
        path: path.clone(),
    })?;
    debug!(len = status.len, "stat");
    sink.emit(LogLine::message(format_ctime(
        status.modified,
        config.time_zone,
    )));

    enter(sink, Stage::Reading);
    let mut bytes = [0u8; FIXTURE_LEN];
    let read = timed(Stage::Reading, || file.read_up_to(&mut bytes)).context(ReadIoSnafu)?;
    ensure!(
        read == FIXTURE_LEN,
        ShortReadSnafu {
            read,
            expected: FIXTURE_LEN,
        }
    );

    enter(sink, Stage::Checking);
    for (index, &value) in bytes.iter().enumerate() {
        sink.emit(LogLine::Read { index, value });
        let expected = expected_byte(index);
        ensure!(
            value == expected,
            DataMismatchSnafu {
                index,
                expected,
                actual: value,
            }
        );
    }

    enter(sink, Stage::Closing);
    timed(Stage::Closing, || file.close()).context(CloseSnafu)?;

    Ok(ProbeReport {
        descriptor,
        status,
        bytes,
    })
}

#[cfg(test)]
mod tests;
