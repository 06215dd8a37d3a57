
use std::{
    path::Path,
    time::{Duration, SystemTime},
};

use camino::Utf8PathBuf;
use similar_asserts::assert_eq;

use super::{Probe, ProbeReport};
use crate::{
    config::{ProbeConfig, TimeZoneMode},
    error::ProbeError,
    fixture::{EXPECTED, write_fixture},
    sink::{LogLine, render_transcript},
    stage::Stage,
    timestamp::format_ctime,
};

/// Modification time given to fixtures so transcripts are stable
pub const FIXTURE_MTIME: u64 = 1_000_000_000;

pub struct Fixture {
    // kept alive for the duration of the test
    _dir: tempfile::TempDir,
    pub path: Utf8PathBuf,
}

/// Creates a file with the given contents in a fresh temporary directory
pub fn fixture_with(contents: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_file");
    std::fs::write(&path, contents).unwrap();
    set_mtime(&path, SystemTime::UNIX_EPOCH + Duration::from_secs(FIXTURE_MTIME));

    Fixture {
        path: Utf8PathBuf::from_path_buf(path).unwrap(),
        _dir: dir,
    }
}

/// A path inside a temporary directory that does not exist
pub fn missing_fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_file");

    Fixture {
        path: Utf8PathBuf::from_path_buf(path).unwrap(),
        _dir: dir,
    }
}

fn set_mtime(path: &Path, time: SystemTime) {
    let file = std::fs::File::options().write(true).open(path).unwrap();
    file.set_modified(time).unwrap();
}

pub fn run_probe(path: &Utf8PathBuf) -> (Result<ProbeReport, ProbeError>, Vec<LogLine>) {
    let config = ProbeConfig::new(path.clone()).with_time_zone(TimeZoneMode::Utc);
    let mut probe = Probe::new(config, Vec::new());
    let result = probe.run();
    (result, probe.into_sink())
}

/// Renders the transcript with the descriptor number masked out, as it depends on the process state
pub fn redacted(lines: &[LogLine]) -> String {
    let lines = lines
        .iter()
        .map(|line| match line {
            LogLine::Descriptor(_) => LogLine::message("[fd]"),
            line => line.clone(),
        })
        .collect::<Vec<_>>();
    render_transcript(&lines)
}

#[test]
fn report_contents() {
    let fixture = fixture_with(&EXPECTED);
    let (result, lines) = run_probe(&fixture.path);
    let report = result.unwrap();

    assert_eq!(report.bytes, EXPECTED);
    assert_eq!(report.status.len, 5);
    assert_eq!(
        report.status.modified,
        SystemTime::UNIX_EPOCH + Duration::from_secs(FIXTURE_MTIME)
    );
    assert!(lines.contains(&LogLine::Descriptor(report.descriptor)));
    assert_eq!(lines.last(), Some(&LogLine::message("ok.")));
}

#[test]
fn seeded_fixture_passes() {
    let fixture = missing_fixture();
    write_fixture(&fixture.path).unwrap();

    let (result, _) = run_probe(&fixture.path);
    assert!(result.is_ok());
}

#[test]
fn missing_file_is_open_error() {
    let fixture = missing_fixture();
    let (result, lines) = run_probe(&fixture.path);

    let err = result.unwrap_err();
    assert!(matches!(err, ProbeError::Open { .. }));
    assert_eq!(err.stage(), Stage::Opening);
    assert_eq!(lines.last(), Some(&LogLine::message("open error")));
}

#[test]
fn short_file_is_read_error() {
    let fixture = fixture_with(&[0, 1, 4]);
    let (result, lines) = run_probe(&fixture.path);

    assert!(matches!(
        result,
        Err(ProbeError::ShortRead {
            read: 3,
            expected: 5
        })
    ));
    assert_eq!(lines.last(), Some(&LogLine::message("read error")));
}

#[test]
fn empty_file_is_read_error() {
    let fixture = fixture_with(&[]);
    let (result, _) = run_probe(&fixture.path);

    assert!(matches!(
        result,
        Err(ProbeError::ShortRead {
            read: 0,
            expected: 5
        })
    ));
}

#[cfg(unix)]
#[test]
fn directory_is_read_error() {
    // opening a directory read-only succeeds on unix, reading from it does not
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let (result, lines) = run_probe(&path);

    assert!(matches!(result, Err(ProbeError::ReadIo { .. })));
    assert_eq!(lines.last(), Some(&LogLine::message("read error")));
}

#[test]
fn trailing_bytes_are_ignored() {
    let fixture = fixture_with(&[0, 1, 4, 9, 16, 25, 36]);
    let (result, _) = run_probe(&fixture.path);

    assert_eq!(result.unwrap().bytes, EXPECTED);
}

#[test]
fn mismatch_reports_first_bad_byte() {
    let fixture = fixture_with(&[0, 1, 4, 8, 15]);
    let (result, lines) = run_probe(&fixture.path);

    assert!(matches!(
        result,
        Err(ProbeError::DataMismatch {
            index: 3,
            expected: 9,
            actual: 8
        })
    ));
    // nothing past the first mismatch is logged
    assert!(!lines.contains(&LogLine::Read {
        index: 4,
        value: 15
    }));
}

#[test]
fn repeated_runs_are_identical() {
    let fixture = fixture_with(&EXPECTED);

    let (first_result, first) = run_probe(&fixture.path);
    let (second_result, second) = run_probe(&fixture.path);

    assert!(first_result.is_ok());
    assert!(second_result.is_ok());
    assert_eq!(redacted(&first), redacted(&second));
    assert_eq!(std::fs::read(&fixture.path).unwrap(), EXPECTED);
}

#[test]
fn timestamps_are_placeholder_then_mtime() {
    let fixture = fixture_with(&EXPECTED);
    let (_, lines) = run_probe(&fixture.path);

    let actual_mtime = std::fs::metadata(&fixture.path).unwrap().modified().unwrap();
    let stating = lines
        .iter()
        .position(|line| *line == LogLine::message("stating"))
        .unwrap();

    assert_eq!(
        lines[stating + 1],
        LogLine::message("Thu Jan  1 00:00:00 1970")
    );
    assert_eq!(
        lines[stating + 2],
        LogLine::message(format_ctime(actual_mtime, TimeZoneMode::Utc))
    );
}
