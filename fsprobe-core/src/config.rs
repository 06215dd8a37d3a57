use camino::Utf8PathBuf;

/// Name of the fixture file when no path is configured.
pub const DEFAULT_FIXTURE_PATH: &str = "test_file";

/// The time zone timestamps are rendered in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneMode {
    /// The process' local time zone, like `ctime(3)`.
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Location of the file to verify
    pub path: Utf8PathBuf,
    pub time_zone: TimeZoneMode,
}

impl ProbeConfig {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            time_zone: TimeZoneMode::default(),
        }
    }

    pub fn with_time_zone(self, time_zone: TimeZoneMode) -> Self {
        Self { time_zone, ..self }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FIXTURE_PATH)
    }
}
