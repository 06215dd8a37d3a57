//! The transcript a probe run emits, and the places it can be sent to.

use std::fmt;

use tracing::info;

/// One line of the probe transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    /// A progress or failure message.
    Message(String),
    /// The descriptor number of the opened file.
    Descriptor(i64),
    /// A byte read from the file, along with its index.
    Read { index: usize, value: u8 },
}

impl LogLine {
    pub fn message(text: impl Into<String>) -> Self {
        LogLine::Message(text.into())
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLine::Message(text) => write!(f, "log: {}", text),
            LogLine::Descriptor(fd) => write!(f, "log: {}", fd),
            LogLine::Read { index, value } => write!(f, "read: {} {}", index, value),
        }
    }
}

/// Receives the transcript of a probe run, line by line.
pub trait ProbeSink {
    fn emit(&mut self, line: LogLine);
}

impl<S: ProbeSink + ?Sized> ProbeSink for &mut S {
    fn emit(&mut self, line: LogLine) {
        S::emit(*self, line)
    }
}

/// Collects the transcript in memory.
impl ProbeSink for Vec<LogLine> {
    fn emit(&mut self, line: LogLine) {
        self.push(line)
    }
}

/// Prints each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ProbeSink for StdoutSink {
    fn emit(&mut self, line: LogLine) {
        println!("{}", line);
    }
}

/// Emits each line as a `tracing` event at `INFO` level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ProbeSink for TracingSink {
    fn emit(&mut self, line: LogLine) {
        match line {
            LogLine::Message(text) => info!(target: "fsprobe::transcript", "{}", text),
            LogLine::Descriptor(fd) => info!(target: "fsprobe::transcript", fd, "descriptor"),
            LogLine::Read { index, value } => {
                info!(target: "fsprobe::transcript", index, value, "read")
            }
        }
    }
}

/// Sends every line to both sinks.
#[derive(Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: ProbeSink, B: ProbeSink> ProbeSink for Tee<A, B> {
    fn emit(&mut self, line: LogLine) {
        self.0.emit(line.clone());
        self.1.emit(line);
    }
}

/// Renders a transcript the way [`StdoutSink`] prints it.
pub fn render_transcript(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
