//! This crate implements the core functionality of fsprobe
//!
//! This includes the verification procedure itself, the transcript it emits and the fixture it expects.

#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod fixture;
pub mod probe;
pub mod sink;
pub mod stage;
pub mod timestamp;

pub use config::{ProbeConfig, TimeZoneMode};
pub use error::ProbeError;
pub use probe::{Probe, ProbeReport};
pub use sink::{LogLine, ProbeSink};
pub use stage::Stage;
