//! A utility crate containing the platform-facing file primitives used by fsprobe.

pub mod probe_file;
