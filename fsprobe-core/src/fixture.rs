//! The file contents a probe expects to find.

use std::path::Path;

/// Number of bytes the probe reads and checks.
pub const FIXTURE_LEN: usize = 5;

/// The byte expected at `index`: the square of the index.
pub const fn expected_byte(index: usize) -> u8 {
    (index * index) as u8
}

/// `[0, 1, 4, 9, 16]`
pub const EXPECTED: [u8; FIXTURE_LEN] = {
    let mut bytes = [0u8; FIXTURE_LEN];
    let mut i = 0;
    while i < FIXTURE_LEN {
        bytes[i] = expected_byte(i);
        i += 1;
    }
    bytes
};

/// Writes the expected contents to `path`, creating or truncating the file.
pub fn write_fixture(path: impl AsRef<Path>) -> std::io::Result<()> {
    std::fs::write(path, EXPECTED)
}
