use std::{fs::File, path::Path, time::SystemTime};

use self::sys::ProbeFileImpl;

mod sys;

/// A read-only file handle that exposes its platform descriptor and reports the status of `close`
///
/// Dropping it without calling [`ProbeFile::close`] still releases the handle, but any close failure goes unnoticed.
#[derive(Debug)]
pub struct ProbeFile {
    impl_: ProbeFileImpl,
}

impl ProbeFile {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;

        Ok(Self {
            impl_: ProbeFileImpl::new(file),
        })
    }

    /// The descriptor number the OS assigned to this handle (`-1` where there is no such concept).
    pub fn descriptor(&self) -> i64 {
        self.impl_.descriptor()
    }

    /// Reads until `buf` is full or the end of file is reached, returning the number of bytes read.
    ///
    /// Unlike [`std::io::Read::read_exact`], hitting the end of file early is not an error.
    pub fn read_up_to(&mut self, mut buf: &mut [u8]) -> std::io::Result<usize> {
        let mut total = 0;
        while !buf.is_empty() {
            match self.impl_.read(buf) {
                Ok(0) => break,
                Ok(read) => {
                    total += read;
                    buf = &mut buf[read..];
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        Ok(total)
    }

    pub fn close(self) -> std::io::Result<()> {
        self.impl_.close()
    }
}

/// Status metadata of a file, as returned by [`stat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    pub modified: SystemTime,
    pub len: u64,
}

/// Queries status metadata by path, following symlinks.
pub fn stat(path: impl AsRef<Path>) -> std::io::Result<FileStatus> {
    let metadata = std::fs::metadata(path)?;

    Ok(FileStatus {
        modified: metadata.modified()?,
        len: metadata.len(),
    })
}
