use std::{fs::File, io::Read as _};

#[derive(Debug)]
pub struct ProbeFileImpl {
    inner: File,
}

impl ProbeFileImpl {
    pub fn new(file: File) -> Self {
        Self { inner: file }
    }

    /// No descriptor numbers on this platform.
    pub fn descriptor(&self) -> i64 {
        -1
    }

    pub fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }

    pub fn close(self) -> std::io::Result<()> {
        drop(self.inner);
        Ok(())
    }
}
