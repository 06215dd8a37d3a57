use std::{fs::File, io::Read as _, os::windows::io::AsRawHandle as _};

#[derive(Debug)]
pub struct ProbeFileImpl {
    inner: File,
}

impl ProbeFileImpl {
    pub fn new(file: File) -> Self {
        Self { inner: file }
    }

    pub fn descriptor(&self) -> i64 {
        self.inner.as_raw_handle() as usize as i64
    }

    pub fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }

    // std swallows CloseHandle failures, there is nothing to observe here
    pub fn close(self) -> std::io::Result<()> {
        drop(self.inner);
        Ok(())
    }
}
