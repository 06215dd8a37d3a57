use std::{
    fs::File,
    io::Read as _,
    os::fd::{AsRawFd as _, IntoRawFd as _},
};

#[derive(Debug)]
pub struct ProbeFileImpl {
    inner: File,
}

impl ProbeFileImpl {
    pub fn new(file: File) -> Self {
        Self { inner: file }
    }

    pub fn descriptor(&self) -> i64 {
        self.inner.as_raw_fd() as i64
    }

    pub fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }

    pub fn close(self) -> std::io::Result<()> {
        let fd = self.inner.into_raw_fd();
        // SAFETY: `fd` was just released from an owned `File`, so nothing else closes it
        let rv = unsafe { libc::close(fd) };
        if rv != 0 {
            return Err(std::io::Error::last_os_error());
        }
        Ok(())
    }
}
