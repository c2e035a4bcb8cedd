//! Consumers of decoded bytes.

use std::io::{self, Write};

/// Receives decoded output in the order it is produced.
pub trait ByteSink {
    fn accept(&mut self, data: &[u8]) -> io::Result<()>;
}

impl ByteSink for Vec<u8> {
    fn accept(&mut self, data: &[u8]) -> io::Result<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}

/// Forwards decoded output to any [`Write`].
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for WriteSink<W> {
    fn accept(&mut self, data: &[u8]) -> io::Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        self.inner.write_all(data)
    }
}
