//! Pull-style providers of compressed bytes.
//!
//! A [`ByteSource`] hands out the next piece of the compressed stream on
//! request. An empty piece means end of stream.

use std::io::{self, Read};

/// Provider of compressed input in pieces.
pub trait ByteSource {
    /// Return up to `max` next bytes of the stream; empty at end of stream.
    ///
    /// The returned slice is only valid until the next call.
    fn pull(&mut self, max: usize) -> io::Result<&[u8]>;
}

// ---------------------------------------------------------------------------
// In-memory source
// ---------------------------------------------------------------------------

/// Serves a borrowed slice in pieces of at most `chunk` bytes.
///
/// Useful for exercising every split point of a stream: a `chunk` of 1 feeds
/// the decoder one byte at a time.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
    chunk: usize,
}

impl<'a> SliceSource<'a> {
    /// `chunk` is raised to 1 if 0.
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk: chunk.max(1),
        }
    }

    /// Bytes not yet pulled.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn pull(&mut self, max: usize) -> io::Result<&[u8]> {
        let n = max.min(self.chunk).min(self.remaining());
        let piece = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(piece)
    }
}

// ---------------------------------------------------------------------------
// Reader-backed source
// ---------------------------------------------------------------------------

/// Adapts any [`Read`] into a [`ByteSource`].
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn pull(&mut self, max: usize) -> io::Result<&[u8]> {
        if self.buf.len() < max {
            self.buf.resize(max, 0);
        }
        let n = loop {
            match self.inner.read(&mut self.buf[..max]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        Ok(&self.buf[..n])
    }
}
