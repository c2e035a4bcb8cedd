//! [`Read`] adapter over a compressed [`ByteSource`].

use std::io::{self, Read};

use super::prefs::Prefs;
use super::source::ByteSource;
use super::stream::decoder_from_prefs;
use crate::gradual::{GradualDecoder, Status};

/// Decodes a raw LZ4 block stream lazily as it is read.
///
/// Each `read` decodes straight into the caller's buffer. `Ok(0)` is
/// returned once the source is exhausted at a valid block end; a source that
/// ends mid-sequence yields `UnexpectedEof`, and decoder errors surface as
/// `InvalidData`.
pub struct GradualReader<S> {
    source: S,
    decoder: GradualDecoder,
    in_chunk: usize,
    pending: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl<S: ByteSource> GradualReader<S> {
    pub fn new(source: S, prefs: &Prefs) -> io::Result<Self> {
        Ok(Self {
            source,
            decoder: decoder_from_prefs(prefs)?,
            in_chunk: prefs.in_chunk.max(1),
            pending: Vec::new(),
            pos: 0,
            eof: false,
        })
    }

    pub fn decoder(&self) -> &GradualDecoder {
        &self.decoder
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    fn refill(&mut self) -> io::Result<()> {
        let piece = self.source.pull(self.in_chunk)?;
        if piece.is_empty() {
            self.eof = true;
        } else {
            self.pending.clear();
            self.pending.extend_from_slice(piece);
            self.pos = 0;
        }
        Ok(())
    }
}

impl<S: ByteSource> Read for GradualReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos == self.pending.len() && !self.eof {
                self.refill()?;
            }
            let p = self.decoder.decode(&self.pending[self.pos..], buf)?;
            self.pos += p.consumed;
            if p.produced > 0 {
                return Ok(p.produced);
            }
            if self.eof {
                return match p.status {
                    Status::MaybeFinished => Ok(0),
                    _ => Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "compressed stream ends mid-sequence",
                    )),
                };
            }
        }
    }
}
