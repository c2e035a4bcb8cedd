//! Source-to-sink decode driver.
//!
//! [`decode_stream`] owns the pump loop around a [`GradualDecoder`]: it pulls
//! input in `Prefs::in_chunk` pieces, hands the decoder a fixed
//! `Prefs::out_chunk` output buffer, forwards whatever was produced to the
//! sink, and interprets the final status once the source is exhausted.

use std::fmt;
use std::io;

use super::prefs::Prefs;
use super::sink::ByteSink;
use super::source::ByteSource;
use crate::gradual::{GradualDecoder, GradualError, Status};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by the stream driver.
#[derive(Debug)]
pub enum StreamError {
    /// Reading the source or writing the sink failed.
    Io(io::Error),
    /// The decoder reported a fatal error.
    Decode(GradualError),
    /// The source ended in the middle of a sequence.
    Truncated,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {e}"),
            StreamError::Decode(e) => write!(f, "decode error: {e}"),
            StreamError::Truncated => f.write_str("compressed stream ends mid-sequence"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Decode(e) => Some(e),
            StreamError::Truncated => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<GradualError> for StreamError {
    fn from(e: GradualError) -> Self {
        StreamError::Decode(e)
    }
}

impl From<GradualError> for io::Error {
    fn from(e: GradualError) -> Self {
        let kind = match e {
            GradualError::NoMemory => io::ErrorKind::OutOfMemory,
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Byte counts of a completed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    pub compressed: u64,
    pub decompressed: u64,
}

/// Build a decoder configured from `prefs`.
pub fn decoder_from_prefs(prefs: &Prefs) -> Result<GradualDecoder, GradualError> {
    match prefs.dictionary.as_deref() {
        Some(dict) => GradualDecoder::with_dictionary(prefs.window_capacity, dict),
        None => GradualDecoder::new(prefs.window_capacity),
    }
}

/// Decode the whole of `source` into `sink`.
///
/// `MaybeFinished` when the source runs dry is success; `NeedInput` there
/// means the stream was cut short and yields [`StreamError::Truncated`].
pub fn decode_stream<S, K>(
    source: &mut S,
    sink: &mut K,
    prefs: &Prefs,
) -> Result<StreamSummary, StreamError>
where
    S: ByteSource + ?Sized,
    K: ByteSink + ?Sized,
{
    let mut dec = decoder_from_prefs(prefs)?;
    let mut out = vec![0u8; prefs.out_chunk.max(1)];
    let in_chunk = prefs.in_chunk.max(1);
    let mut last = Status::NeedInput;

    loop {
        let mut rest = source.pull(in_chunk)?;
        if rest.is_empty() {
            break;
        }
        loop {
            let p = dec.decode(rest, &mut out)?;
            sink.accept(&out[..p.produced])?;
            rest = &rest[p.consumed..];
            last = p.status;
            if p.status != Status::NeedOutput {
                break;
            }
        }
        crate::displaylevel!(
            4,
            "\rDecoded : {} <- {} bytes",
            dec.total_out(),
            dec.total_in()
        );
    }
    crate::displaylevel!(4, "\n");

    match last {
        Status::MaybeFinished => Ok(StreamSummary {
            compressed: dec.total_in(),
            decompressed: dec.total_out(),
        }),
        _ => Err(StreamError::Truncated),
    }
}
