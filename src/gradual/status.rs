//! Status and error codes reported by the gradual decoder.
//!
//! Decoding never "succeeds" mid-stream: every call ends either with a
//! flow-control [`Status`] telling the caller what the decoder is waiting
//! for, or with a fatal [`GradualError`] that halts the context.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Flow-control statuses
// ─────────────────────────────────────────────────────────────────────────────

/// Why a call to [`GradualDecoder::decode`](super::GradualDecoder::decode)
/// returned without error.
///
/// None of these are failures; the caller resupplies input or output space
/// and calls again, or treats [`Status::MaybeFinished`] as end of stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The decoder sits exactly at the end of a literal-only sequence.
    /// If the caller has no further input the block is complete.
    MaybeFinished,
    /// All supplied input was consumed; more compressed bytes are needed.
    NeedInput,
    /// The output region is full; decoded bytes are still pending.
    NeedOutput,
}

impl Status {
    /// Numeric code of the status (negative, never 0).
    pub fn code(self) -> i32 {
        match self {
            Status::MaybeFinished => -1,
            Status::NeedInput => -2,
            Status::NeedOutput => -3,
        }
    }

    /// Stable upper-case name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::MaybeFinished => "MAYBE_FINISHED",
            Status::NeedInput => "NEED_INPUT",
            Status::NeedOutput => "NEED_OUTPUT",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fatal errors
// ─────────────────────────────────────────────────────────────────────────────

/// Fatal conditions. Once returned, the decoder context is halted and keeps
/// returning the same error until it is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradualError {
    /// The prefix window could not be allocated.
    NoMemory,
    /// A match offset reaches further back than the retained window (or a
    /// dictionary larger than the window capacity was supplied).
    OutOfPrefixBuffer,
    /// Malformed sequence: zero offset or a length overflowing
    /// `LZ4_MAX_INPUT_SIZE`.
    InvalidSequence,
    /// An internal invariant was violated. Indicates a decoder bug.
    Internal,
}

impl GradualError {
    /// Numeric code of the error (positive).
    pub fn code(self) -> i32 {
        match self {
            GradualError::NoMemory => 1,
            GradualError::OutOfPrefixBuffer => 2,
            GradualError::InvalidSequence => 3,
            GradualError::Internal => 99,
        }
    }

    /// Stable upper-case name of the error.
    pub fn as_str(self) -> &'static str {
        match self {
            GradualError::NoMemory => "ERROR_NO_MEMORY",
            GradualError::OutOfPrefixBuffer => "ERROR_OUT_OF_PREFIX_BUFFER",
            GradualError::InvalidSequence => "ERROR_INVALID_SEQUENCE",
            GradualError::Internal => "ERROR_INTERNAL",
        }
    }
}

impl fmt::Display for GradualError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for GradualError {}

// ─────────────────────────────────────────────────────────────────────────────
// Per-call result
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of one successful decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// What the decoder is waiting for.
    pub status: Status,
    /// Compressed bytes consumed from the front of the input slice.
    pub consumed: usize,
    /// Decoded bytes written to the front of the output slice.
    pub produced: usize,
}
