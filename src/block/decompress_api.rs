//! One-shot LZ4 block decompression.
//!
//! Convenience wrappers that run a whole block through a fresh
//! [`GradualDecoder`] in a single call. They are fully safe and share every
//! validation rule with the gradual path:
//!
//!   - `decompress_safe`: no history;
//!   - `decompress_safe_using_dict`: matches may reach into `dict`;
//!   - `decompress_to_vec`: sizes the output with a pre-scan.

use core::fmt;

use super::size::decompressed_size;
use crate::config::MAX_PREFIX_LENGTH;
use crate::gradual::{GradualDecoder, GradualError, Status};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by the one-shot block decompression functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The block is malformed or references history that is not available.
    MalformedInput,
    /// The block ends in the middle of a sequence.
    Truncated,
    /// The decoded block does not fit the destination.
    OutputTooSmall,
    /// The decoder window could not be allocated.
    NoMemory,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::MalformedInput => f.write_str("malformed LZ4 block"),
            DecompressError::Truncated => f.write_str("truncated LZ4 block"),
            DecompressError::OutputTooSmall => f.write_str("output buffer too small"),
            DecompressError::NoMemory => f.write_str("out of memory"),
        }
    }
}

impl std::error::Error for DecompressError {}

impl From<GradualError> for DecompressError {
    fn from(err: GradualError) -> Self {
        match err {
            GradualError::NoMemory => DecompressError::NoMemory,
            _ => DecompressError::MalformedInput,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public — one-shot API
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a full LZ4 block with no dictionary.
///
/// Returns the number of bytes written into `dst`.
pub fn decompress_safe(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    decompress_safe_using_dict(src, dst, &[])
}

/// Decompress a full LZ4 block whose matches may reference `dict`.
///
/// Only the last 64 KiB of `dict` are visible to the block.
pub fn decompress_safe_using_dict(
    src: &[u8],
    dst: &mut [u8],
    dict: &[u8],
) -> Result<usize, DecompressError> {
    let mut dec = GradualDecoder::with_dictionary(MAX_PREFIX_LENGTH, dict)?;
    let progress = dec.decode(src, dst)?;
    match progress.status {
        Status::MaybeFinished => Ok(progress.produced),
        Status::NeedInput => Err(DecompressError::Truncated),
        Status::NeedOutput => Err(DecompressError::OutputTooSmall),
    }
}

/// Decompress a full LZ4 block into an exactly sized `Vec`.
pub fn decompress_to_vec(src: &[u8], dict: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let size = decompressed_size(src).map_err(|_| DecompressError::MalformedInput)?;
    let mut dst = Vec::new();
    dst.try_reserve_exact(size)
        .map_err(|_| DecompressError::NoMemory)?;
    dst.resize(size, 0);
    let n = decompress_safe_using_dict(src, &mut dst, dict)?;
    dst.truncate(n);
    Ok(dst)
}
