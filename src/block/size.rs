//! Size queries over complete LZ4 blocks.
//!
//! Walks the sequence structure without producing output, so the exact
//! decompressed size of a block is known before any buffer is allocated.

use core::fmt;

use super::types::{split_token, LZ4_MAX_INPUT_SIZE, MINMATCH, ML_MASK, RUN_MASK};

/// Errors returned by [`decompressed_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Truncated or malformed sequence, or a size past `LZ4_MAX_INPUT_SIZE`.
    InvalidSequence,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::InvalidSequence => f.write_str("invalid LZ4 sequence"),
        }
    }
}

impl std::error::Error for SizeError {}

/// Worst-case decompressed size of `compressed_size` bytes of block data.
///
/// Each extension byte of 255 adds 255 output bytes, so no block can expand
/// by more than this factor.
#[inline]
pub fn decompress_bound(compressed_size: usize) -> usize {
    compressed_size.saturating_mul(255)
}

/// Continue a length field whose nibble saturated, starting at `*pos`.
fn read_length_ext(src: &[u8], pos: &mut usize, mut length: usize) -> Result<usize, SizeError> {
    loop {
        let b = *src.get(*pos).ok_or(SizeError::InvalidSequence)?;
        *pos += 1;
        length += b as usize;
        if length > LZ4_MAX_INPUT_SIZE {
            return Err(SizeError::InvalidSequence);
        }
        if b != 255 {
            return Ok(length);
        }
    }
}

/// Exact decompressed size of the complete block `src`.
///
/// The block must end right after a literal run whose token carries a zero
/// match length, as the gradual decoder requires for `MaybeFinished`.
/// Offsets are only checked for being non-zero: whether they fall inside the
/// available history depends on the dictionary used when decoding.
pub fn decompressed_size(src: &[u8]) -> Result<usize, SizeError> {
    let mut pos = 0usize;
    let mut total = 0usize;

    loop {
        let token = *src.get(pos).ok_or(SizeError::InvalidSequence)?;
        pos += 1;
        let (lit_nibble, ml_nibble) = split_token(token);

        let mut literals = lit_nibble as usize;
        if lit_nibble == RUN_MASK {
            literals = read_length_ext(src, &mut pos, literals)?;
        }
        if literals > src.len() - pos {
            return Err(SizeError::InvalidSequence);
        }
        pos += literals;
        total += literals;

        if pos == src.len() {
            return if ml_nibble == 0 && total <= LZ4_MAX_INPUT_SIZE {
                Ok(total)
            } else {
                Err(SizeError::InvalidSequence)
            };
        }

        let offset = src.get(pos..pos + 2).ok_or(SizeError::InvalidSequence)?;
        if offset == [0, 0] {
            return Err(SizeError::InvalidSequence);
        }
        pos += 2;

        let mut matched = ml_nibble as usize;
        if ml_nibble == ML_MASK {
            matched = read_length_ext(src, &mut pos, matched)?;
        }
        total += matched + MINMATCH;
        if total > LZ4_MAX_INPUT_SIZE {
            return Err(SizeError::InvalidSequence);
        }
    }
}
