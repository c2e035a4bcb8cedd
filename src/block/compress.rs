//! LZ4 block compression — fast greedy encoder.
//!
//! Produces raw LZ4 blocks readable by any conforming decoder, including the
//! gradual decoder in this crate. It is the encoding collaborator used by the
//! `lz4g encode` command, the benches and the round-trip tests; it favours
//! simplicity over ratio (single-probe hash table, no backward match
//! extension, no high-compression search).
//!
//! The encoder respects the block parsing restrictions:
//!   - the last [`LASTLITERALS`] bytes are always literals;
//!   - the last match starts at least [`MFLIMIT`] bytes before the end;
//!   - offsets never exceed [`LZ4_DISTANCE_MAX`].
//!
//! With a dictionary, matches may reach back into the last 64 KiB of it; the
//! decoder must then be seeded with the same dictionary.
//!
//! [`LASTLITERALS`]: super::types::LASTLITERALS
//! [`MFLIMIT`]: super::types::MFLIMIT
//! [`LZ4_DISTANCE_MAX`]: super::types::LZ4_DISTANCE_MAX

use core::fmt;

use super::types::{
    hash4, read_le32, LASTLITERALS, LZ4_DISTANCE_MAX, LZ4_HASH_SIZE, LZ4_MAX_INPUT_SIZE,
    LZ4_MIN_LENGTH, MFLIMIT, MINMATCH, ML_BITS, ML_MASK, RUN_MASK,
};
use crate::config::MAX_PREFIX_LENGTH;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Higher → faster on incompressible data at the cost of compression ratio.
const LZ4_SKIP_TRIGGER: u32 = 6;

/// Empty hash-table slot.
const NO_POSITION: u32 = u32::MAX;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block compression functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Error {
    /// The output buffer is too small to hold the compressed data.
    OutputTooSmall,
    /// The input exceeds `LZ4_MAX_INPUT_SIZE`.
    InputTooLarge,
}

impl fmt::Display for Lz4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz4Error::OutputTooSmall => f.write_str("output buffer too small"),
            Lz4Error::InputTooLarge => f.write_str("input exceeds LZ4_MAX_INPUT_SIZE"),
        }
    }
}

impl std::error::Error for Lz4Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Utility
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for a given input size.
///
/// Returns 0 if `input_size` exceeds `LZ4_MAX_INPUT_SIZE`.
/// Equivalent to `LZ4_compressBound` / `LZ4_COMPRESSBOUND`.
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    if input_size > LZ4_MAX_INPUT_SIZE {
        0
    } else {
        input_size + (input_size / 255) + 16
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output writer
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds-checked append-only view over the destination buffer.
struct BlockWriter<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> BlockWriter<'a> {
    fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, pos: 0 }
    }

    fn push(&mut self, b: u8) -> Result<(), Lz4Error> {
        let slot = self.dst.get_mut(self.pos).ok_or(Lz4Error::OutputTooSmall)?;
        *slot = b;
        self.pos += 1;
        Ok(())
    }

    fn extend(&mut self, bytes: &[u8]) -> Result<(), Lz4Error> {
        let end = self.pos + bytes.len();
        self.dst
            .get_mut(self.pos..end)
            .ok_or(Lz4Error::OutputTooSmall)?
            .copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Write the remainder of a length whose nibble saturated at 15.
    fn push_length_ext(&mut self, mut rest: usize) -> Result<(), Lz4Error> {
        while rest >= 255 {
            self.push(255)?;
            rest -= 255;
        }
        self.push(rest as u8)
    }

    /// Emit one sequence. `matched` is `None` for the final literal run.
    fn sequence(&mut self, literals: &[u8], matched: Option<(u16, usize)>) -> Result<(), Lz4Error> {
        let ll = literals.len();
        let ml_code = matched.map_or(0, |(_, len)| len - MINMATCH);

        let lit_nibble = ll.min(RUN_MASK as usize) as u8;
        let ml_nibble = ml_code.min(ML_MASK as usize) as u8;
        self.push((lit_nibble << ML_BITS) | ml_nibble)?;
        if ll >= RUN_MASK as usize {
            self.push_length_ext(ll - RUN_MASK as usize)?;
        }
        self.extend(literals)?;

        if let Some((offset, _)) = matched {
            self.extend(&offset.to_le_bytes())?;
            if ml_code >= ML_MASK as usize {
                self.push_length_ext(ml_code - ML_MASK as usize)?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core compression loop
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst`, letting matches reference the tail of `dict`.
///
/// Returns the compressed size. `dst` of at least
/// [`compress_bound(src.len())`](compress_bound) bytes never fails with
/// `OutputTooSmall`.
pub fn compress_using_dict(src: &[u8], dict: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }

    let dict = &dict[dict.len().saturating_sub(MAX_PREFIX_LENGTH)..];
    let mut out = BlockWriter::new(dst);

    if src.len() < LZ4_MIN_LENGTH {
        out.sequence(src, None)?;
        return Ok(out.pos);
    }

    // Matches are searched over dict ++ src; only src is emitted.
    let mut buf = Vec::with_capacity(dict.len() + src.len());
    buf.extend_from_slice(dict);
    buf.extend_from_slice(src);

    let start = dict.len();
    let end = buf.len();
    let match_limit = end - LASTLITERALS;
    let mflimit = end - MFLIMIT;

    let mut table = vec![NO_POSITION; LZ4_HASH_SIZE];
    for pos in 0..start {
        table[hash4(read_le32(&buf[pos..]))] = pos as u32;
    }

    let mut anchor = start;
    let mut ip = start;
    while ip <= mflimit {
        let h = hash4(read_le32(&buf[ip..]));
        let candidate = table[h];
        table[h] = ip as u32;

        let found = candidate != NO_POSITION
            && ip - candidate as usize <= LZ4_DISTANCE_MAX
            && buf[candidate as usize..candidate as usize + MINMATCH] == buf[ip..ip + MINMATCH];

        if !found {
            ip += 1 + ((ip - anchor) >> LZ4_SKIP_TRIGGER);
            continue;
        }

        let candidate = candidate as usize;
        let mut len = MINMATCH;
        while ip + len < match_limit && buf[candidate + len] == buf[ip + len] {
            len += 1;
        }

        out.sequence(&buf[anchor..ip], Some(((ip - candidate) as u16, len)))?;
        ip += len;
        anchor = ip;

        // Keep the table warm inside long matches.
        if ip <= mflimit {
            table[hash4(read_le32(&buf[ip - 2..]))] = (ip - 2) as u32;
        }
    }

    out.sequence(&buf[anchor..end], None)?;
    Ok(out.pos)
}

/// Compress `src` into `dst` without a dictionary.
///
/// Equivalent in role to `LZ4_compress_default`.
pub fn compress_default(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    compress_using_dict(src, &[], dst)
}

/// Compress `src` into a freshly allocated, exactly sized `Vec`.
pub fn compress_to_vec(src: &[u8], dict: &[u8]) -> Result<Vec<u8>, Lz4Error> {
    let bound = compress_bound(src.len());
    if bound == 0 {
        return Err(Lz4Error::InputTooLarge);
    }
    let mut dst = vec![0u8; bound];
    let n = compress_using_dict(src, dict, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}
