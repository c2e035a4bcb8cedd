//! LZ4 block-format constants and small byte helpers shared by the encoder,
//! the size scanner and the gradual decoder.
//!
//! See the [LZ4 block format specification] for the authoritative description
//! of the on-disk layout.
//!
//! [LZ4 block format specification]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md

// ─────────────────────────────────────────────────────────────────────────────
// Common constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Last N bytes of the input are always emitted as literals.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const LASTLITERALS: usize = 5;

/// Minimum bytes needed at the input tail to attempt a new match.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const MFLIMIT: usize = 12;

/// Minimum input length that may produce any match at all.
pub const LZ4_MIN_LENGTH: usize = MFLIMIT + 1;

/// Maximum back-reference distance supported by the LZ4 format.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

/// Maximum input size representable in an LZ4 block (2 113 929 216 bytes).
/// Accumulated literal or match lengths beyond this are malformed.
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// Token helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Split a sequence token into its (literal length, match length) nibbles.
#[inline(always)]
pub fn split_token(token: u8) -> (u32, u32) {
    ((token as u32) >> ML_BITS, (token as u32) & ML_MASK)
}

/// Read a little-endian `u16` from the first two bytes of `bytes`.
///
/// Panics if `bytes` is shorter than two bytes; callers check lengths first.
#[inline(always)]
pub fn read_le16(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian `u32` from the first four bytes of `bytes`.
#[inline(always)]
pub fn read_le32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashing (lz4.c `LZ4_hash4`)
// ─────────────────────────────────────────────────────────────────────────────

/// Log₂ of the number of hash-table entries used by the block encoder.
pub const LZ4_HASHLOG: u32 = 12;
/// Number of entries in the encoder hash table.
pub const LZ4_HASH_SIZE: usize = 1 << LZ4_HASHLOG;

/// Multiplicative hash of a 4-byte sequence into `LZ4_HASHLOG` bits.
#[inline(always)]
pub fn hash4(sequence: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761u32) >> (32 - LZ4_HASHLOG)) as usize
}
