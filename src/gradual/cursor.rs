//! Bounds-checked cursors over the caller's input and output regions.
//!
//! A pair of cursors is created for every decode call and dropped when the
//! call returns. They never read or write outside their slice: every access
//! is clamped to `remaining()`, so a malformed stream can only stall or halt
//! the decoder, never overrun a buffer.

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

/// Read position within one call's compressed input.
#[derive(Debug)]
pub struct InputCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> InputCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes consumed so far in this call.
    #[inline(always)]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Consume one byte, or `None` when the input is exhausted.
    #[inline(always)]
    pub fn take_byte(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    /// Consume exactly `n` bytes, or nothing when fewer are available.
    #[inline(always)]
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let bytes = self.buf.get(self.pos..self.pos.checked_add(n)?)?;
        self.pos += n;
        Some(bytes)
    }

    /// Consume up to `max` bytes; returns what was taken (possibly empty).
    #[inline(always)]
    pub fn take_up_to(&mut self, max: usize) -> &'a [u8] {
        let n = max.min(self.remaining());
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        bytes
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// Write position within one call's output region.
#[derive(Debug)]
pub struct OutputCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> OutputCursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Free space left in the region.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes produced so far in this call.
    #[inline(always)]
    pub fn produced(&self) -> usize {
        self.pos
    }

    /// The bytes produced so far in this call.
    #[inline(always)]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Append `bytes`. The caller clamps `bytes` to `remaining()` first.
    #[inline(always)]
    pub fn put_slice(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.len() <= self.remaining());
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    /// Append `len` bytes copied from `distance` bytes behind the write
    /// position, with LZ77 run semantics: when `distance < len` the source
    /// overlaps the bytes being produced and the pattern repeats.
    ///
    /// Requires `1 <= distance <= produced()` and `len <= remaining()`.
    pub fn copy_back(&mut self, distance: usize, len: usize) {
        debug_assert!(distance >= 1 && distance <= self.pos);
        debug_assert!(len <= self.remaining());

        // Each chunk reads only bytes that are already written: the span
        // [begin, begin + n) ends at or before the current write position.
        // The distance doubles as the periodic pattern is replicated.
        let begin = self.pos - distance;
        let mut distance = distance;
        let mut len = len;
        while len > 0 {
            let n = distance.min(len);
            self.buf.copy_within(begin..begin + n, self.pos);
            self.pos += n;
            len -= n;
            distance += n;
        }
    }
}
