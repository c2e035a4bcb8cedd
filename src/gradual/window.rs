//! Prefix window: the trailing history of decoded bytes.
//!
//! The caller may free, reuse or move its output buffer between calls, so
//! back-references that reach past the start of the current output region are
//! served from this window instead. It is a FIFO over *all* output ever
//! produced, independent of how many output buffers contributed to it.

use crate::config::MAX_PREFIX_LENGTH;

use super::status::GradualError;

/// Bounded trailing-bytes dictionary of a decoder context.
///
/// History lives in `buf[start..]`. Evicted bytes are only skipped over and
/// compacted away once the buffer reaches twice the capacity, so absorbing
/// many tiny pieces stays linear in the bytes absorbed.
#[derive(Debug, Clone)]
pub struct PrefixWindow {
    buf: Vec<u8>,
    start: usize,
    capacity: usize,
}

impl PrefixWindow {
    /// Allocate an empty window. `capacity` is clamped to
    /// [`MAX_PREFIX_LENGTH`]; allocation failure is reported, not aborted on.
    pub fn new(capacity: usize) -> Result<Self, GradualError> {
        let capacity = capacity.min(MAX_PREFIX_LENGTH);
        let mut buf = Vec::new();
        buf.try_reserve_exact(2 * capacity)
            .map_err(|_| GradualError::NoMemory)?;
        Ok(Self {
            buf,
            start: 0,
            capacity,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of history bytes currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The retained history, oldest byte first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// The `backward` most recent bytes. Requires `backward <= len()`.
    #[inline]
    pub fn tail(&self, backward: usize) -> &[u8] {
        &self.buf[self.buf.len() - backward..]
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.start = 0;
    }

    /// Replace the history with `dict`.
    ///
    /// Only the last [`MAX_PREFIX_LENGTH`] bytes of an oversized dictionary
    /// are meaningful; if what remains still exceeds the capacity the window
    /// is left untouched and `OutOfPrefixBuffer` is returned.
    pub fn load(&mut self, dict: &[u8]) -> Result<(), GradualError> {
        let dict = &dict[dict.len().saturating_sub(MAX_PREFIX_LENGTH)..];
        if dict.len() > self.capacity {
            return Err(GradualError::OutOfPrefixBuffer);
        }
        self.clear();
        self.buf.extend_from_slice(dict);
        Ok(())
    }

    /// Fold freshly produced output into the history.
    ///
    /// Keeps `len() <= capacity()`: the oldest bytes are evicted first, and
    /// when `produced` alone covers the capacity only its tail is kept.
    pub fn absorb(&mut self, produced: &[u8]) {
        if produced.len() >= self.capacity {
            self.clear();
            self.buf
                .extend_from_slice(&produced[produced.len() - self.capacity..]);
            return;
        }

        self.start += (self.len() + produced.len()).saturating_sub(self.capacity);
        if self.buf.len() + produced.len() > 2 * self.capacity {
            self.buf.drain(..self.start);
            self.start = 0;
        }
        self.buf.extend_from_slice(produced);
    }
}
