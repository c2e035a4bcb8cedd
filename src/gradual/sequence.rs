//! Token, length-extension and offset parsing.
//!
//! Every routine here can stop at any byte boundary: partial results are
//! accumulated directly into the decoder context's fields, so a resumed call
//! continues exactly where the previous one ran out of input.

use crate::block::types::{read_le16, LZ4_MAX_INPUT_SIZE};

use super::cursor::InputCursor;
use super::status::GradualError;

/// Result of a resumable parsing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The field is complete.
    Done,
    /// Input ran out; call again with more input.
    Pending,
}

/// Continue a variable-length extension into `length`.
///
/// Adds each byte read to `length`; stops after the first byte below 255.
/// Any running total above `LZ4_MAX_INPUT_SIZE` is rejected immediately.
pub fn extend_length(length: &mut u32, input: &mut InputCursor<'_>) -> Result<Step, GradualError> {
    while let Some(b) = input.take_byte() {
        let total = *length as usize + b as usize;
        if total > LZ4_MAX_INPUT_SIZE {
            return Err(GradualError::InvalidSequence);
        }
        *length = total as u32;
        if b != 255 {
            return Ok(Step::Done);
        }
    }
    Ok(Step::Pending)
}

/// Read the low offset byte, or both bytes at once when available.
///
/// Returns `None` when the input is empty, otherwise `Some(Step::Done)` if
/// the whole offset was read and `Some(Step::Pending)` if only the low byte
/// was (the high byte is read by [`read_offset_high`]).
pub fn read_offset_low(offset: &mut u32, input: &mut InputCursor<'_>) -> Option<Step> {
    if let Some(pair) = input.take(2) {
        *offset = u32::from(read_le16(pair));
        return Some(Step::Done);
    }
    *offset = u32::from(input.take_byte()?);
    Some(Step::Pending)
}

/// Read the high offset byte into an offset whose low byte is already set.
pub fn read_offset_high(offset: &mut u32, input: &mut InputCursor<'_>) -> Step {
    match input.take_byte() {
        Some(b) => {
            *offset |= u32::from(b) << 8;
            Step::Done
        }
        None => Step::Pending,
    }
}
