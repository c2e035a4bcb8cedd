//! Literal and match copiers.
//!
//! Both copy as much as the cursors allow, decrement the pending length in
//! the context, and report what stopped them.

use super::cursor::{InputCursor, OutputCursor};
use super::status::GradualError;
use super::window::PrefixWindow;

/// What ended a copy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Copied {
    /// The pending length reached zero.
    Done,
    /// Input ran out first.
    NeedInput,
    /// Output space ran out first.
    NeedOutput,
}

// ─────────────────────────────────────────────────────────────────────────────
// Literals
// ─────────────────────────────────────────────────────────────────────────────

/// Copy up to `literal_length` bytes from input to output.
///
/// When input and output are both too short, output shortage is reported:
/// the caller has to drain output before more input can help.
pub fn copy_literals(
    literal_length: &mut u32,
    input: &mut InputCursor<'_>,
    output: &mut OutputCursor<'_>,
) -> Copied {
    let wanted = *literal_length as usize;
    let mut status = Copied::Done;
    let mut len = wanted;

    if len > input.remaining() {
        len = input.remaining();
        status = Copied::NeedInput;
    }
    if len > output.remaining() {
        len = output.remaining();
        status = Copied::NeedOutput;
    }

    output.put_slice(input.take_up_to(len));
    *literal_length -= len as u32;
    status
}

// ─────────────────────────────────────────────────────────────────────────────
// Matches
// ─────────────────────────────────────────────────────────────────────────────

/// Copy up to `match_length` bytes of the back-reference at `offset`.
///
/// The source is resolved against the current output region first and the
/// prefix window second. A match straddling both is served from the window
/// tail until the seam, then from the start of the current output region,
/// which by then holds exactly the bytes the match continues with.
pub fn copy_match(
    match_length: &mut u32,
    offset: u32,
    window: &PrefixWindow,
    output: &mut OutputCursor<'_>,
) -> Result<Copied, GradualError> {
    let offset = offset as usize;
    if offset == 0 {
        return Err(GradualError::InvalidSequence);
    }

    while *match_length > 0 {
        if output.remaining() == 0 {
            return Ok(Copied::NeedOutput);
        }
        let pending = *match_length as usize;
        let room = output.remaining();

        let n = if offset <= output.produced() {
            let n = pending.min(room);
            output.copy_back(offset, n);
            n
        } else {
            let backward = offset - output.produced();
            if backward > window.len() {
                return Err(GradualError::OutOfPrefixBuffer);
            }
            let n = backward.min(pending).min(room);
            output.put_slice(&window.tail(backward)[..n]);
            n
        };
        *match_length -= n as u32;
    }
    Ok(Copied::Done)
}
