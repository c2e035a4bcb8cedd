//! The resumable decode driver.
//!
//! [`GradualDecoder`] walks the LZ4 block sequence format as far as the
//! supplied input and output allow, then returns with its exact continuation
//! point recorded in [`State`]. No stack is preserved between calls: the
//! state marker plus the partially accumulated `literal_length`,
//! `match_length` and `offset` fields are the whole snapshot.
//!
//! ```text
//!  TokenStart ─▶ LiteralLengthExt ─▶ LiteralCopy ─▶ OffsetByte0 ─▶ OffsetByte1
//!      ▲              (nibble 15)                       │ (end of input,
//!      │                                                │  match nibble 0:
//!      └──────── MatchCopy ◀── MatchLengthExt ◀─────────┘  MaybeFinished)
//! ```

use crate::block::types::{split_token, MINMATCH, ML_MASK, RUN_MASK};

use super::copy::{copy_literals, copy_match, Copied};
use super::cursor::{InputCursor, OutputCursor};
use super::sequence::{extend_length, read_offset_high, read_offset_low, Step};
use super::status::{GradualError, Progress, Status};
use super::window::PrefixWindow;

// ─────────────────────────────────────────────────────────────────────────────
// Continuation state
// ─────────────────────────────────────────────────────────────────────────────

/// Exact point at which decoding resumes on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Next byte is a sequence token.
    #[default]
    TokenStart,
    /// Accumulating literal-length extension bytes.
    LiteralLengthExt,
    /// Copying `literal_length` literal bytes.
    LiteralCopy,
    /// Reading the low byte of the match offset.
    OffsetByte0,
    /// Reading the high byte of the match offset.
    OffsetByte1,
    /// Accumulating match-length extension bytes.
    MatchLengthExt,
    /// Copying `match_length` bytes from `offset` back.
    MatchCopy,
    /// A fatal error occurred; every call repeats it until `reset`.
    Halted(GradualError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoder context
// ─────────────────────────────────────────────────────────────────────────────

/// Long-lived decode context for one LZ4 block stream.
///
/// Feed it compressed bytes and output space through [`decode`](Self::decode)
/// in pieces of any size, including single bytes. Output of earlier calls
/// does not have to stay alive: the context keeps the last `capacity` decoded
/// bytes in its own prefix window.
///
/// ```
/// use lz4_gradual::gradual::{GradualDecoder, Status};
///
/// let block = [0x50, b'H', b'e', b'l', b'l', b'o'];
/// let mut dec = GradualDecoder::new(64 * 1024).unwrap();
/// let mut out = [0u8; 16];
/// let p = dec.decode(&block, &mut out).unwrap();
/// assert_eq!(p.status, Status::MaybeFinished);
/// assert_eq!(&out[..p.produced], b"Hello");
/// ```
#[derive(Debug, Clone)]
pub struct GradualDecoder {
    state: State,
    literal_length: u32,
    match_length: u32,
    offset: u32,
    window: PrefixWindow,
    total_in: u64,
    total_out: u64,
}

impl GradualDecoder {
    /// Create a context whose prefix window retains up to `capacity` bytes
    /// (clamped to 64 KiB).
    ///
    /// Matches reaching further back than `capacity` bytes before the current
    /// output region fail with `OutOfPrefixBuffer`, so a capacity below the
    /// encoder's window only works when output regions are large.
    pub fn new(capacity: usize) -> Result<Self, GradualError> {
        Ok(Self {
            state: State::TokenStart,
            literal_length: 0,
            match_length: 0,
            offset: 0,
            window: PrefixWindow::new(capacity)?,
            total_in: 0,
            total_out: 0,
        })
    }

    /// Create a context with its window seeded from `dict`.
    pub fn with_dictionary(capacity: usize, dict: &[u8]) -> Result<Self, GradualError> {
        let mut dec = Self::new(capacity)?;
        dec.reset(Some(dict))?;
        Ok(dec)
    }

    /// Return the context to token-start, clearing totals and any halted
    /// error.
    ///
    /// `None` keeps the window contents (history carries over into the next
    /// block). `Some(dict)` replaces them; an empty `dict` clears the window.
    /// A dictionary that does not fit the capacity is rejected with
    /// `OutOfPrefixBuffer` and leaves the context unchanged.
    pub fn reset(&mut self, dict: Option<&[u8]>) -> Result<(), GradualError> {
        if let Some(dict) = dict {
            self.window.load(dict)?;
        }
        self.state = State::TokenStart;
        self.literal_length = 0;
        self.match_length = 0;
        self.offset = 0;
        self.total_in = 0;
        self.total_out = 0;
        Ok(())
    }

    /// Current continuation point.
    pub fn state(&self) -> State {
        self.state
    }

    /// Compressed bytes consumed since creation or the last reset.
    pub fn total_in(&self) -> u64 {
        self.total_in
    }

    /// Decoded bytes produced since creation or the last reset.
    pub fn total_out(&self) -> u64 {
        self.total_out
    }

    /// The retained history of decoded bytes, oldest first.
    pub fn window(&self) -> &[u8] {
        self.window.as_slice()
    }

    pub fn window_capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Decode from `src` into `dst` until one of them runs out.
    ///
    /// On `Ok`, `consumed` bytes of `src` were used and `produced` bytes of
    /// `dst` were written; the caller passes the unconsumed rest of `src`
    /// (plus anything new) and fresh output space next time. `Ok` never means
    /// "done": `Status::MaybeFinished` is the end of a block only if the
    /// caller has no more input.
    ///
    /// On `Err`, output written before the failure is still accounted in
    /// [`total_out`](Self::total_out) and the window, and the context is
    /// halted.
    pub fn decode(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Progress, GradualError> {
        if let State::Halted(err) = self.state {
            return Err(err);
        }

        let mut input = InputCursor::new(src);
        let mut output = OutputCursor::new(dst);
        let outcome = self.run(&mut input, &mut output);
        self.suspend(&input, &output);

        match outcome {
            Ok(status) => Ok(Progress {
                status,
                consumed: input.consumed(),
                produced: output.produced(),
            }),
            Err(err) => {
                self.state = State::Halted(err);
                Err(err)
            }
        }
    }

    /// Fold this call's output into the window and reconcile totals.
    fn suspend(&mut self, input: &InputCursor<'_>, output: &OutputCursor<'_>) {
        self.window.absorb(output.written());
        self.total_in += input.consumed() as u64;
        self.total_out += output.produced() as u64;
    }

    fn run(
        &mut self,
        input: &mut InputCursor<'_>,
        output: &mut OutputCursor<'_>,
    ) -> Result<Status, GradualError> {
        loop {
            match self.state {
                State::TokenStart => {
                    let Some(token) = input.take_byte() else {
                        return Ok(Status::NeedInput);
                    };
                    let (ll, ml) = split_token(token);
                    self.literal_length = ll;
                    self.match_length = ml;
                    self.state = if ll == RUN_MASK {
                        State::LiteralLengthExt
                    } else {
                        State::LiteralCopy
                    };
                }

                State::LiteralLengthExt => match extend_length(&mut self.literal_length, input)? {
                    Step::Done => self.state = State::LiteralCopy,
                    Step::Pending => return Ok(Status::NeedInput),
                },

                State::LiteralCopy => {
                    if self.literal_length > 0 {
                        match copy_literals(&mut self.literal_length, input, output) {
                            Copied::Done => {}
                            Copied::NeedInput => return Ok(Status::NeedInput),
                            Copied::NeedOutput => return Ok(Status::NeedOutput),
                        }
                    }
                    self.state = State::OffsetByte0;
                }

                State::OffsetByte0 => match read_offset_low(&mut self.offset, input) {
                    // A block may legitimately end here, after a literal run
                    // whose token carried no match length.
                    None if self.match_length == 0 => return Ok(Status::MaybeFinished),
                    None => return Ok(Status::NeedInput),
                    Some(Step::Pending) => self.state = State::OffsetByte1,
                    Some(Step::Done) => self.after_offset(),
                },

                State::OffsetByte1 => match read_offset_high(&mut self.offset, input) {
                    Step::Done => self.after_offset(),
                    Step::Pending => return Ok(Status::NeedInput),
                },

                State::MatchLengthExt => match extend_length(&mut self.match_length, input)? {
                    Step::Done => {
                        self.match_length += MINMATCH as u32;
                        self.state = State::MatchCopy;
                    }
                    Step::Pending => return Ok(Status::NeedInput),
                },

                State::MatchCopy => {
                    match copy_match(&mut self.match_length, self.offset, &self.window, output)? {
                        Copied::Done => self.state = State::TokenStart,
                        Copied::NeedOutput => return Ok(Status::NeedOutput),
                        Copied::NeedInput => return Err(GradualError::Internal),
                    }
                }

                State::Halted(err) => return Err(err),
            }
        }
    }

    fn after_offset(&mut self) {
        if self.match_length == ML_MASK {
            self.state = State::MatchLengthExt;
        } else {
            self.match_length += MINMATCH as u32;
            self.state = State::MatchCopy;
        }
    }
}
