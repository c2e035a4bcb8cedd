//! Resumable ("gradual") LZ4 block decompression.
//!
//! The decoder accepts compressed input and output space in pieces of any
//! size and can stop at any byte boundary: mid-token, mid-length-extension,
//! mid-offset or mid-copy. Each call returns a [`Status`] describing what it
//! waits for; the [`GradualDecoder`] context holds everything needed to
//! continue.
//!
//! # Layout
//!
//! | Module       | Role                                                    |
//! |--------------|---------------------------------------------------------|
//! | `cursor`     | bounds-checked input/output positions for one call      |
//! | `sequence`   | token nibbles, length extensions, offset bytes          |
//! | `copy`       | literal and match copiers                               |
//! | `window`     | trailing history used by matches across output buffers |
//! | `decoder`    | the state machine tying the above together              |
//! | `status`     | flow statuses, fatal errors, per-call progress          |

pub mod copy;
pub mod cursor;
pub mod decoder;
pub mod sequence;
pub mod status;
pub mod window;

pub use decoder::{GradualDecoder, State};
pub use status::{GradualError, Progress, Status};
pub use window::PrefixWindow;
