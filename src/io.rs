//! Stream and file plumbing around the gradual decoder.
//!
//! Sources and sinks abstract where compressed bytes come from and where
//! decoded bytes go; [`decode_stream`] pumps one through the other, and the
//! file helpers bind both to paths for the CLI.

pub mod decode_file;
pub mod file_io;
pub mod prefs;
pub mod reader;
pub mod sink;
pub mod source;
pub mod stream;

// ── Core type re-exports ──────────────────────────────────────────────────────
pub use prefs::{default_nb_workers, Prefs};
pub use reader::GradualReader;
pub use sink::{ByteSink, WriteSink};
pub use source::{ByteSource, ReadSource, SliceSource};
pub use stream::{decode_stream, decoder_from_prefs, StreamError, StreamSummary};

// ── Special I/O sentinels ─────────────────────────────────────────────────────
pub use file_io::{STDIN_MARK, STDOUT_MARK};

// ── File-level API ────────────────────────────────────────────────────────────
pub use decode_file::{decode_filename, decode_multiple_filenames, encode_filename};
pub use file_io::load_dictionary;
