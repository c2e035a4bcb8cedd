// lz4-gradual — resumable LZ4 block decompression and the lz4g tool

pub mod config;
pub mod block;
pub mod gradual;
pub mod io;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const LZ4G_VERSION_MAJOR: u32 = 0;
pub const LZ4G_VERSION_MINOR: u32 = 3;
pub const LZ4G_VERSION_RELEASE: u32 = 0;
pub const LZ4G_VERSION_NUMBER: u32 =
    LZ4G_VERSION_MAJOR * 100 * 100 + LZ4G_VERSION_MINOR * 100 + LZ4G_VERSION_RELEASE;
pub const LZ4G_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    LZ4G_VERSION_NUMBER
}

/// Returns the library version string.
pub fn version_string() -> &'static str {
    LZ4G_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{compress_to_vec, decompress_to_vec};
pub use gradual::{GradualDecoder, GradualError, Progress, Status};
pub use io::{decode_stream, GradualReader, Prefs};
