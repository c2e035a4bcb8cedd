//! LZ4 block format: encoder, one-shot decoding and size queries.
//!
//! The resumable decoder lives in [`crate::gradual`]; this module wraps it
//! for whole-block use and provides the encoder it is tested against.

pub mod compress;
pub mod decompress_api;
pub mod size;
pub mod types;

pub use compress::{compress_bound, compress_default, compress_to_vec, compress_using_dict, Lz4Error};
pub use decompress_api::{decompress_safe, decompress_safe_using_dict, decompress_to_vec, DecompressError};
pub use size::{decompress_bound, decompressed_size, SizeError};
pub use types::{LZ4_DISTANCE_MAX, LZ4_MAX_INPUT_SIZE};
