// config.rs — Compile-time configuration constants.
//
// Runtime overrides live in `io::prefs::Prefs` and the `lz4g` command-line
// flags; these are the values used when nothing else is specified.

// Largest prefix window a decoder context may retain.
// LZ4 offsets are 16-bit, so no back-reference can reach further than this.
pub const MAX_PREFIX_LENGTH: usize = 64 * 1024;

// Default prefix window capacity for new decoder contexts.
// Can be overridden with `Prefs::set_window_capacity` or the -W flag.
pub const WINDOW_CAPACITY_DEFAULT: usize = MAX_PREFIX_LENGTH;

// Default number of compressed bytes pulled from a source per step.
// Can be overridden with `Prefs::set_in_chunk` or --in-chunk.
pub const IN_CHUNK_DEFAULT: usize = 64 * 1024;

// Default size of the scratch output buffer handed to the decoder per step.
// Can be overridden with `Prefs::set_out_chunk` or --out-chunk.
pub const OUT_CHUNK_DEFAULT: usize = 256 * 1024;

// Whether the CLI decodes multiple inputs concurrently.
// Enabled through the `multithread` Cargo feature.
pub const MULTITHREAD: bool = cfg!(feature = "multithread");

// Default number of decode workers when multithreading is compiled in.
// 0 = one worker per logical core.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Maximum number of decode workers selectable at runtime (-T#).
pub const NB_WORKERS_MAX: usize = 200;
