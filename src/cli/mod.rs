//! Command-line interface for the `lz4g` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, size multipliers, the shared `DISPLAY_LEVEL` atomic and display macros. |
//! | [`arg_utils`] | Size-suffix parsing and default output-name derivation. |
//! | [`args`]      | clap definitions (`Cli`, `Command`, per-command args) and their conversion into `io::Prefs`. |
//!
//! Typical call sequence: `parse_args` → `Cli::apply_display_level` → dispatch to the io layer.

pub mod constants;
pub mod arg_utils;
pub mod args;
