//! Command-line argument definitions for `lz4g`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit iterator, suitable for
//! unit-testing). Both produce a [`Cli`] value; option values that need the
//! filesystem (dictionaries) are resolved later by [`DecodeArgs::prefs`] and
//! [`EncodeArgs::prefs`].

use anyhow::{anyhow, Context};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::cli::arg_utils::parse_size;
use crate::cli::constants::{set_display_level, COMPRESSOR_NAME};
use crate::config::{IN_CHUNK_DEFAULT, OUT_CHUNK_DEFAULT, WINDOW_CAPACITY_DEFAULT};
use crate::io::{load_dictionary, Prefs};

// ── Top level ─────────────────────────────────────────────────────────────────

/// Resumable LZ4 raw block decoder.
#[derive(Debug, Parser)]
#[command(name = COMPRESSOR_NAME, version)]
pub struct Cli {
    /// Increase verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode raw LZ4 blocks.
    Decode(DecodeArgs),
    /// Encode a file as one raw LZ4 block.
    Encode(EncodeArgs),
    /// Print the exact decompressed size of a raw LZ4 block.
    Size(SizeArgs),
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Dictionary the decoder window is seeded with.
    #[arg(short = 'D', long = "dict", value_name = "FILE")]
    pub dict: Option<String>,

    /// Prefix window capacity (at most 64K).
    #[arg(short = 'W', long = "window", value_parser = parse_size, default_value_t = WINDOW_CAPACITY_DEFAULT)]
    pub window: usize,

    /// Compressed bytes fed to the decoder per step.
    #[arg(long = "in-chunk", value_parser = parse_size, default_value_t = IN_CHUNK_DEFAULT)]
    pub in_chunk: usize,

    /// Output buffer size per decoder call.
    #[arg(long = "out-chunk", value_parser = parse_size, default_value_t = OUT_CHUNK_DEFAULT)]
    pub out_chunk: usize,

    /// Worker threads for multiple inputs (0 = auto).
    #[arg(short = 'T', long = "threads", default_value_t = 0)]
    pub threads: usize,

    /// Overwrite existing output files.
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Output file (single input only); `-` is stdout.
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Compressed inputs; `-` is stdin.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Dictionary matches may reference.
    #[arg(short = 'D', long = "dict", value_name = "FILE")]
    pub dict: Option<String>,

    /// Overwrite an existing output file.
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Output file; defaults to INPUT.lz4, `-` is stdout.
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Input file; `-` is stdin.
    #[arg(value_name = "INPUT")]
    pub input: String,
}

#[derive(Debug, Args)]
pub struct SizeArgs {
    /// Compressed input; `-` is stdin.
    #[arg(value_name = "INPUT")]
    pub input: String,
}

// ── Resolution into runtime preferences ───────────────────────────────────────

fn dictionary(path: Option<&str>) -> anyhow::Result<Option<Vec<u8>>> {
    path.map(|p| load_dictionary(p).with_context(|| format!("cannot read dictionary {p}")))
        .transpose()
}

impl DecodeArgs {
    /// Build decode preferences, loading the dictionary if one was given.
    pub fn prefs(&self) -> anyhow::Result<Prefs> {
        let mut prefs = Prefs::new();
        prefs.set_window_capacity(self.window);
        prefs.set_in_chunk(self.in_chunk);
        prefs.set_out_chunk(self.out_chunk);
        prefs.set_nb_workers(self.threads);
        prefs.set_overwrite(self.force);
        prefs.set_dictionary(dictionary(self.dict.as_deref())?);
        Ok(prefs)
    }
}

impl EncodeArgs {
    pub fn prefs(&self) -> anyhow::Result<Prefs> {
        let mut prefs = Prefs::new();
        prefs.set_overwrite(self.force);
        prefs.set_dictionary(dictionary(self.dict.as_deref())?);
        Ok(prefs)
    }
}

impl Cli {
    /// Display level implied by `-v` / `-q`, starting from the default of 2.
    pub fn display_level(&self) -> u32 {
        (2 + u32::from(self.verbose)).saturating_sub(u32::from(self.quiet))
    }

    /// Store [`display_level`](Self::display_level) in the global.
    pub fn apply_display_level(&self) {
        set_display_level(self.display_level());
    }
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Parse `std::env::args()`, exiting with usage on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Parse an explicit argument list; the first item is the program name.
pub fn parse_args_from<I, T>(args: I) -> anyhow::Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| anyhow!("bad usage: {e}"))
}
