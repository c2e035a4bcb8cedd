//! Binary entry point for the `lz4g` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] builds a [`Cli`] value (clap exits on usage errors).
//! 2. The display level is set from `-v` / `-q`.
//! 3. [`run`] dispatches to decode, encode or size and returns an
//!    `anyhow::Result`; any error is printed at level 1 and the process
//!    exits with status 1.

use std::io::Read;

use anyhow::{anyhow, bail, Context, Result};

use lz4_gradual::block::decompressed_size;
use lz4_gradual::cli::arg_utils::{decoded_name, encoded_name};
use lz4_gradual::cli::args::{parse_args, Cli, Command, DecodeArgs, EncodeArgs, SizeArgs};
use lz4_gradual::cli::constants::{AUTHOR, COMPRESSOR_NAME, IO_MT, LZ4_EXTENSION};
use lz4_gradual::config::MULTITHREAD;
use lz4_gradual::io::file_io::open_src_file;
use lz4_gradual::io::{decode_filename, decode_multiple_filenames, encode_filename, STDIN_MARK};
use lz4_gradual::{displaylevel, displayout};

// ── decode ────────────────────────────────────────────────────────────────────

fn decoded_name_or_err(input: &str) -> Result<String> {
    decoded_name(input)
        .ok_or_else(|| anyhow!("{input}: unknown suffix, expected {LZ4_EXTENSION} (use -o)"))
}

fn run_decode(args: &DecodeArgs) -> Result<()> {
    let mut prefs = args.prefs()?;

    if !MULTITHREAD {
        if prefs.nb_workers > 1 {
            displaylevel!(2, "warning: this executable doesn't support multithreading \n");
        }
        prefs.set_nb_workers(1);
    }
    displaylevel!(4, "Window capacity : {} bytes\n", prefs.window_capacity);

    if let [input] = args.inputs.as_slice() {
        let output = match &args.output {
            Some(o) => o.clone(),
            None => decoded_name_or_err(input)?,
        };
        decode_filename(input, &output, &prefs).with_context(|| input.clone())?;
        return Ok(());
    }

    if args.output.is_some() {
        bail!("-o cannot be used with multiple inputs");
    }
    if args.inputs.iter().any(|i| i == STDIN_MARK) {
        bail!("stdin cannot be combined with other inputs");
    }

    let jobs = args
        .inputs
        .iter()
        .map(|i| -> Result<(String, String)> { Ok((i.clone(), decoded_name_or_err(i)?)) })
        .collect::<Result<Vec<_>>>()?;

    let results = decode_multiple_filenames(&jobs, &prefs);
    let mut failed = 0usize;
    for ((src, _), result) in jobs.iter().zip(results) {
        if let Err(e) = result {
            displaylevel!(1, "{}: {}: {}\n", COMPRESSOR_NAME, src, e);
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} files could not be decoded", jobs.len());
    }
    Ok(())
}

// ── encode ────────────────────────────────────────────────────────────────────

fn run_encode(args: &EncodeArgs) -> Result<()> {
    let prefs = args.prefs()?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| encoded_name(&args.input));
    encode_filename(&args.input, &output, &prefs).with_context(|| args.input.clone())?;
    Ok(())
}

// ── size ──────────────────────────────────────────────────────────────────────

fn run_size(args: &SizeArgs) -> Result<()> {
    let mut block = Vec::new();
    open_src_file(&args.input)
        .and_then(|mut f| f.read_to_end(&mut block))
        .with_context(|| format!("cannot read {}", args.input))?;
    let size = decompressed_size(&block).with_context(|| args.input.clone())?;
    displayout!("{}\n", size);
    Ok(())
}

// ── dispatch ──────────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    displaylevel!(
        3,
        "*** {} v{} {}-bit {}, by {} ***\n",
        COMPRESSOR_NAME,
        lz4_gradual::LZ4G_VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        IO_MT,
        AUTHOR
    );

    match &cli.command {
        Command::Decode(args) => run_decode(args),
        Command::Encode(args) => run_encode(args),
        Command::Size(args) => run_size(args),
    }
}

fn main() {
    let cli = parse_args();
    cli.apply_display_level();

    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            1
        }
    };
    std::process::exit(code);
}
