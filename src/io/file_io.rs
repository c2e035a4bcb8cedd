//! File I/O primitives for the decode and encode pipelines.
//!
//! - [`open_src_file`] resolves a path string to a `Box<dyn Read>`,
//!   handling the `"-"` stdin sentinel and rejecting directories.
//! - [`open_dst_file`] resolves a path string to a `Box<dyn Write>`,
//!   handling the `"-"` stdout sentinel and enforcing the overwrite policy
//!   from [`Prefs`].
//! - [`load_dictionary`] reads a dictionary file, keeping its last 64 KiB.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::prefs::Prefs;
use crate::config::MAX_PREFIX_LENGTH;
use crate::displaylevel;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "-";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "-";

#[inline]
fn is_stdin(s: &str) -> bool {
    s == STDIN_MARK
}

#[inline]
fn is_stdout(s: &str) -> bool {
    s == STDOUT_MARK
}

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Opens a source for reading.
///
/// `"-"` returns standard input; a directory is an
/// [`io::ErrorKind::InvalidInput`] error; anything else is opened and wrapped
/// in a [`BufReader`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if is_stdin(path) {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin().lock()));
    }

    if Path::new(path).is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path}: is a directory"),
        ));
    }

    let f = File::open(path)?;
    Ok(Box::new(BufReader::new(f)))
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// Opens a destination for writing.
///
/// `"-"` returns standard output. An existing file is only replaced when
/// `prefs.overwrite` is set; otherwise [`io::ErrorKind::AlreadyExists`].
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<Box<dyn Write>> {
    if is_stdout(path) {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }

    if !prefs.overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{path} already exists; use -f to overwrite"),
        ));
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(Box::new(BufWriter::new(f)))
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// Reads the last 64 KiB of the dictionary file at `path`.
pub fn load_dictionary(path: &str) -> io::Result<Vec<u8>> {
    if is_stdin(path) {
        let mut all = Vec::new();
        io::stdin().lock().read_to_end(&mut all)?;
        let start = all.len().saturating_sub(MAX_PREFIX_LENGTH);
        return Ok(all.split_off(start));
    }

    let mut f = File::open(path)?;
    let len = f.metadata()?.len();
    if len > MAX_PREFIX_LENGTH as u64 {
        f.seek(SeekFrom::Start(len - MAX_PREFIX_LENGTH as u64))?;
    }
    let mut dict = Vec::with_capacity(len.min(MAX_PREFIX_LENGTH as u64) as usize);
    f.read_to_end(&mut dict)?;
    displaylevel!(4, "Loaded dictionary {} ({} bytes)\n", path, dict.len());
    Ok(dict)
}
