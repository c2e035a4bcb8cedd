//! File-level decode and encode operations.
//!
//! [`decode_filename`] runs one file through [`decode_stream`];
//! [`decode_multiple_filenames`] does the same for many independent files on
//! a rayon pool, one decoder per file. [`encode_filename`] produces the raw
//! blocks the decode side consumes.

use std::io::{self, Read, Write};

use rayon::prelude::*;

use super::file_io::{open_dst_file, open_src_file};
use super::prefs::Prefs;
use super::sink::WriteSink;
use super::source::ReadSource;
use super::stream::{decode_stream, StreamError, StreamSummary};
use crate::block::compress_to_vec;
use crate::displaylevel;

/// Decode the raw block in `src_path` into `dst_path`.
pub fn decode_filename(
    src_path: &str,
    dst_path: &str,
    prefs: &Prefs,
) -> Result<StreamSummary, StreamError> {
    let mut source = ReadSource::new(open_src_file(src_path)?);
    let mut sink = WriteSink::new(open_dst_file(dst_path, prefs)?);
    let summary = decode_stream(&mut source, &mut sink, prefs)?;
    sink.flush()?;
    displaylevel!(
        2,
        "{:<30} : decoded {} bytes from {} bytes\n",
        src_path,
        summary.decompressed,
        summary.compressed
    );
    Ok(summary)
}

/// Decode every `(source, destination)` pair, in parallel when more than one
/// worker is configured.
///
/// Results are returned in input order. A failing file does not stop the
/// others.
pub fn decode_multiple_filenames(
    jobs: &[(String, String)],
    prefs: &Prefs,
) -> Vec<Result<StreamSummary, StreamError>> {
    let nb_workers = prefs.effective_nb_workers().min(jobs.len().max(1));
    let run = |(src, dst): &(String, String)| decode_filename(src, dst, prefs);

    if nb_workers <= 1 {
        return jobs.iter().map(run).collect();
    }

    displaylevel!(4, "Decoding {} files with {} workers\n", jobs.len(), nb_workers);
    match rayon::ThreadPoolBuilder::new().num_threads(nb_workers).build() {
        Ok(pool) => pool.install(|| jobs.par_iter().map(run).collect()),
        Err(e) => {
            displaylevel!(2, "warning: cannot start worker pool ({}), decoding serially\n", e);
            jobs.iter().map(run).collect()
        }
    }
}

/// Encode `src_path` as a single raw LZ4 block into `dst_path`.
///
/// Returns `(input bytes, output bytes)`.
pub fn encode_filename(src_path: &str, dst_path: &str, prefs: &Prefs) -> io::Result<(u64, u64)> {
    let mut input = Vec::new();
    open_src_file(src_path)?.read_to_end(&mut input)?;

    let dict = prefs.dictionary.as_deref().unwrap_or(&[]);
    let block = compress_to_vec(&input, dict)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut dst = open_dst_file(dst_path, prefs)?;
    dst.write_all(&block)?;
    dst.flush()?;

    displaylevel!(
        2,
        "{:<30} : encoded {} bytes into {} bytes\n",
        src_path,
        input.len(),
        block.len()
    );
    Ok((input.len() as u64, block.len() as u64))
}
