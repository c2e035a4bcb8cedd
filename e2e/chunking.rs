//! E2E: encode → gradual decode round trips under every chunking regime.
//!
//! Covers empty and single-byte inputs, random data below the 64 KiB window,
//! and inputs above 1 MiB where history must be evicted from the window, fed
//! through the stream driver, the `Read` adapter and the raw decoder.

#[path = "../tests/support/mod.rs"]
mod support;

use std::io::Read;

use lz4_gradual::block::{compress_to_vec, decompress_to_vec, decompressed_size};
use lz4_gradual::gradual::Status;
use lz4_gradual::io::{decode_stream, GradualReader, Prefs, SliceSource};

use support::{decode_chunked, lorem, random_bytes};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn via_stream(block: &[u8], in_chunk: usize, out_chunk: usize) -> Vec<u8> {
    let mut prefs = Prefs::default();
    prefs.set_in_chunk(in_chunk);
    prefs.set_out_chunk(out_chunk);
    let mut out = Vec::new();
    decode_stream(&mut SliceSource::new(block, in_chunk), &mut out, &prefs).unwrap();
    out
}

fn via_reader(block: &[u8], read_size: usize) -> Vec<u8> {
    let mut reader = GradualReader::new(SliceSource::new(block, 4096), &Prefs::default()).unwrap();
    let mut out = Vec::new();
    let mut buf = vec![0u8; read_size];
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            return out;
        }
        out.extend_from_slice(&buf[..n]);
    }
}

fn round_trip_everywhere(data: &[u8], steps: &[(usize, usize)]) {
    let block = compress_to_vec(data, &[]).unwrap();
    assert_eq!(decompressed_size(&block), Ok(data.len()));
    assert!(decompress_to_vec(&block, &[]).unwrap() == data);
    for &(in_step, out_step) in steps {
        let (out, status) = decode_chunked(&block, &[], 64 * 1024, in_step, out_step).unwrap();
        assert_eq!(status, Status::MaybeFinished);
        assert!(out == data, "raw decoder, in {in_step} / out {out_step}");
        assert!(via_stream(&block, in_step, out_step) == data, "stream, in {in_step} / out {out_step}");
    }
    assert!(via_reader(&block, 777) == data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input() {
    assert_eq!(compress_to_vec(b"", &[]).unwrap(), vec![0x00]);
    round_trip_everywhere(b"", &[(1, 1), (1, 100)]);
}

#[test]
fn single_byte() {
    assert_eq!(compress_to_vec(b"A", &[]).unwrap(), vec![0x10, b'A']);
    round_trip_everywhere(b"A", &[(1, 1), (2, 2)]);
}

#[test]
fn random_below_window() {
    for (len, seed) in [(100usize, 1u64), (4_000, 2), (60_000, 3)] {
        round_trip_everywhere(&random_bytes(len, seed), &[(1, 1), (333, 4096), (65_536, 17)]);
    }
}

#[test]
fn text_below_window_byte_by_byte() {
    round_trip_everywhere(&lorem(30_000, 4), &[(1, 1)]);
}

#[test]
fn beyond_one_mebibyte_evicts_history() {
    let mut data = lorem(700_000, 5);
    data.extend_from_slice(&random_bytes(200_000, 6));
    data.extend_from_slice(&lorem(400_000, 7));
    assert!(data.len() > 1 << 20);
    round_trip_everywhere(&data, &[(65_536, 65_536), (1_000, 4_097), (64 * 1024 + 1, 100)]);
}

#[test]
fn highly_repetitive_beyond_one_mebibyte() {
    let data: Vec<u8> = b"0123456789abcdef".iter().copied().cycle().take(1_500_000).collect();
    round_trip_everywhere(&data, &[(5, 70_000), (4_096, 1)]);
}
