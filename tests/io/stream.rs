// decode_stream over in-memory and reader-backed sources.

use std::io::Cursor;

use lz4_gradual::block::compress_to_vec;
use lz4_gradual::gradual::GradualError;
use lz4_gradual::io::{
    decode_stream, ByteSink, Prefs, ReadSource, SliceSource, StreamError, WriteSink,
};

use crate::support::{lorem, random_bytes};

#[test]
fn reader_source_to_writer_sink() {
    let data = lorem(300_000, 1);
    let block = compress_to_vec(&data, &[]).unwrap();

    let mut source = ReadSource::new(Cursor::new(block.clone()));
    let mut sink = WriteSink::new(Vec::new());
    let summary = decode_stream(&mut source, &mut sink, &Prefs::default()).unwrap();

    assert_eq!(summary.compressed, block.len() as u64);
    assert_eq!(summary.decompressed, data.len() as u64);
    assert_eq!(sink.into_inner(), data);
}

#[test]
fn chunk_sizes_do_not_change_output() {
    let data = lorem(40_000, 2);
    let block = compress_to_vec(&data, &[]).unwrap();
    for (in_chunk, out_chunk) in [(1, 1), (7, 1_000), (64 * 1024, 3), (500, 500)] {
        let mut prefs = Prefs::default();
        prefs.set_in_chunk(in_chunk);
        prefs.set_out_chunk(out_chunk);
        let mut source = SliceSource::new(&block, usize::MAX);
        let mut out = Vec::new();
        decode_stream(&mut source, &mut out, &prefs).unwrap();
        assert!(out == data, "in {in_chunk} / out {out_chunk}");
    }
}

#[test]
fn dictionary_from_prefs() {
    let dict = random_bytes(2_000, 3);
    let mut data = dict[200..1_800].to_vec();
    data.extend_from_slice(&lorem(1_000, 4));
    let block = compress_to_vec(&data, &dict).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_dictionary(Some(dict));
    let mut out = Vec::new();
    decode_stream(&mut SliceSource::new(&block, 100), &mut out, &prefs).unwrap();
    assert_eq!(out, data);

    let mut out = Vec::new();
    let err = decode_stream(&mut SliceSource::new(&block, 100), &mut out, &Prefs::default())
        .unwrap_err();
    assert!(matches!(err, StreamError::Decode(GradualError::OutOfPrefixBuffer)));
}

#[test]
fn small_window_with_small_output_fails() {
    // 2000 literals, then a 4-byte match 1500 bytes back, then a literal tail.
    let mut block = vec![0xF0, 255, 255, 255, 255, 255, 255, 255, 200];
    block.extend_from_slice(&random_bytes(2_000, 5));
    block.extend_from_slice(&1500u16.to_le_bytes());
    block.extend_from_slice(&[0x50, b'0', b'1', b'2', b'3', b'4']);

    let mut out = Vec::new();
    decode_stream(&mut SliceSource::new(&block, 4096), &mut out, &Prefs::default()).unwrap();
    assert_eq!(out.len(), 2_009);

    let mut prefs = Prefs::default();
    prefs.set_window_capacity(1_024);
    prefs.set_out_chunk(256);
    let mut out = Vec::new();
    let err = decode_stream(&mut SliceSource::new(&block, 4096), &mut out, &prefs).unwrap_err();
    assert!(matches!(err, StreamError::Decode(GradualError::OutOfPrefixBuffer)));
    assert_eq!(err.to_string(), "decode error: ERROR_OUT_OF_PREFIX_BUFFER");
}

#[test]
fn truncated_stream() {
    let data = lorem(10_000, 6);
    let block = compress_to_vec(&data, &[]).unwrap();
    let cut = &block[..block.len() - 3];
    let mut out = Vec::new();
    let err = decode_stream(&mut SliceSource::new(cut, 64), &mut out, &Prefs::default())
        .unwrap_err();
    assert!(matches!(err, StreamError::Truncated));
    assert!(data.starts_with(&out));
}

struct FailingSink;

impl ByteSink for FailingSink {
    fn accept(&mut self, _data: &[u8]) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn sink_errors_are_io_errors() {
    let block = compress_to_vec(b"some bytes for a failing sink", &[]).unwrap();
    let err = decode_stream(&mut SliceSource::new(&block, 8), &mut FailingSink, &Prefs::default())
        .unwrap_err();
    match err {
        StreamError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("unexpected {other:?}"),
    }
}
