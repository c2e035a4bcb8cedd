// Prefix window behaviour: history across output buffers and eviction.

use lz4_gradual::block::compress_to_vec;
use lz4_gradual::gradual::{GradualDecoder, GradualError, Status};

use crate::support::{decode_chunked, lorem, random_bytes};

/// 2000 literals, then a 4-byte match 1500 bytes back, then a literal tail.
fn far_match_block(literals: &[u8]) -> Vec<u8> {
    assert_eq!(literals.len(), 2000);
    let mut block = vec![0xF0];
    let mut rest = 2000 - 15;
    while rest >= 255 {
        block.push(255);
        rest -= 255;
    }
    block.push(rest as u8);
    block.extend_from_slice(literals);
    block.extend_from_slice(&1500u16.to_le_bytes());
    block.extend_from_slice(&[0x50, b'e', b'n', b'd', b'!', b'!']);
    block
}

#[test]
fn match_beyond_retained_history_fails() {
    let literals = random_bytes(2000, 5);
    let block = far_match_block(&literals);
    let err = decode_chunked(&block, &[], 1024, block.len(), 512).unwrap_err();
    assert_eq!(err, GradualError::OutOfPrefixBuffer);
}

#[test]
fn same_match_within_capacity_succeeds() {
    let literals = random_bytes(2000, 5);
    let block = far_match_block(&literals);

    let mut expected = literals.clone();
    expected.extend_from_slice(&literals[500..504]);
    expected.extend_from_slice(b"end!!");

    // Full window, small output buffers.
    let (out, status) = decode_chunked(&block, &[], 64 * 1024, 7, 512).unwrap();
    assert_eq!(status, Status::MaybeFinished);
    assert_eq!(out, expected);

    // Small window, but the match source sits in the current output region.
    let (out, _) = decode_chunked(&block, &[], 1024, block.len(), 4096).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn window_keeps_only_the_newest_bytes() {
    let data = lorem(10_000, 9);
    let block = compress_to_vec(&data, &[]).unwrap();
    let mut dec = GradualDecoder::new(256).unwrap();
    let mut out = vec![0u8; data.len()];
    let p = dec.decode(&block, &mut out).unwrap();
    assert_eq!(p.status, Status::MaybeFinished);
    assert_eq!(dec.window_capacity(), 256);
    assert_eq!(dec.window(), &data[data.len() - 256..]);
}

#[test]
fn capacity_is_clamped_to_64k() {
    let dec = GradualDecoder::new(1 << 20).unwrap();
    assert_eq!(dec.window_capacity(), 64 * 1024);
}

#[test]
fn more_than_one_mebibyte_through_small_buffers() {
    let data = lorem(1_200_000, 21);
    let block = compress_to_vec(&data, &[]).unwrap();
    let (out, status) = decode_chunked(&block, &[], 64 * 1024, 4096, 1000).unwrap();
    assert_eq!(status, Status::MaybeFinished);
    assert_eq!(out.len(), data.len());
    assert!(out == data);
}
