// One-shot decoding on top of the gradual decoder.

use lz4_gradual::block::{
    compress_to_vec, decompress_safe, decompress_safe_using_dict, decompress_to_vec,
    DecompressError,
};

use crate::support::lorem;

const BLOCK_HELLO: &[u8] = &[0x50, b'H', b'e', b'l', b'l', b'o'];

#[test]
fn literal_block() {
    let mut dst = [0u8; 5];
    assert_eq!(decompress_safe(BLOCK_HELLO, &mut dst), Ok(5));
    assert_eq!(&dst, b"Hello");
}

#[test]
fn larger_destination_is_fine() {
    let mut dst = [0u8; 64];
    assert_eq!(decompress_safe(BLOCK_HELLO, &mut dst), Ok(5));
}

#[test]
fn error_paths() {
    let mut dst = [0u8; 64];
    assert_eq!(decompress_safe(&[], &mut dst), Err(DecompressError::Truncated));
    assert_eq!(decompress_safe(&BLOCK_HELLO[..3], &mut dst), Err(DecompressError::Truncated));
    assert_eq!(
        decompress_safe(&[0x10, b'a', 0x02, 0x00, 0x00], &mut dst),
        Err(DecompressError::MalformedInput)
    );
    let mut tiny = [0u8; 2];
    assert_eq!(decompress_safe(BLOCK_HELLO, &mut tiny), Err(DecompressError::OutputTooSmall));
}

#[test]
fn dictionary_round_trip() {
    let dict = lorem(4_000, 77);
    let mut input = dict[500..1500].to_vec();
    input.extend_from_slice(&lorem(200, 78));
    let block = compress_to_vec(&input, &dict).unwrap();

    let mut dst = vec![0u8; input.len()];
    assert_eq!(decompress_safe_using_dict(&block, &mut dst, &dict), Ok(input.len()));
    assert_eq!(dst, input);
    assert_eq!(decompress_to_vec(&block, &dict).unwrap(), input);
}

#[test]
fn error_display() {
    assert_eq!(DecompressError::Truncated.to_string(), "truncated LZ4 block");
    assert_eq!(DecompressError::OutputTooSmall.to_string(), "output buffer too small");
}
