// Size scan agrees with actual decoding.

use lz4_gradual::block::{compress_to_vec, decompress_bound, decompressed_size, SizeError};

use crate::support::{lorem, random_bytes};

#[test]
fn scan_matches_input_length() {
    for (len, seed) in [(0usize, 1u64), (1, 2), (12, 3), (13, 4), (4_096, 5), (100_000, 6)] {
        let input = lorem(len, seed);
        let block = compress_to_vec(&input, &[]).unwrap();
        assert_eq!(decompressed_size(&block), Ok(len));
        assert!(decompress_bound(block.len()) >= len);
    }
    let noise = random_bytes(3_000, 7);
    assert_eq!(decompressed_size(&compress_to_vec(&noise, &[]).unwrap()), Ok(3_000));
}

#[test]
fn every_strict_prefix_is_rejected_or_shorter() {
    let input = lorem(2_000, 9);
    let block = compress_to_vec(&input, &[]).unwrap();
    for cut in 0..block.len() {
        match decompressed_size(&block[..cut]) {
            Err(SizeError::InvalidSequence) => {}
            Ok(n) => assert!(n < input.len(), "prefix {cut} claimed {n} bytes"),
        }
    }
}

#[test]
fn huge_length_is_rejected() {
    let mut block = vec![0xF0];
    block.extend(std::iter::repeat(255u8).take(8_300_000));
    block.push(0);
    assert_eq!(decompressed_size(&block), Err(SizeError::InvalidSequence));
}
