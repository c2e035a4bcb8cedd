// Encoder output must respect the block format restrictions and round-trip.

use lz4_gradual::block::types::{split_token, LASTLITERALS, MINMATCH, ML_MASK, RUN_MASK};
use lz4_gradual::block::{
    compress_bound, compress_default, compress_to_vec, decompress_safe, decompress_to_vec,
    Lz4Error,
};

use crate::support::{lorem, random_bytes};

/// Walk a block and return (offset, match start position) for every match.
fn matches_of(block: &[u8]) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut pos = 0;
    let mut produced = 0;
    let read_ext = |pos: &mut usize, mut len: usize| {
        loop {
            let b = block[*pos];
            *pos += 1;
            len += b as usize;
            if b != 255 {
                return len;
            }
        }
    };
    loop {
        let (ll, ml) = split_token(block[pos]);
        pos += 1;
        let mut ll = ll as usize;
        if ll == RUN_MASK as usize {
            ll = read_ext(&mut pos, ll);
        }
        pos += ll;
        produced += ll;
        if pos == block.len() {
            return found;
        }
        let offset = u16::from_le_bytes([block[pos], block[pos + 1]]) as usize;
        pos += 2;
        let mut ml = ml as usize;
        if ml == ML_MASK as usize {
            ml = read_ext(&mut pos, ml);
        }
        found.push((offset, produced));
        produced += ml + MINMATCH;
    }
}

#[test]
fn round_trips_assorted_inputs() {
    let inputs: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"a".to_vec(),
        b"abcabcabcabcabcabcabc".to_vec(),
        lorem(50_000, 1),
        random_bytes(10_000, 2),
        vec![0u8; 100_000],
    ];
    for input in inputs {
        let block = compress_to_vec(&input, &[]).unwrap();
        assert!(block.len() <= compress_bound(input.len()));
        let mut out = vec![0u8; input.len()];
        assert_eq!(decompress_safe(&block, &mut out), Ok(input.len()));
        assert_eq!(out, input);
    }
}

#[test]
fn matches_stop_before_the_block_tail() {
    let input = lorem(30_000, 3);
    let block = compress_to_vec(&input, &[]).unwrap();
    let matches = matches_of(&block);
    assert!(!matches.is_empty());
    for (offset, start) in matches {
        assert!(offset >= 1 && offset <= 65_535);
        assert!(start + 12 <= input.len());
    }
    // The final sequence carries at least LASTLITERALS literals.
    let tail = &block[block.len() - LASTLITERALS..];
    assert_eq!(tail, &input[input.len() - LASTLITERALS..]);
}

#[test]
fn offsets_stay_within_64k_on_long_inputs() {
    let mut input = lorem(40_000, 5);
    input.extend_from_slice(&random_bytes(70_000, 6));
    let head = input[..40_000].to_vec();
    input.extend_from_slice(&head);
    let block = compress_to_vec(&input, &[]).unwrap();
    for (offset, _) in matches_of(&block) {
        assert!(offset <= 65_535);
    }
    assert_eq!(decompress_to_vec(&block, &[]).unwrap(), input);
}

#[test]
fn dictionary_improves_small_inputs() {
    let dict = lorem(8_000, 10);
    let input = dict[2_000..3_000].to_vec();
    let plain = compress_to_vec(&input, &[]).unwrap();
    let with_dict = compress_to_vec(&input, &dict).unwrap();
    assert!(with_dict.len() < plain.len());
    assert_eq!(decompress_to_vec(&with_dict, &dict).unwrap(), input);
}

#[test]
fn destination_too_small() {
    let input = random_bytes(1000, 12);
    let mut dst = vec![0u8; 500];
    assert_eq!(compress_default(&input, &mut dst), Err(Lz4Error::OutputTooSmall));
}
