// Output must not depend on how input and output are split across calls.

use lz4_gradual::block::compress_to_vec;
use lz4_gradual::gradual::Status;

use crate::support::{decode_chunked, lorem, random_bytes};

const CAPACITY: usize = 64 * 1024;

fn assert_invariant(data: &[u8]) {
    let block = compress_to_vec(data, &[]).unwrap();
    let (whole, status) = decode_chunked(&block, &[], CAPACITY, block.len(), data.len().max(1)).unwrap();
    assert_eq!(status, Status::MaybeFinished);
    assert_eq!(whole, data);

    for &(in_step, out_step) in &[(1, 1), (1, 4096), (4096, 1), (3, 7), (64, 5), (1000, 333)] {
        let (out, status) = decode_chunked(&block, &[], CAPACITY, in_step, out_step).unwrap();
        assert_eq!(status, Status::MaybeFinished, "in {in_step} / out {out_step}");
        assert_eq!(out, whole, "in {in_step} / out {out_step}");
    }
}

#[test]
fn text_is_chunking_invariant() {
    assert_invariant(&lorem(20_000, 7));
}

#[test]
fn incompressible_data_is_chunking_invariant() {
    assert_invariant(&random_bytes(5_000, 11));
}

#[test]
fn long_runs_are_chunking_invariant() {
    let mut data = vec![b'x'; 3000];
    data.extend_from_slice(&lorem(500, 3));
    data.extend(std::iter::repeat(0u8).take(4000));
    assert_invariant(&data);
}

#[test]
fn tiny_inputs_are_chunking_invariant() {
    for len in 0..40 {
        assert_invariant(&lorem(len, len as u64 + 1));
    }
}
