#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_gradual::block::compress_to_vec;
use lz4_gradual::gradual::{GradualDecoder, Status};

fuzz_target!(|data: &[u8]| {
    // First byte picks the chunk sizes, the rest is the payload.
    let Some((&knobs, payload)) = data.split_first() else {
        return;
    };
    let in_step = usize::from(knobs & 0x0F) + 1;
    let out_step = usize::from(knobs >> 4) * 7 + 1;

    let Ok(block) = compress_to_vec(payload, &[]) else {
        return;
    };

    let mut dec = GradualDecoder::new(65_536).expect("window allocation");
    let mut out = vec![0u8; out_step];
    let mut recovered = Vec::with_capacity(payload.len());
    let mut pos = 0;
    let status = loop {
        let end = (pos + in_step).min(block.len());
        let p = dec.decode(&block[pos..end], &mut out).expect("valid block");
        recovered.extend_from_slice(&out[..p.produced]);
        pos += p.consumed;
        if p.status != Status::NeedOutput && pos == block.len() {
            break p.status;
        }
    };

    assert_eq!(status, Status::MaybeFinished);
    assert_eq!(recovered, payload, "gradual round-trip mismatch");
});
