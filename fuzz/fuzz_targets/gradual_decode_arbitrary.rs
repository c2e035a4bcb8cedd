#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_gradual::gradual::{GradualDecoder, Status};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic; once an error is reported the
    // decoder keeps reporting it until reset.
    let Some((&knobs, block)) = data.split_first() else {
        return;
    };
    let in_step = usize::from(knobs & 0x0F) + 1;
    let out_step = usize::from(knobs >> 4) * 13 + 1;

    let mut dec = GradualDecoder::new(4_096).expect("window allocation");
    let mut out = vec![0u8; out_step];
    let mut pos = 0;
    let mut produced = 0usize;
    loop {
        let end = (pos + in_step).min(block.len());
        match dec.decode(&block[pos..end], &mut out) {
            Ok(p) => {
                pos += p.consumed;
                produced += p.produced;
                if p.status != Status::NeedOutput && pos == block.len() {
                    break;
                }
                // Bounded by the worst-case expansion of the input.
                assert!(produced <= block.len().saturating_mul(255) + 19);
            }
            Err(e) => {
                assert_eq!(dec.decode(&[], &mut out), Err(e));
                break;
            }
        }
    }
});
