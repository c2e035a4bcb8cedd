// Shared helpers for the integration test crates.
#![allow(dead_code)]

use lz4_gradual::gradual::{GradualDecoder, GradualError, Status};

// ─────────────────────────────────────────────────────────────────────────────
// Deterministic data
// ─────────────────────────────────────────────────────────────────────────────

/// xorshift64* generator; fixed seeds keep every test reproducible.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Incompressible bytes.
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = XorShift::new(seed);
    (0..len).map(|_| rng.next_u64() as u8).collect()
}

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
];

/// Compressible text-like bytes.
pub fn lorem(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = XorShift::new(seed);
    let mut out = Vec::with_capacity(len + 16);
    while out.len() < len {
        out.extend_from_slice(WORDS[rng.below(WORDS.len())].as_bytes());
        out.push(if rng.below(12) == 0 { b'\n' } else { b' ' });
    }
    out.truncate(len);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Chunked decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decode `block` feeding at most `in_step` input bytes and `out_step`
/// output bytes per call. Returns the output and the last status.
pub fn decode_chunked(
    block: &[u8],
    dict: &[u8],
    capacity: usize,
    in_step: usize,
    out_step: usize,
) -> Result<(Vec<u8>, Status), GradualError> {
    let mut dec = GradualDecoder::with_dictionary(capacity, dict)?;
    let mut out = Vec::new();
    let mut buf = vec![0u8; out_step];
    let mut pos = 0;
    loop {
        let end = (pos + in_step).min(block.len());
        let p = dec.decode(&block[pos..end], &mut buf)?;
        out.extend_from_slice(&buf[..p.produced]);
        pos += p.consumed;
        if p.status == Status::NeedOutput {
            continue;
        }
        if pos == block.len() {
            return Ok((out, p.status));
        }
    }
}
