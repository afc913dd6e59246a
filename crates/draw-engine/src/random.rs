//! Seeded pseudo-random number generation
//!
//! Reproducible draws hash the seed text with xmur3 and feed the first
//! output into a mulberry32 generator. Both use 32-bit wrapping arithmetic
//! only, so a seed yields the same sequence on every platform.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Initial xmur3 accumulator (0xDEADBEEF)
const HASH_INIT: u32 = 3_735_928_559;
/// Per-code-unit multiplier (golden ratio, 2654435769)
const HASH_MUL: u32 = 0x9E37_79B9;
const MIX_MUL_A: u32 = 2_246_822_507;
const MIX_MUL_B: u32 = 3_266_489_909;

/// Weyl increment added to the mulberry32 state on every step
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, used to map a u32 into [0, 1)
const TWO_POW_32: f64 = 4_294_967_296.0;

/// xmur3 string hash
///
/// Absorbs the UTF-16 code units of the input, then hands out well-mixed
/// 32-bit values on demand. Same text = same sequence.
#[derive(Clone, Debug)]
pub struct SeedHasher {
    h: u32,
}

impl SeedHasher {
    pub fn new(text: &str) -> Self {
        let mut h = HASH_INIT;
        for unit in text.encode_utf16() {
            h = (h ^ unit as u32).wrapping_mul(HASH_MUL);
            h = h.rotate_left(13);
            h ^= h >> 16;
        }
        Self { h }
    }

    /// Apply the avalanche finalizer and return the mixed value
    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.h;
        h = (h ^ (h >> 16)).wrapping_mul(MIX_MUL_A);
        h = (h ^ (h >> 13)).wrapping_mul(MIX_MUL_B);
        h ^= h >> 16;
        self.h = h;
        h
    }
}

/// mulberry32 generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from arbitrary text via the first xmur3 output
    pub fn from_text(text: &str) -> Self {
        Self::new(SeedHasher::new(text).next_u32())
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Generate a float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }
}

/// Where a draw gets its uniform [0, 1) values from.
///
/// Picked once per draw and owned by that draw; nothing is shared between
/// calls.
#[derive(Debug)]
pub enum RandomSource {
    /// Reproducible stream derived from a seed string
    Seeded(Mulberry32),
    /// Non-reproducible thread-local generator
    Platform(ThreadRng),
}

impl RandomSource {
    /// Seeded when `seed` has content after trimming, platform otherwise
    pub fn resolve(seed: Option<&str>) -> Self {
        match seed.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => Self::Seeded(Mulberry32::from_text(text)),
            None => Self::Platform(rand::thread_rng()),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }

    /// Next uniform value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        match self {
            Self::Seeded(rng) => rng.next_f64(),
            Self::Platform(rng) => rng.gen::<f64>(),
        }
    }

    /// Uniform index in [0, len), `len` must be non-zero
    pub fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        // float rounding can land exactly on `len` for very large pools
        idx.min(len - 1)
    }
}
