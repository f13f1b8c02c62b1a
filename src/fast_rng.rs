// Uniform draw sources for distribution sampling
//
// Distributions never own randomness: every `sample` call borrows an
// `rand::Rng`. Two concrete streams live here, a PCG-LCG matching the
// transport code's prn() stream and a replay stream for exact tests.

use rand::{RngCore, SeedableRng};

/// LCG multiplier
const PRN_MULT: u64 = 6364136223846793005;
/// LCG additive constant
const PRN_ADD: u64 = 1442695040888963407;
/// 2^-53, maps the top 53 bits of a word onto [0, 1)
const PRN_NORM: f64 = 1.0 / (1u64 << 53) as f64;

/// PCG output permutation (RXS-M-XS) of an LCG state
#[inline(always)]
fn permute(state: u64) -> u64 {
    let word = ((state >> ((state >> 59) + 5)) ^ state).wrapping_mul(12605985483714917081);
    (word >> 43) ^ word
}

/// Fast PCG-LCG stream with 8 bytes of state.
///
/// Reference: Melissa E. O'Neill, "PCG: A Family of Simple Fast Space-Efficient
/// Statistically Good Algorithms for Random Number Generation"
#[derive(Clone, Copy, Debug)]
pub struct FastRng {
    seed: u64,
}

impl FastRng {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    #[inline(always)]
    fn advance(&mut self) -> u64 {
        self.seed = PRN_MULT.wrapping_mul(self.seed).wrapping_add(PRN_ADD);
        permute(self.seed)
    }

    /// Next value in [0, 1). Only the top 53 bits are kept so the product
    /// never rounds up to 1.
    #[inline(always)]
    pub fn random(&mut self) -> f64 {
        ((self.advance() >> 11) as f64) * PRN_NORM
    }

    /// Restart the stream, e.g. at the seed of a new particle history
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }
}

impl SeedableRng for FastRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

impl RngCore for FastRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u64(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn fill_from_u64<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(8) {
        let bytes = rng.next_u64().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

/// Replays a fixed list of uniform values through `rand`'s `f64` conversion.
///
/// `rng.gen::<f64>()` on this stream yields the listed values in order
/// (quantized to the 53-bit grid `rand` uses for `f64`), cycling when the list
/// is exhausted. [`SequenceRng::draws`] counts consumed values, which lets a
/// caller check how many draws a sampler used.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    position: usize,
    draws: usize,
}

impl SequenceRng {
    /// Create a replay stream. Values are clamped into [0, 1).
    ///
    /// An empty list replays zeros.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
            draws: 0,
        }
    }

    /// Number of 64-bit words handed out so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            let v = self.values[self.position % self.values.len()];
            self.position += 1;
            v
        };
        self.draws += 1;
        // rand maps a word w onto (w >> 11) * 2^-53
        const SCALE: f64 = (1u64 << 53) as f64;
        let mantissa = (value.clamp(0.0, 1.0) * SCALE) as u64;
        mantissa.min((1u64 << 53) - 1) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u64(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
