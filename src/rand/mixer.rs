//! Hardware-counter mixer: the weak fallback source.
//!
//! Counter reads are folded into a rotate/multiply state machine and
//! finalized with SplitMix64. Fast and dependency-free, but its unpredictability
//! rests on timing jitter, so prefer the OS source when it is available.

use zeroize::Zeroize;

use super::{RandomSource, hw};
use crate::error::Result;

/// Largest primes below 2^56..2^64, used as odd multipliers.
const PRIMES: [u64; 9] = [
    (1 << 56) - 5,
    (1 << 57) - 13,
    (1 << 58) - 27,
    (1 << 59) - 55,
    (1 << 60) - 93,
    (1 << 61) - 1,
    (1 << 62) - 57,
    (1 << 63) - 25,
    u64::MAX - 58,
];

pub struct FastSource {
    state: u64,
}

impl FastSource {
    pub fn new() -> Self {
        let mut source = FastSource {
            state: hw::entropy(),
        };
        // Warm up so the first outputs do not sit next to the raw counter.
        for _ in 0..4 {
            source.next_u64();
        }
        source
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let state = self.state;
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = state ^ ent;
        let idx = (mixed ^ (mixed >> 32)) as usize % PRIMES.len();

        // State transition: rotate, multiply by prime, XOR entropy
        let new_state = state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;
        self.state = new_state;

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for FastSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastSource {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = (self.next_u64() >> 32) as u32;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        hw::source_name()
    }
}

impl Drop for FastSource {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
