//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>.[^note]
//!
//! PCG(32) was chosen as the source of (pseudo)random numbers for decisions made by the [oracle](crate::oracle) as it is simple, fast, and seedable.
//! So, with a fixed [seed](crate::config::Config::seed), each query to the oracle is deterministic.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367345;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut one = MinimalPCG32::seed_from_u64(2);
        let mut two = MinimalPCG32::seed_from_u64(2);
        for _ in 0..16 {
            assert_eq!(one.next_u32(), two.next_u32());
        }
    }

    #[test]
    fn different_seed_different_stream() {
        let mut two_seed = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut seventy_three_seed = MinimalPCG32::from_seed(73u64.to_le_bytes());

        let two = (0..8).map(|_| two_seed.next_u32()).collect::<Vec<_>>();
        let seventy_three = (0..8)
            .map(|_| seventy_three_seed.next_u32())
            .collect::<Vec<_>>();

        assert_ne!(two, seventy_three);
    }
}
