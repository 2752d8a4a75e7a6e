//! Park-Miller Linear Congruential Generator (MINSTD)
//!
//! Supplies the randomness for maze carving. Deterministic from its seed,
//! so the same seed always reproduces the same maze.
//!
//! Constants:
//! - Multiplier (a): 48271
//! - Modulus (m): 2^31 - 1 = 2147483647
//!
//! Reference: https://en.wikipedia.org/wiki/Lehmer_random_number_generator

/// Source of bounded random values.
///
/// The carver consumes randomness only through this trait, so tests can
/// inject scripted sources and pin exact carve outcomes.
pub trait RandomSource {
    /// Uniformly random value in `[0, bound)`.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Uniformly random value in `[a, b]` (inclusive).
    fn randint(&mut self, a: usize, b: usize) -> usize {
        a + self.next_below(b - a + 1)
    }
}

/// Park-Miller Linear Congruential Generator
///
/// Generates a deterministic sequence of pseudo-random numbers from a seed.
/// Same seed always produces the same sequence.
pub struct MinstdRng {
    state: u32,
}

impl MinstdRng {
    /// Create a new generator with the given seed
    ///
    /// If seed is 0, it's replaced with 1 to avoid degenerate sequence
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance RNG state (internal)
    fn advance(&mut self) {
        // Park-Miller constants
        const A: u64 = 48271;
        const M: u64 = 2147483647; // 2^31 - 1

        // Use u64 to avoid overflow during multiplication
        self.state = ((self.state as u64 * A) % M) as u32;
    }
}

impl RandomSource for MinstdRng {
    /// Uses pure integer arithmetic - NO floating point operations
    fn next_below(&mut self, bound: usize) -> usize {
        const M: u64 = 2147483647; // 2^31 - 1
        self.advance();

        // Compute: (state * bound) / M using integer arithmetic
        ((self.state as u64 * bound as u64) / M) as usize
    }
}

/// Permute the four direction slots in place.
///
/// Fisher-Yates over a fixed-size set: three swap steps, each pairing slot
/// `i` with a uniformly chosen slot in `[i, 3]`.
pub fn shuffle<T>(items: &mut [T; 4], rng: &mut impl RandomSource) {
    for i in 0..3 {
        let j = i + rng.next_below(4 - i);
        items.swap(i, j);
    }
}
