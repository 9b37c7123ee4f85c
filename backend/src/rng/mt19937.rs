//! MT19937 Mersenne Twister
//!
//! 32-bit Mersenne Twister with a 624-word state and period 2^19937 - 1.
//!
//! # Algorithm
//!
//! The state block is regenerated in one pass (the "twist") every 624 draws.
//! Each draw reads one state word and passes it through a fixed tempering
//! transform before returning it.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Outputs match the reference
//! MT19937 vectors for both scalar and array seeding.
//!
//! Not suitable for cryptographic use.

use std::fmt;

use crate::error::RngError;

/// Number of words in the state block
pub const STATE_SIZE: usize = 624;

/// Twist lag
const SHIFT_SIZE: usize = 397;

/// Seed used when no seed is supplied
pub const DEFAULT_SEED: u32 = 5489;

/// Scalar seed applied before mixing in a seed sequence
const SEQUENCE_BASE_SEED: u32 = 19650218;

const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Mersenne Twister generator owning its full state block
///
/// Deliberately not `Clone`: two copies of one stream would silently
/// diverge. Use [`Generator::snapshot`] to fork a stream explicitly.
///
/// # Example
/// ```
/// use mtrand_core_rs::Generator;
///
/// let mut rng = Generator::with_seed(5489);
/// assert_eq!(rng.next_uint32(), 3499211612);
/// ```
pub struct Generator {
    /// State vector
    state: [u32; STATE_SIZE],
    /// Index of the next unconsumed word; `STATE_SIZE` means exhausted
    cursor: usize,
    /// True once any seed operation has run
    initialized: bool,
    /// Number of twist passes performed
    regenerations: u64,
}

impl Generator {
    /// Create a generator with the default seed (5489)
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a generator seeded with a 32-bit value
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::Generator;
    ///
    /// let mut a = Generator::with_seed(42);
    /// let mut b = Generator::with_seed(42);
    /// assert_eq!(a.next_uint32(), b.next_uint32());
    /// ```
    pub fn with_seed(seed: u32) -> Self {
        let mut generator = Self::unseeded();
        generator.seed_scalar(seed);
        generator
    }

    /// Create a generator seeded with a sequence of 32-bit values
    ///
    /// # Errors
    /// Returns `EmptySeedSequence` if `seeds` is empty.
    pub fn with_seed_sequence(seeds: &[u32]) -> Result<Self, RngError> {
        let mut generator = Self::unseeded();
        generator.seed_sequence(seeds)?;
        Ok(generator)
    }

    fn unseeded() -> Self {
        Self {
            state: [0; STATE_SIZE],
            cursor: STATE_SIZE,
            initialized: false,
            regenerations: 0,
        }
    }

    pub(crate) fn from_parts(
        state: [u32; STATE_SIZE],
        cursor: usize,
        initialized: bool,
        regenerations: u64,
    ) -> Self {
        Self {
            state,
            cursor,
            initialized,
            regenerations,
        }
    }

    /// Reseed from a single 32-bit value
    ///
    /// Discards all prior state. The next draw regenerates the block.
    pub fn seed_scalar(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..STATE_SIZE {
            let prev = self.state[i - 1];
            self.state[i] = 1812433253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.cursor = STATE_SIZE;
        self.initialized = true;
        tracing::trace!(seed, "seeded generator from scalar");
    }

    /// Reseed from a sequence of 32-bit values
    ///
    /// # Errors
    /// Returns `EmptySeedSequence` if `seeds` is empty. The generator is left
    /// untouched in that case.
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::Generator;
    ///
    /// let mut rng = Generator::new();
    /// rng.seed_sequence(&[0x123, 0x234, 0x345, 0x456]).unwrap();
    /// assert_eq!(rng.next_uint32(), 1067595299);
    /// assert!(rng.seed_sequence(&[]).is_err());
    /// ```
    pub fn seed_sequence(&mut self, seeds: &[u32]) -> Result<(), RngError> {
        if seeds.is_empty() {
            return Err(RngError::EmptySeedSequence);
        }

        self.seed_scalar(SEQUENCE_BASE_SEED);

        let len = seeds.len();
        let mut i = 1;
        let mut j = 0;

        for _ in 0..STATE_SIZE.max(len) {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1664525))
                .wrapping_add(seeds[j])
                .wrapping_add(j as u32);
            j = (j + 1) % len;
            i = self.advance_mix_index(i);
        }

        for _ in 0..STATE_SIZE - 1 {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1566083941))
                .wrapping_sub(i as u32);
            i = self.advance_mix_index(i);
        }

        // MSB set so the state vector can never be all zeros
        self.state[0] = UPPER_MASK;
        self.cursor = STATE_SIZE;
        self.initialized = true;
        tracing::trace!(len, "seeded generator from sequence");
        Ok(())
    }

    /// Step the seed-mixing index, wrapping back to 1 and carrying the last
    /// word into slot 0 at the end of the block
    fn advance_mix_index(&mut self, i: usize) -> usize {
        if i + 1 == STATE_SIZE {
            self.state[0] = self.state[STATE_SIZE - 1];
            1
        } else {
            i + 1
        }
    }

    /// Rebuild the whole state block in place and rewind the cursor
    fn regenerate(&mut self) {
        let n = STATE_SIZE;
        let m = SHIFT_SIZE;

        for i in 0..n - m {
            self.state[i] = self.state[i + m] ^ twiddle(self.state[i], self.state[i + 1]);
        }
        for i in n - m..n - 1 {
            self.state[i] = self.state[i + m - n] ^ twiddle(self.state[i], self.state[i + 1]);
        }
        self.state[n - 1] = self.state[m - 1] ^ twiddle(self.state[n - 1], self.state[0]);

        self.cursor = 0;
        self.regenerations += 1;
    }

    /// Draw the next tempered 32-bit word
    fn next_raw(&mut self) -> u32 {
        if self.cursor == STATE_SIZE {
            self.regenerate();
        }

        let word = self.state[self.cursor];
        self.cursor += 1;
        temper(word)
    }

    /// Generate the next uniform value over `[0, 2^32)`
    pub fn next_uint32(&mut self) -> u32 {
        self.next_raw()
    }

    /// Fill `dest` with tempered words, one per slot
    pub fn fill(&mut self, dest: &mut [u32]) {
        for slot in dest.iter_mut() {
            *slot = self.next_raw();
        }
    }

    /// Index of the next unconsumed state word (624 when exhausted)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of draws left before the next twist
    pub fn remaining_in_block(&self) -> usize {
        STATE_SIZE - self.cursor
    }

    /// True once any seed operation has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of twist passes performed since construction
    pub fn regeneration_count(&self) -> u64 {
        self.regenerations
    }

    pub(crate) fn state(&self) -> &[u32; STATE_SIZE] {
        &self.state
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("cursor", &self.cursor)
            .field("initialized", &self.initialized)
            .field("regenerations", &self.regenerations)
            .finish_non_exhaustive()
    }
}

#[inline]
fn twiddle(u: u32, v: u32) -> u32 {
    let mixed = ((u & UPPER_MASK) | (v & LOWER_MASK)) >> 1;
    if v & 1 == 1 {
        mixed ^ MATRIX_A
    } else {
        mixed
    }
}

#[inline]
fn temper(mut x: u32) -> u32 {
    x ^= x >> 11;
    x ^= (x << 7) & 0x9D2C_5680;
    x ^= (x << 15) & 0xEFC6_0000;
    x ^ (x >> 18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_scalar_fills_state_with_knuth_recurrence() {
        let rng = Generator::with_seed(1);
        assert_eq!(rng.state()[0], 1);
        // 1812433253 * (1 ^ 0) + 1
        assert_eq!(rng.state()[1], 1812433254);
        assert_eq!(rng.cursor(), STATE_SIZE);
    }

    #[test]
    fn test_seed_sequence_forces_msb_in_first_word() {
        let rng = Generator::with_seed_sequence(&[7]).unwrap();
        assert_eq!(rng.state()[0], 0x8000_0000);
        assert_eq!(rng.cursor(), STATE_SIZE);
    }

    #[test]
    fn test_empty_sequence_leaves_state_untouched() {
        let mut rng = Generator::with_seed(99);
        rng.next_uint32();
        let before = *rng.state();
        let cursor = rng.cursor();

        assert_eq!(rng.seed_sequence(&[]), Err(RngError::EmptySeedSequence));
        assert_eq!(*rng.state(), before);
        assert_eq!(rng.cursor(), cursor);
    }

    #[test]
    fn test_twiddle_applies_matrix_only_for_odd_v() {
        assert_eq!(twiddle(0x8000_0000, 0), 0x4000_0000);
        assert_eq!(twiddle(0, 1), MATRIX_A);
        assert_eq!(twiddle(0x8000_0000, 0x7FFF_FFFE), 0x7FFF_FFFF);
    }

    #[test]
    fn test_temper_zero_is_zero() {
        assert_eq!(temper(0), 0);
    }

    #[test]
    fn test_unseeded_generator_is_not_initialized() {
        let rng = Generator::unseeded();
        assert!(!rng.is_initialized());
        assert!(Generator::new().is_initialized());
    }

    #[test]
    fn test_debug_does_not_dump_state() {
        let rendered = format!("{:?}", Generator::new());
        assert!(rendered.starts_with("Generator"));
        assert!(rendered.contains("cursor: 624"));
        assert!(rendered.len() < 200);
    }
}
