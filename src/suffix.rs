//! Pseudo-random directory suffixes.
//!
//! Default checkout directories are named `<suffix>_<repo>` where the suffix
//! is nine decimal digits drawn from a linear congruential generator. The
//! generator is seeded once from the clock and the process id. It is not
//! cryptographically random; it only has to keep two repositories with the
//! same short name apart within a single run.

use std::time::{SystemTime, UNIX_EPOCH};

// Numerical Recipes constants
const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: u32 = 1_000_000_000;

/// Width of every generated suffix.
pub const SUFFIX_LEN: usize = 9;

/// Generates nine-digit suffixes for default checkout directories.
#[derive(Debug, Clone)]
pub struct SuffixGenerator {
    state: u32,
}

impl SuffixGenerator {
    /// Create a generator seeded from the current time and process id.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seed = nanos.wrapping_add(u64::from(std::process::id()));
        Self::with_seed(seed as u32)
    }

    /// Create a generator with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the next suffix.
    pub fn next_suffix(&mut self) -> String {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        format!("{:0width$}", self.state % MODULUS, width = SUFFIX_LEN)
    }
}

impl Default for SuffixGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_sequence_from_zero() {
        let mut generator = SuffixGenerator::with_seed(0);
        // 0 * a + c
        assert_eq!(generator.next_suffix(), "013904223");
    }

    #[test]
    fn test_suffix_keeps_leading_zeros() {
        let mut generator = SuffixGenerator::with_seed(0);
        let suffix = generator.next_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.starts_with('0'));
    }

    #[test]
    fn test_suffixes_are_unique_within_a_run() {
        let mut generator = SuffixGenerator::new();
        let suffixes: HashSet<String> = (0..50).map(|_| generator.next_suffix()).collect();
        assert_eq!(suffixes.len(), 50);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = SuffixGenerator::with_seed(42);
        let mut b = SuffixGenerator::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.next_suffix(), b.next_suffix());
        }
    }

    proptest! {
        /// Property: every suffix is exactly nine ASCII digits
        #[test]
        fn suffix_is_nine_digits(seed in any::<u32>(), steps in 1usize..20) {
            let mut generator = SuffixGenerator::with_seed(seed);
            for _ in 0..steps {
                let suffix = generator.next_suffix();
                prop_assert_eq!(suffix.len(), SUFFIX_LEN);
                prop_assert!(suffix.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
