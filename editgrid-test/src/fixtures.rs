//! Test fixtures and data generators
//!
//! Reference pairs with known results for use across the EditGrid workspace.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two words and the cost the engine is expected to report for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair {
    pub first: &'static str,
    pub second: &'static str,
    pub expected: i32,
}

impl WordPair {
    pub const fn new(first: &'static str, second: &'static str, expected: i32) -> Self {
        Self {
            first,
            second,
            expected,
        }
    }

    pub fn first_chars(&self) -> Vec<char> {
        self.first.chars().collect()
    }

    pub fn second_chars(&self) -> Vec<char> {
        self.second.chars().collect()
    }

    /// The same pair with the sides swapped.
    pub fn swapped(&self) -> Self {
        Self::new(self.second, self.first, self.expected)
    }
}

/// Distances under the default cost model (indels 1, substitution 0/2).
pub const CLASSIC_PAIRS: &[WordPair] = &[
    WordPair::new("", "", 0),
    WordPair::new("abc", "", 3),
    WordPair::new("", "abcd", 4),
    WordPair::new("bane", "barn", 2),
    WordPair::new("ab", "ba", 2),
    WordPair::new("kitten", "sitting", 5),
    WordPair::new("flaw", "lawn", 2),
    WordPair::new("intention", "execution", 8),
];

/// Distances with unit substitution (Levenshtein).
pub const UNIT_PAIRS: &[WordPair] = &[
    WordPair::new("kitten", "sitting", 3),
    WordPair::new("flaw", "lawn", 2),
    WordPair::new("saturday", "sunday", 3),
    WordPair::new("intention", "execution", 5),
    WordPair::new("ab", "ba", 2),
];

/// Deterministic random sequence over `alphabet`.
pub fn random_sequence(length: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// DNA sequence of `length` bases with roughly `rate` of them mutated.
pub fn mutated_dna(length: usize, rate: f64, seed: u64) -> (Vec<u8>, Vec<u8>) {
    let reference = random_sequence(length, b"ACGT", seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let query = reference
        .iter()
        .map(|&base| {
            if rng.gen_bool(rate) {
                match base {
                    b'A' => b'T',
                    b'T' => b'G',
                    b'G' => b'C',
                    _ => b'A',
                }
            } else {
                base
            }
        })
        .collect();
    (reference, query)
}

/// A few lines of prose for word ingestion tests.
pub const SAMPLE_TEXT: &str = "\
The kitten sat, sitting on the mitten.
Kitten? Bitten! The written word was smitten.
";
