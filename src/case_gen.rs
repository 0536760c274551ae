//! Input case generation for the benchmark.
//!
//! All three distributions of one case set come from a single underlying
//! random draw: "sorted" and "reverse" are permutations of "random", so the
//! cases are size- and value-matched and only differ in order. The RNG is
//! supplied by the caller and seeded once per process, which keeps a whole
//! run reproducible without any global state.

use rand::Rng;

/// Upper bound (inclusive) for generated element values.
pub const MAX_VALUE: u32 = 10_000;

/// Three labeled input distributions of one size, drawn from one multiset.
#[derive(Debug, Clone)]
pub struct CaseSet {
    /// Uniform draws in `[0, MAX_VALUE]`.
    pub random: Vec<u32>,
    /// The same multiset, ascending.
    pub sorted: Vec<u32>,
    /// The same multiset, descending.
    pub reverse: Vec<u32>,
}

impl CaseSet {
    /// Generate a case set of `n` elements from `rng`.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Self {
        let random: Vec<u32> = (0..n).map(|_| rng.gen_range(0..=MAX_VALUE)).collect();

        let mut sorted = random.clone();
        sorted.sort();

        let mut reverse = sorted.clone();
        reverse.reverse();

        CaseSet {
            random,
            sorted,
            reverse,
        }
    }

    /// The cases with their report labels, in presentation order.
    pub fn labeled(&self) -> [(&'static str, &[u32]); 3] {
        [
            ("random", &self.random[..]),
            ("sorted", &self.sorted[..]),
            ("reverse", &self.reverse[..]),
        ]
    }
}
