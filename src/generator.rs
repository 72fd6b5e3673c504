//! # Sortable-Sequence Generator
//!
//! Produces the integer sequences fed to the algorithms under test. Every
//! sequence of length `n` contains the distinct values `0..n`; what varies is
//! the arrangement:
//!
//! - **Single-shot**: [`shuffled_sequence`] yields one seeded shuffle.
//! - **Repeating stream**: [`SequenceStream`] is an infinite, lazily-evaluated
//!   iterator of sequences. In random mode every pull is a fresh shuffle drawn
//!   from a single seeded RNG stream; in fixed mode every pull is the same
//!   pre-sorted or anti-sorted sequence.
//!
//! Determinism contract: the same seed and length always reproduce the same
//! sequence of shuffles, so benchmark results stay comparable across runs. The
//! RNG is owned by the stream rather than being process-global state, which
//! keeps independent streams independent of each other and of evaluation
//! order.

use crate::cli::InputDistribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Produce one randomly shuffled sequence of the values `0..n`.
///
/// With `Some(seed)` the shuffle is fully deterministic; with `None` the RNG
/// is seeded from OS entropy and two calls will, with overwhelming
/// probability, disagree.
pub fn shuffled_sequence(n: usize, seed: Option<u64>) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n as u64).collect();
    let mut rng = rng_from_seed(seed);
    values.shuffle(&mut rng);
    values
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// An unbounded stream of benchmark input sequences.
///
/// The stream is an explicit state machine: the current permutation plus an
/// optional RNG. `next()` never returns `None`; consumers pull as many
/// elements as they need (e.g. via `take`) without knowing a length up front.
pub struct SequenceStream {
    current: Vec<u64>,
    rng: Option<StdRng>,
}

impl SequenceStream {
    /// Build the stream matching a configured distribution.
    pub fn new(n: usize, distribution: InputDistribution, seed: Option<u64>) -> Self {
        match distribution {
            InputDistribution::Random => Self::random(n, seed),
            InputDistribution::Sorted => Self::fixed((0..n as u64).collect()),
            InputDistribution::ReverseSorted => Self::fixed((0..n as u64).rev().collect()),
        }
    }

    /// Stream of independent random shuffles of `0..n`, continuing a single
    /// seeded RNG stream across pulls.
    pub fn random(n: usize, seed: Option<u64>) -> Self {
        Self {
            current: (0..n as u64).collect(),
            rng: Some(rng_from_seed(seed)),
        }
    }

    /// Stream that repeats the given sequence indefinitely.
    pub fn fixed(sequence: Vec<u64>) -> Self {
        Self {
            current: sequence,
            rng: None,
        }
    }
}

impl Iterator for SequenceStream {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Vec<u64>> {
        if let Some(rng) = &mut self.rng {
            self.current.shuffle(rng);
        }
        Some(self.current.clone())
    }
}
