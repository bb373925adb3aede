//! Sequence sources: random arrays, per-algorithm samples, parsed input.

pub mod rng;

pub use rng::SeqRng;

use crate::error::{VizError, VizResult};
use crate::sorting::Algorithm;

/// Default number of elements shown.
pub const SAMPLE_SIZE: usize = 8;

/// Default smallest random value.
pub const DEFAULT_MIN: i64 = 1;

/// Default largest random value.
pub const DEFAULT_MAX: i64 = 50;

/// Random sequence of `size` values in `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
#[must_use]
pub fn random_sequence(rng: &mut SeqRng, size: usize, min: i64, max: i64) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range_i64(min, max)).collect()
}

/// Sample data chosen to show off each algorithm.
///
/// Bubble sort gets many adjacent swaps, insertion sort long shifts,
/// selection sort minima far from their final slot.
#[must_use]
pub fn sample_for(algorithm: Algorithm) -> Vec<i64> {
    match algorithm {
        Algorithm::Bubble => vec![5, 1, 4, 2, 8, 3, 7, 6],
        Algorithm::Insertion => vec![9, 5, 1, 4, 3, 8, 2, 7],
        Algorithm::Selection => vec![64, 25, 12, 22, 11, 45, 33, 18],
    }
}

/// Parse a comma or whitespace separated list of integers.
///
/// # Errors
///
/// Returns [`VizError::InvalidValue`] for the first token that is not an
/// integer.
pub fn parse_values(input: &str) -> VizResult<Vec<i64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<i64>().map_err(|_| VizError::InvalidValue {
                token: t.to_string(),
            })
        })
        .collect()
}
