//! Injectable random sources.
//!
//! Every generator that adds jitter takes a [`RandomSource`] argument instead
//! of reaching for a process-wide generator, so estimates are reproducible
//! whenever the source is.
//!
//! # Example
//!
//! ```
//! use airq_core::{RandomSource, SequenceSource, StdRandom};
//!
//! // Seeded: same seed, same sequence
//! let mut a = StdRandom::seeded(7);
//! let mut b = StdRandom::seeded(7);
//! assert_eq!(a.next_uniform(), b.next_uniform());
//!
//! // Scripted: returns the given values in a cycle
//! let mut s = SequenceSource::new(vec![0.25, 0.75]);
//! assert_eq!(s.next_uniform(), 0.25);
//! assert_eq!(s.next_uniform(), 0.75);
//! assert_eq!(s.next_uniform(), 0.25);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value a source may return.
const MAX_UNIFORM: f64 = 1.0 - f64::EPSILON;

/// A source of uniformly distributed reals in `[0, 1)`.
///
/// Only [`next_uniform`](Self::next_uniform) must be implemented; the other
/// methods derive from it.
pub trait RandomSource {
    /// Next uniform real in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform real in `[-half_width, +half_width)`.
    fn symmetric(&mut self, half_width: f64) -> f64 {
        (self.next_uniform() * 2.0 - 1.0) * half_width
    }

    /// Uniform integer in the half-open range `[low, high)`.
    ///
    /// Returns `low` when the range is empty.
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        // Widened so that extreme bounds cannot overflow
        let width = (i64::from(high) - i64::from(low)) as f64;
        let offset = (self.next_uniform().clamp(0.0, MAX_UNIFORM) * width).floor() as i64;
        let value = (i64::from(low) + offset).min(i64::from(high) - 1);
        i32::try_from(value).unwrap_or(high - 1)
    }
}

/// Random source backed by the standard seeded generator from `rand`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Random source that replays a fixed list of values in a cycle.
///
/// Values are clamped into `[0, 1)`. An empty list behaves like a constant
/// `0.5`, which makes every symmetric jitter zero.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    index: usize,
}

impl SequenceSource {
    /// Replay `values` in order, wrapping around at the end.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Always return `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.5
        } else {
            self.values[self.index % self.values.len()]
        };
        self.index += 1;
        value.clamp(0.0, MAX_UNIFORM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn test_std_random_in_unit_interval() {
        let mut rng = StdRandom::seeded(1);
        for _ in 0..1000 {
            let v = rng.next_uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_sequence_cycles_and_counts() {
        let mut s = SequenceSource::new(vec![0.1, 0.2, 0.3]);
        let drawn: Vec<f64> = (0..5).map(|_| s.next_uniform()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2]);
        assert_eq!(s.draws(), 5);
    }

    #[test]
    fn test_sequence_clamps() {
        let mut s = SequenceSource::new(vec![-1.0, 1.0, 7.0]);
        assert_eq!(s.next_uniform(), 0.0);
        assert!(s.next_uniform() < 1.0);
        assert!(s.next_uniform() < 1.0);
    }

    #[test]
    fn test_empty_sequence_is_midpoint() {
        let mut s = SequenceSource::new(Vec::new());
        assert_eq!(s.next_uniform(), 0.5);
        assert_eq!(s.symmetric(10.0), 0.0);
    }

    #[test]
    fn test_symmetric_bounds() {
        assert_eq!(SequenceSource::constant(0.0).symmetric(8.0), -8.0);
        assert_eq!(SequenceSource::constant(0.5).symmetric(8.0), 0.0);
        assert!(SequenceSource::constant(1.0).symmetric(8.0) < 8.0);
    }

    #[test]
    fn test_int_in_half_open() {
        assert_eq!(SequenceSource::constant(0.0).int_in(150, 250), 150);
        assert_eq!(SequenceSource::constant(0.999_999).int_in(150, 250), 249);
        assert_eq!(SequenceSource::constant(1.0).int_in(150, 250), 249);
        assert_eq!(SequenceSource::constant(0.1).int_in(150, 250), 160);
    }

    #[test]
    fn test_int_in_empty_range() {
        assert_eq!(SequenceSource::constant(0.7).int_in(5, 5), 5);
        assert_eq!(SequenceSource::constant(0.7).int_in(9, 3), 9);
    }

    #[test]
    fn test_int_in_extreme_bounds() {
        assert_eq!(SequenceSource::constant(0.0).int_in(i32::MIN, i32::MAX), i32::MIN);
        let top = SequenceSource::constant(1.0).int_in(i32::MIN, i32::MAX);
        assert!(top < i32::MAX);
        assert!(top > 0);
    }
}
