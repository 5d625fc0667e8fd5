//! Random coverage values.
//!
//! None of these are derived from real execution; rates at one level need not
//! agree with the hit counts underneath them.

use rand::Rng;
use std::fmt;

/// Hit counts are drawn uniformly from this list, so misses and single hits dominate.
pub const HIT_COUNTS: [u32; 10] = [0, 0, 1, 1, 1, 2, 3, 5, 10, 42];

/// Chance that a class-level line is marked as a branch point.
pub const BRANCH_PROBABILITY: f64 = 0.15;

pub fn hits<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    HIT_COUNTS[rng.gen_range(0..HIT_COUNTS.len())]
}

/// Uniform draw in `[lo, hi]`, rounded to two decimals.
pub fn rate<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    (rng.gen_range(lo..=hi) * 100.0).round() / 100.0
}

pub fn branch_point<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(BRANCH_PROBABILITY)
}

/// Covered/total branch pair for one line, rendered as `N% (A/B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionCoverage {
    pub covered: u32,
    pub total: u32,
}

impl ConditionCoverage {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let covered = rng.gen_range(0..=4);
        let total = rng.gen_range(covered..=covered + 4);

        // A line with fewer than two outcomes is not a branch.
        if total < 2 {
            return Self {
                covered: rng.gen_range(0..=2),
                total: 2,
            };
        }

        Self { covered, total }
    }

    /// Whole percentage, ties rounded to even.
    pub fn percent(&self) -> u32 {
        (100.0 * f64::from(self.covered) / f64::from(self.total)).round_ties_even() as u32
    }
}

impl fmt::Display for ConditionCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% ({}/{})", self.percent(), self.covered, self.total)
    }
}
