//! Build type (activity descriptor) model.
//!
//! A build type is a reusable kind of build with a fixed duration and a
//! revenue rate. Rate is earned per unit of time *remaining* after the build
//! finishes: a build completing at time `end` within horizon `n` earns
//! `rate * (n - end)`.

use serde::{Deserialize, Serialize};

/// A repeatable build type.
///
/// Labels act as grouping keys for summary statistics and need not be
/// unique; two types may share a label and their instance counts merge.
/// Tie-breaking between equally profitable types follows input order
/// (earliest index wins), so the position of a type in the input list is
/// part of the problem definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildType {
    /// Display name, used as the grouping key in summaries.
    pub label: String,
    /// Time units to complete one instance. Must be >= 1.
    pub duration: usize,
    /// Revenue per unit of remaining time after completion.
    pub rate: u64,
}

impl BuildType {
    /// Creates a new build type.
    pub fn new(label: impl Into<String>, duration: usize, rate: u64) -> Self {
        Self {
            label: label.into(),
            duration,
            rate,
        }
    }

    /// Whether one instance fits when started at time `t` within `horizon`.
    ///
    /// A duration too large for `usize` addition never fits.
    #[inline]
    pub fn fits_at(&self, t: usize, horizon: usize) -> bool {
        t.checked_add(self.duration)
            .map_or(false, |finish| finish <= horizon)
    }

    /// Revenue if a single instance starts at time 0: `rate * (horizon - duration)`.
    ///
    /// Returns 0 when the build does not fit the horizon at all, and `None`
    /// on arithmetic overflow. This is the per-type baseline that comparison
    /// charts plot against duration and rate.
    pub fn potential_revenue(&self, horizon: usize) -> Option<u64> {
        if self.duration > horizon {
            return Some(0);
        }
        self.rate.checked_mul((horizon - self.duration) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_type_new() {
        let bt = BuildType::new("Theatre", 5, 1500);
        assert_eq!(bt.label, "Theatre");
        assert_eq!(bt.duration, 5);
        assert_eq!(bt.rate, 1500);
    }

    #[test]
    fn test_fits_at() {
        let bt = BuildType::new("T", 5, 1500);
        assert!(bt.fits_at(0, 5));
        assert!(bt.fits_at(25, 30));
        assert!(!bt.fits_at(26, 30));
        assert!(!bt.fits_at(0, 4));
    }

    #[test]
    fn test_fits_at_huge_duration() {
        let bt = BuildType::new("X", usize::MAX, 100);
        assert!(!bt.fits_at(0, usize::MAX - 1));
        assert!(!bt.fits_at(1, usize::MAX));
    }

    #[test]
    fn test_potential_revenue() {
        let bt = BuildType::new("T", 5, 1500);
        // Starts at 0, ends at 5, earns on 25 remaining units.
        assert_eq!(bt.potential_revenue(30), Some(37_500));
        // Exactly fills the horizon: no remaining time to earn on.
        assert_eq!(bt.potential_revenue(5), Some(0));
        // Does not fit.
        assert_eq!(bt.potential_revenue(4), Some(0));
    }

    #[test]
    fn test_potential_revenue_overflow() {
        let bt = BuildType::new("X", 1, u64::MAX);
        assert_eq!(bt.potential_revenue(3), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let bt = BuildType::new("Pub", 4, 1000);
        let json = serde_json::to_string(&bt).unwrap();
        let back: BuildType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bt);
    }
}
