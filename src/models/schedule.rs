//! Schedule (solution) model.
//!
//! A schedule is a time-ordered, non-overlapping sequence of concrete build
//! instances reconstructed from the solver's choice table. Consecutive
//! instances are contiguous: each starts exactly where the previous one
//! ended. The derived [`ScheduleSummary`] is recomputed from the schedule,
//! never maintained independently.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::BuildType;

/// One concrete build occurrence in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledBuild {
    /// Start time (inclusive).
    pub start: usize,
    /// End time (`start + duration`).
    pub end: usize,
    /// Label of the originating build type.
    pub label: String,
    /// Time units consumed.
    pub duration: usize,
    /// Revenue earned: `rate * (horizon - end)`.
    pub revenue: u64,
    /// Index of the originating type in the solver's input list.
    pub type_index: usize,
}

/// A complete build schedule (solution to one solver invocation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSchedule {
    /// Build instances in start-time order.
    pub builds: Vec<ScheduledBuild>,
}

impl BuildSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a build instance.
    pub fn add_build(&mut self, build: ScheduledBuild) {
        self.builds.push(build);
    }

    /// Number of scheduled builds.
    pub fn build_count(&self) -> usize {
        self.builds.len()
    }

    /// Sum of revenue across all instances.
    pub fn total_revenue(&self) -> u64 {
        self.builds.iter().map(|b| b.revenue).sum()
    }

    /// Sum of durations across all instances.
    pub fn total_time_used(&self) -> usize {
        self.builds.iter().map(|b| b.duration).sum()
    }

    /// End time of the last instance, or 0 for an empty schedule.
    pub fn makespan(&self) -> usize {
        self.builds.iter().map(|b| b.end).max().unwrap_or(0)
    }

    /// All instances of a given build type label.
    pub fn builds_for_label(&self, label: &str) -> Vec<&ScheduledBuild> {
        self.builds.iter().filter(|b| b.label == label).collect()
    }

    /// Whether consecutive instances are back-to-back with no gaps or
    /// overlaps.
    pub fn is_contiguous(&self) -> bool {
        self.builds
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }
}

/// Per-label occurrence counts and aggregate time usage.
///
/// Every label from the input type list appears as a key, with count 0 for
/// unused types. Types sharing a label merge into one count. Keys are
/// ordered (`BTreeMap`) so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Occurrence count per build type label.
    pub counts: BTreeMap<String, usize>,
    /// Sum of all scheduled durations.
    pub total_time_used: usize,
}

impl ScheduleSummary {
    /// Derives the summary from a schedule and its input type list.
    pub fn from_schedule(types: &[BuildType], schedule: &BuildSchedule) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for t in types {
            counts.entry(t.label.clone()).or_insert(0);
        }
        let mut total_time_used = 0;
        for b in &schedule.builds {
            *counts.entry(b.label.clone()).or_insert(0) += 1;
            total_time_used += b.duration;
        }
        Self {
            counts,
            total_time_used,
        }
    }

    /// Total number of scheduled builds across all labels.
    pub fn total_builds(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(start: usize, duration: usize, label: &str, revenue: u64, idx: usize) -> ScheduledBuild {
        ScheduledBuild {
            start,
            end: start + duration,
            label: label.into(),
            duration,
            revenue,
            type_index: idx,
        }
    }

    fn sample_schedule() -> BuildSchedule {
        let mut s = BuildSchedule::new();
        s.add_build(build(0, 5, "T", 37_500, 0));
        s.add_build(build(5, 5, "T", 30_000, 0));
        s.add_build(build(10, 4, "P", 16_000, 1));
        s
    }

    #[test]
    fn test_schedule_aggregates() {
        let s = sample_schedule();
        assert_eq!(s.build_count(), 3);
        assert_eq!(s.total_revenue(), 83_500);
        assert_eq!(s.total_time_used(), 14);
        assert_eq!(s.makespan(), 14);
    }

    #[test]
    fn test_builds_for_label() {
        let s = sample_schedule();
        assert_eq!(s.builds_for_label("T").len(), 2);
        assert_eq!(s.builds_for_label("P").len(), 1);
        assert!(s.builds_for_label("C").is_empty());
    }

    #[test]
    fn test_is_contiguous() {
        let s = sample_schedule();
        assert!(s.is_contiguous());

        let mut gapped = BuildSchedule::new();
        gapped.add_build(build(0, 5, "T", 0, 0));
        gapped.add_build(build(6, 4, "P", 0, 1));
        assert!(!gapped.is_contiguous());
    }

    #[test]
    fn test_empty_schedule() {
        let s = BuildSchedule::new();
        assert_eq!(s.build_count(), 0);
        assert_eq!(s.total_revenue(), 0);
        assert_eq!(s.makespan(), 0);
        assert!(s.is_contiguous());
    }

    #[test]
    fn test_summary_counts_every_label() {
        let types = vec![
            BuildType::new("T", 5, 1500),
            BuildType::new("P", 4, 1000),
            BuildType::new("C", 10, 2000),
        ];
        let summary = ScheduleSummary::from_schedule(&types, &sample_schedule());
        assert_eq!(summary.counts["T"], 2);
        assert_eq!(summary.counts["P"], 1);
        // Unused type still present with count 0.
        assert_eq!(summary.counts["C"], 0);
        assert_eq!(summary.total_time_used, 14);
        assert_eq!(summary.total_builds(), 3);
    }

    #[test]
    fn test_summary_merges_duplicate_labels() {
        let types = vec![BuildType::new("T", 5, 1500), BuildType::new("T", 3, 900)];
        let summary = ScheduleSummary::from_schedule(&types, &sample_schedule());
        assert_eq!(summary.counts.len(), 2); // "T" and "P" from the schedule
        assert_eq!(summary.counts["T"], 2);
    }

    #[test]
    fn test_summary_empty_schedule() {
        let types = vec![BuildType::new("X", 10, 100)];
        let summary = ScheduleSummary::from_schedule(&types, &BuildSchedule::new());
        assert_eq!(summary.counts["X"], 0);
        assert_eq!(summary.total_time_used, 0);
        assert_eq!(summary.total_builds(), 0);
    }

    #[test]
    fn test_schedule_serde() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: BuildSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
