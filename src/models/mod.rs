//! Scheduling domain models.
//!
//! Core data types for the build-scheduling problem and its solution.
//! Inputs are [`BuildType`] descriptors plus a horizon; outputs are a
//! [`BuildSchedule`] of concrete [`ScheduledBuild`] instances and a derived
//! [`ScheduleSummary`].
//!
//! All types serialize with serde so downstream report, CSV, and chart
//! consumers can work directly from solver output. Revenue fields stay
//! numeric — currency formatting is a presentation concern outside this
//! crate.

mod build_type;
mod schedule;

pub use build_type::BuildType;
pub use schedule::{BuildSchedule, ScheduleSummary, ScheduledBuild};
