//! Exact DP solver and KPI evaluation.
//!
//! Provides the backward-induction profit solver and schedule quality
//! metrics.
//!
//! # Algorithm
//!
//! [`ProfitSolver`] computes, for every start time `t`, the maximum profit
//! achievable over `[t, n]` (the value table), records which build type
//! realizes it (the choice table), then reconstructs one optimal schedule by
//! a linear walk from `t = 0`. The result is exact: `O(n * k)` time for
//! horizon `n` and `k` build types, with no pruning or approximation.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes decision-support metrics from a solution:
//! utilization, efficiency (profit per time unit used), and average revenue
//! per build.
//!
//! # Reference
//!
//! Bellman (1957), "Dynamic Programming", Ch. 3: finite-horizon backward
//! induction.

mod dp;
mod kpi;

pub use dp::{ProfitSolver, Solution, SolveError, SolveRequest};
pub use kpi::ScheduleKpi;
