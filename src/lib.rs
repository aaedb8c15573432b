//! Revenue-maximizing build scheduling over a discrete time horizon.
//!
//! Given a set of repeatable build types (fixed duration, per-unit-time
//! revenue rate) and a horizon of `n` integer time units, computes the
//! schedule that maximizes total revenue. Revenue for a build accrues on the
//! time *remaining* after it finishes, not during its execution, so the
//! solver must trade build duration against earning window — an exact
//! dynamic program, not a heuristic.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`BuildType`](models::BuildType),
//!   [`BuildSchedule`](models::BuildSchedule),
//!   [`ScheduledBuild`](models::ScheduledBuild),
//!   [`ScheduleSummary`](models::ScheduleSummary)
//! - **`solver`**: The DP kernel — [`ProfitSolver`](solver::ProfitSolver),
//!   [`Solution`](solver::Solution), and [`ScheduleKpi`](solver::ScheduleKpi)
//!   quality metrics
//! - **`validation`**: Input integrity checks (empty type set, zero
//!   durations)
//!
//! # Example
//!
//! ```
//! use profit_scheduler::models::BuildType;
//! use profit_scheduler::solver::ProfitSolver;
//!
//! let types = vec![
//!     BuildType::new("Theatre", 5, 1500),
//!     BuildType::new("Pub", 4, 1000),
//!     BuildType::new("Commercial", 10, 2000),
//! ];
//!
//! let solution = ProfitSolver::new().solve(30, &types).unwrap();
//! assert_eq!(solution.optimal_profit(), solution.schedule.total_revenue());
//! ```
//!
//! # Architecture
//!
//! The solver is pure and synchronous: each call owns its value/choice tables
//! and schedule, so concurrent invocations need no synchronization. The crate
//! holds no I/O, persistence, or formatting — report, CSV, and chart
//! consumers work from the serde-serializable output types.
//!
//! # Reference
//!
//! Bellman (1957), "Dynamic Programming" — backward induction over a finite
//! horizon.

pub mod models;
pub mod solver;
pub mod validation;
