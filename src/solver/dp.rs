//! Backward-induction profit solver.
//!
//! # Algorithm
//!
//! 1. `f[n] = 0`. For `t` from `n-1` down to `0`, try every build type that
//!    finishes by `n`: a type ending at `finish` earns
//!    `rate * (n - finish)` immediately plus `f[finish]` for the rest.
//! 2. `f[t]` is the best such total, or 0 if nothing fits or improves on
//!    doing nothing; `choice[t]` records the winning type index.
//! 3. Reconstruct one optimal schedule by walking `choice` from `t = 0`.
//!
//! Doing nothing is always a candidate with value 0, and a type displaces
//! the incumbent only on *strict* improvement. Two consequences: ties go to
//! the earliest index in the input order, and a zero-revenue build is never
//! selected.
//!
//! # Complexity
//! O(n * k) time, O(n) space, for horizon n and k build types.
//!
//! # Reference
//! Bellman (1957), "Dynamic Programming": finite-horizon backward induction.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{BuildSchedule, BuildType, ScheduleSummary, ScheduledBuild};
use crate::validation::{validate_input, ValidationError};

/// Solver failure.
///
/// The solver is all-or-nothing: on error no value table, schedule, or
/// summary is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The build type list failed validation; nothing was computed.
    #[error("invalid input: {}", .errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
    InvalidInput {
        /// All validation problems found.
        errors: Vec<ValidationError>,
    },
    /// Revenue or value accumulation exceeded the range of `u64`.
    #[error("arithmetic overflow during revenue accumulation")]
    Overflow,
}

/// Input container for one solve.
///
/// # Example
///
/// ```
/// use profit_scheduler::models::BuildType;
/// use profit_scheduler::solver::{ProfitSolver, SolveRequest};
///
/// let request = SolveRequest::new(30)
///     .with_build_type(BuildType::new("T", 5, 1500))
///     .with_build_type(BuildType::new("P", 4, 1000));
///
/// let solution = ProfitSolver::new().solve_request(&request).unwrap();
/// assert!(solution.optimal_profit() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Total time units available.
    pub horizon: usize,
    /// Build types, in tie-break order (earliest index wins ties).
    pub build_types: Vec<BuildType>,
}

impl SolveRequest {
    /// Creates a request with an empty type list.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            build_types: Vec::new(),
        }
    }

    /// Appends one build type.
    pub fn with_build_type(mut self, build_type: BuildType) -> Self {
        self.build_types.push(build_type);
        self
    }

    /// Replaces the build type list.
    pub fn with_build_types(mut self, build_types: Vec<BuildType>) -> Self {
        self.build_types = build_types;
        self
    }
}

/// A complete solver result.
///
/// Owned entirely by the invocation that produced it; no state is shared
/// across solves, so results may be moved freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// `values[t]` = maximum profit achievable over `[t, horizon]`.
    /// Length `horizon + 1`; `values[horizon] = 0`.
    pub values: Vec<u64>,
    /// `choices[t]` = type index realizing `values[t]`, `None` when doing
    /// nothing is optimal. Length `horizon + 1`.
    pub choices: Vec<Option<usize>>,
    /// One optimal schedule reconstructed from `choices`.
    pub schedule: BuildSchedule,
    /// Per-label counts and time usage derived from `schedule`.
    pub summary: ScheduleSummary,
}

impl Solution {
    /// The guaranteed-optimal total profit over the full horizon.
    pub fn optimal_profit(&self) -> u64 {
        self.values.first().copied().unwrap_or(0)
    }
}

/// Exact dynamic-programming profit solver.
///
/// Stateless: each [`solve`](ProfitSolver::solve) call owns its tables and
/// schedule, so one solver may serve concurrent callers without locking.
///
/// # Example
///
/// ```
/// use profit_scheduler::models::BuildType;
/// use profit_scheduler::solver::ProfitSolver;
///
/// let types = vec![
///     BuildType::new("Theatre", 5, 1500),
///     BuildType::new("Pub", 4, 1000),
///     BuildType::new("Commercial", 10, 2000),
/// ];
/// let solution = ProfitSolver::new().solve(30, &types).unwrap();
/// assert_eq!(solution.optimal_profit(), 113_500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfitSolver;

impl ProfitSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Computes the optimal schedule for `horizon` time units.
    ///
    /// # Errors
    /// [`SolveError::InvalidInput`] if the type list fails validation;
    /// [`SolveError::Overflow`] if any revenue or value accumulation
    /// exceeds `u64`.
    pub fn solve(&self, horizon: usize, types: &[BuildType]) -> Result<Solution, SolveError> {
        validate_input(types).map_err(|errors| SolveError::InvalidInput { errors })?;

        debug!(horizon, type_count = types.len(), "solving");

        let (values, choices) = build_tables(horizon, types)?;
        let schedule = reconstruct(horizon, types, &choices);
        let summary = ScheduleSummary::from_schedule(types, &schedule);

        debug!(
            optimal_profit = values[0],
            build_count = schedule.build_count(),
            "solve complete"
        );

        Ok(Solution {
            values,
            choices,
            schedule,
            summary,
        })
    }

    /// Solves from a request container.
    pub fn solve_request(&self, request: &SolveRequest) -> Result<Solution, SolveError> {
        self.solve(request.horizon, &request.build_types)
    }
}

/// Builds the value and choice tables by backward induction.
fn build_tables(
    horizon: usize,
    types: &[BuildType],
) -> Result<(Vec<u64>, Vec<Option<usize>>), SolveError> {
    let mut values = vec![0u64; horizon + 1];
    let mut choices = vec![None; horizon + 1];

    for t in (0..horizon).rev() {
        let mut best = 0u64;
        let mut best_choice = None;

        for (i, bt) in types.iter().enumerate() {
            // A duration too large for usize addition cannot fit any
            // horizon: a non-fitting candidate, not an overflow failure.
            let Some(finish) = t.checked_add(bt.duration) else {
                continue;
            };
            if finish > horizon {
                continue;
            }
            let earn_now = bt
                .rate
                .checked_mul((horizon - finish) as u64)
                .ok_or(SolveError::Overflow)?;
            let total = earn_now
                .checked_add(values[finish])
                .ok_or(SolveError::Overflow)?;
            // Strict improvement only: ties keep the earliest index, and a
            // zero-value build never beats doing nothing.
            if total > best {
                best = total;
                best_choice = Some(i);
            }
        }

        values[t] = best;
        choices[t] = best_choice;
    }

    Ok((values, choices))
}

/// Walks the choice table from t = 0, emitting one instance per selection.
fn reconstruct(horizon: usize, types: &[BuildType], choices: &[Option<usize>]) -> BuildSchedule {
    let mut schedule = BuildSchedule::new();
    let mut t = 0;

    while t < horizon {
        let Some(i) = choices[t] else { break };
        let bt = &types[i];
        let end = t + bt.duration;
        schedule.add_build(ScheduledBuild {
            start: t,
            end,
            label: bt.label.clone(),
            duration: bt.duration,
            // Cannot overflow: the same product was checked in build_tables.
            revenue: bt.rate * (horizon - end) as u64,
            type_index: i,
        });
        t = end;
    }

    schedule
}
