//! Schedule quality metrics (KPIs).
//!
//! Decision-support indicators computed from a completed [`Solution`].
//! Pure consumers of solver output: nothing here re-derives the DP.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Profit | `values[0]`, the optimal revenue |
//! | Total Builds | Number of scheduled instances |
//! | Utilization | time used / horizon |
//! | Efficiency | profit / time used |
//! | Avg Revenue / Build | profit / build count |

use serde::{Deserialize, Serialize};

use super::Solution;

/// Performance indicators for one solution.
///
/// Ratio metrics fall back to 0 when their denominator is 0 (empty schedule
/// or zero horizon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Optimal total revenue over the horizon.
    pub total_profit: u64,
    /// Number of scheduled builds.
    pub total_builds: usize,
    /// Sum of scheduled durations.
    pub total_time_used: usize,
    /// Fraction of the horizon spent building (0.0..1.0).
    pub utilization: f64,
    /// Profit per unit of time actually used.
    pub efficiency: f64,
    /// Mean revenue per scheduled build (integer division).
    pub avg_revenue_per_build: u64,
}

impl ScheduleKpi {
    /// Computes KPIs from a solution and the horizon it was solved for.
    pub fn calculate(solution: &Solution, horizon: usize) -> Self {
        let total_profit = solution.optimal_profit();
        let total_builds = solution.schedule.build_count();
        let total_time_used = solution.summary.total_time_used;

        let utilization = if horizon > 0 {
            total_time_used as f64 / horizon as f64
        } else {
            0.0
        };
        let efficiency = if total_time_used > 0 {
            total_profit as f64 / total_time_used as f64
        } else {
            0.0
        };
        let avg_revenue_per_build = if total_builds > 0 {
            total_profit / total_builds as u64
        } else {
            0
        };

        Self {
            total_profit,
            total_builds,
            total_time_used,
            utilization,
            efficiency,
            avg_revenue_per_build,
        }
    }

    /// Whether the solution meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_utilization: f64, min_efficiency: f64) -> bool {
        self.utilization >= min_utilization && self.efficiency >= min_efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BuildType;
    use crate::solver::ProfitSolver;

    fn sample_types() -> Vec<BuildType> {
        vec![
            BuildType::new("T", 5, 1500),
            BuildType::new("P", 4, 1000),
            BuildType::new("C", 10, 2000),
        ]
    }

    #[test]
    fn test_kpi_n30() {
        let solution = ProfitSolver::new().solve(30, &sample_types()).unwrap();
        let kpi = ScheduleKpi::calculate(&solution, 30);

        assert_eq!(kpi.total_profit, 113_500);
        assert_eq!(kpi.total_builds, 6);
        assert_eq!(kpi.total_time_used, 29);
        assert!((kpi.utilization - 29.0 / 30.0).abs() < 1e-10);
        assert!((kpi.efficiency - 113_500.0 / 29.0).abs() < 1e-10);
        assert_eq!(kpi.avg_revenue_per_build, 113_500 / 6);
    }

    #[test]
    fn test_kpi_empty_schedule() {
        let types = vec![BuildType::new("X", 10, 100)];
        let solution = ProfitSolver::new().solve(5, &types).unwrap();
        let kpi = ScheduleKpi::calculate(&solution, 5);

        assert_eq!(kpi.total_profit, 0);
        assert_eq!(kpi.total_builds, 0);
        assert_eq!(kpi.total_time_used, 0);
        assert_eq!(kpi.utilization, 0.0);
        assert_eq!(kpi.efficiency, 0.0);
        assert_eq!(kpi.avg_revenue_per_build, 0);
    }

    #[test]
    fn test_kpi_zero_horizon() {
        let solution = ProfitSolver::new().solve(0, &sample_types()).unwrap();
        let kpi = ScheduleKpi::calculate(&solution, 0);
        assert_eq!(kpi.utilization, 0.0);
    }

    #[test]
    fn test_meets_thresholds() {
        let solution = ProfitSolver::new().solve(30, &sample_types()).unwrap();
        let kpi = ScheduleKpi::calculate(&solution, 30);

        assert!(kpi.meets_thresholds(0.9, 1000.0));
        assert!(!kpi.meets_thresholds(0.99, 1000.0));
        assert!(!kpi.meets_thresholds(0.9, 1e9));
    }
}
