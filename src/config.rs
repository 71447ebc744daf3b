//! Configuration parameters for penalty management.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration settings for the adaptive penalty coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyParams {
    /// Initial penalty coefficient for each unit of excess load
    pub init_capacity_penalty: f64,
    /// Initial penalty coefficient for each unit of time warp
    pub init_time_warp_penalty: f64,
    /// Factor applied when too few solutions are feasible
    pub penalty_increase: f64,
    /// Factor applied when too many solutions are feasible
    pub penalty_decrease: f64,
    /// Target proportion of feasible solutions
    pub target_feasible: f64,
    /// Half-width of the band around the target in which nothing changes
    pub feasibility_tolerance: f64,
    /// Lower bound on either coefficient
    pub min_penalty: f64,
    /// Upper bound on either coefficient
    pub max_penalty: f64,
    /// Multiplier applied to both coefficients during repair
    pub repair_booster: f64,
    /// Number of registered feasibility observations between updates
    pub num_registrations_between_updates: usize,
}

impl Default for PenaltyParams {
    fn default() -> Self {
        PenaltyParams {
            init_capacity_penalty: 20.0,
            init_time_warp_penalty: 6.0,
            penalty_increase: 1.2,
            penalty_decrease: 0.85,
            target_feasible: 0.2,
            feasibility_tolerance: 0.05,
            min_penalty: 0.1,
            max_penalty: 100_000.0,
            repair_booster: 12.0,
            num_registrations_between_updates: 100,
        }
    }
}

impl PenaltyParams {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        PenaltyParams::default()
    }

    /// Set the initial capacity penalty.
    pub fn with_init_capacity_penalty(mut self, penalty: f64) -> Self {
        self.init_capacity_penalty = penalty;
        self
    }

    /// Set the initial time warp penalty.
    pub fn with_init_time_warp_penalty(mut self, penalty: f64) -> Self {
        self.init_time_warp_penalty = penalty;
        self
    }

    /// Set the growth and shrink factors.
    pub fn with_factors(mut self, increase: f64, decrease: f64) -> Self {
        self.penalty_increase = increase;
        self.penalty_decrease = decrease;
        self
    }

    /// Set the target ratio of feasible solutions.
    pub fn with_target_feasible(mut self, ratio: f64) -> Self {
        self.target_feasible = ratio;
        self
    }

    /// Set the dead band around the target ratio.
    pub fn with_feasibility_tolerance(mut self, tolerance: f64) -> Self {
        self.feasibility_tolerance = tolerance;
        self
    }

    /// Set the floor and ceiling of the coefficients.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_penalty = min;
        self.max_penalty = max;
        self
    }

    /// Set the repair booster.
    pub fn with_repair_booster(mut self, booster: f64) -> Self {
        self.repair_booster = booster;
        self
    }

    /// Set how many feasibility registrations trigger an update.
    pub fn with_num_registrations_between_updates(mut self, count: usize) -> Self {
        self.num_registrations_between_updates = count;
        self
    }

    /// Check that the parameters describe a usable adaptation scheme.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Err(Error::InvalidPenaltyParams(reason.to_string()));

        if !(self.min_penalty > 0.0) || self.min_penalty > self.max_penalty {
            return invalid("bounds must satisfy 0 < min_penalty <= max_penalty");
        }
        if self.init_capacity_penalty < self.min_penalty
            || self.init_capacity_penalty > self.max_penalty
            || self.init_time_warp_penalty < self.min_penalty
            || self.init_time_warp_penalty > self.max_penalty
        {
            return invalid("initial penalties must lie within the bounds");
        }
        if !(self.penalty_increase > 1.0) {
            return invalid("penalty_increase must be greater than 1");
        }
        if !(self.penalty_decrease > 0.0 && self.penalty_decrease < 1.0) {
            return invalid("penalty_decrease must lie in (0, 1)");
        }
        if !(0.0..=1.0).contains(&self.target_feasible) {
            return invalid("target_feasible must lie in [0, 1]");
        }
        if !(self.feasibility_tolerance >= 0.0) {
            return invalid("feasibility_tolerance must not be negative");
        }
        if !(self.repair_booster >= 1.0) {
            return invalid("repair_booster must be at least 1");
        }
        if self.num_registrations_between_updates == 0 {
            return invalid("num_registrations_between_updates must be positive");
        }

        Ok(())
    }
}
