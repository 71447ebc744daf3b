//! Adaptive penalty coefficients for capacity and time window violations.
//!
//! Coefficients are read by every individual construction and changed only
//! through `&mut self` methods, so a generation's evaluations all price
//! violations from the same snapshot. Each applied change bumps
//! [`PenaltyManager::generation`], letting callers tell whether a stored cost
//! is still comparable.

use crate::config::PenaltyParams;
use crate::error::Result;
use log::debug;

/// Owns the capacity and time warp penalty coefficients.
#[derive(Debug, Clone)]
pub struct PenaltyManager {
    params: PenaltyParams,
    capacity_penalty: f64,
    time_warp_penalty: f64,
    load_feasible: Vec<bool>,
    time_feasible: Vec<bool>,
    generation: u64,
}

impl PenaltyManager {
    /// Create a manager seeded with the initial coefficients of `params`.
    pub fn new(params: PenaltyParams) -> Result<Self> {
        params.validate()?;

        Ok(PenaltyManager {
            capacity_penalty: params.init_capacity_penalty,
            time_warp_penalty: params.init_time_warp_penalty,
            load_feasible: Vec::with_capacity(params.num_registrations_between_updates),
            time_feasible: Vec::with_capacity(params.num_registrations_between_updates),
            generation: 0,
            params,
        })
    }

    pub fn params(&self) -> &PenaltyParams {
        &self.params
    }

    /// Current coefficient per unit of excess load.
    pub fn capacity_penalty(&self) -> f64 {
        self.capacity_penalty
    }

    /// Current coefficient per unit of time warp.
    pub fn time_warp_penalty(&self) -> f64 {
        self.time_warp_penalty
    }

    /// Number of coefficient changes applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Penalty for the given excess load.
    pub fn excess_load_penalty(&self, excess_load: f64) -> f64 {
        self.capacity_penalty * excess_load.max(0.0)
    }

    /// Penalty for the given time warp.
    pub fn time_warp_cost(&self, time_warp: f64) -> f64 {
        self.time_warp_penalty * time_warp.max(0.0)
    }

    /// Distance plus both violation penalties.
    pub fn penalised_cost(&self, distance: f64, excess_load: f64, time_warp: f64) -> f64 {
        distance + self.excess_load_penalty(excess_load) + self.time_warp_cost(time_warp)
    }

    /// A copy whose coefficients are multiplied by the repair booster.
    ///
    /// The booster is not clamped to `max_penalty` and does not affect `self`.
    pub fn booster(&self) -> PenaltyManager {
        let mut boosted = self.clone();
        boosted.capacity_penalty *= self.params.repair_booster;
        boosted.time_warp_penalty *= self.params.repair_booster;
        boosted
    }

    /// Adapt the capacity coefficient to the observed fraction of
    /// load-feasible solutions.
    pub fn update_capacity_penalty(&mut self, feasible_pct: f64) {
        let old = self.capacity_penalty;
        self.capacity_penalty = self.compute_penalty(old, feasible_pct);

        if self.capacity_penalty != old {
            self.generation += 1;
            debug!(
                "capacity penalty {:.3} -> {:.3} (load feasible {:.3})",
                old, self.capacity_penalty, feasible_pct
            );
        }
    }

    /// Adapt the time warp coefficient to the observed fraction of
    /// time-feasible solutions.
    pub fn update_time_warp_penalty(&mut self, feasible_pct: f64) {
        let old = self.time_warp_penalty;
        self.time_warp_penalty = self.compute_penalty(old, feasible_pct);

        if self.time_warp_penalty != old {
            self.generation += 1;
            debug!(
                "time warp penalty {:.3} -> {:.3} (time feasible {:.3})",
                old, self.time_warp_penalty, feasible_pct
            );
        }
    }

    /// Adapt both coefficients at a generation boundary.
    pub fn adapt(&mut self, load_feasible_pct: f64, time_feasible_pct: f64) {
        self.update_capacity_penalty(load_feasible_pct);
        self.update_time_warp_penalty(time_feasible_pct);
    }

    /// Record whether a newly evaluated solution respects capacity.
    ///
    /// Once the window is full the capacity coefficient is updated from its
    /// feasible fraction and the window starts over.
    pub fn register_load_feasible(&mut self, feasible: bool) {
        self.load_feasible.push(feasible);

        if self.load_feasible.len() >= self.params.num_registrations_between_updates {
            let pct = feasible_fraction(&self.load_feasible);
            self.load_feasible.clear();
            self.update_capacity_penalty(pct);
        }
    }

    /// Record whether a newly evaluated solution respects time windows.
    pub fn register_time_feasible(&mut self, feasible: bool) {
        self.time_feasible.push(feasible);

        if self.time_feasible.len() >= self.params.num_registrations_between_updates {
            let pct = feasible_fraction(&self.time_feasible);
            self.time_feasible.clear();
            self.update_time_warp_penalty(pct);
        }
    }

    fn compute_penalty(&self, penalty: f64, feasible_pct: f64) -> f64 {
        let diff = self.params.target_feasible - feasible_pct;

        let updated = if diff > self.params.feasibility_tolerance {
            // Too few feasible solutions: push harder toward feasibility
            penalty * self.params.penalty_increase
        } else if diff < -self.params.feasibility_tolerance {
            penalty * self.params.penalty_decrease
        } else {
            penalty
        };

        updated.clamp(self.params.min_penalty, self.params.max_penalty)
    }
}

fn feasible_fraction(window: &[bool]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }

    window.iter().filter(|&&feasible| feasible).count() as f64 / window.len() as f64
}
