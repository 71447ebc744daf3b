//! Route representation and per-route evaluation.

use crate::problem::Problem;
use itertools::Itertools;
use serde::Serialize;
use std::iter;

/// Violations at or below this amount are rounding noise and count as zero.
pub const VIOLATION_TOLERANCE: f64 = 1e-9;

/// A single vehicle's visits together with the measures derived from them.
///
/// The depot is implicit at both ends of `clients`. An empty route evaluates
/// to zero on every measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// The sequence of client indices (excluding the depot)
    clients: Vec<usize>,
    /// Distance including the legs out of and back into the depot
    distance: f64,
    /// Sum of client demands
    load: f64,
    /// Load above vehicle capacity, never negative
    excess_load: f64,
    /// Cumulative amount by which the schedule had to warp back in time
    time_warp: f64,
    service_duration: f64,
    wait_duration: f64,
    /// Clock value on return to the depot
    end_time: f64,
}

impl Route {
    /// Evaluate the given visits against the problem data.
    ///
    /// Clients must be valid indices into `problem`.
    pub fn new(problem: &Problem, clients: Vec<usize>) -> Self {
        let mut route = Route {
            clients,
            distance: 0.0,
            load: 0.0,
            excess_load: 0.0,
            time_warp: 0.0,
            service_duration: 0.0,
            wait_duration: 0.0,
            end_time: 0.0,
        };

        if !route.clients.is_empty() {
            route.evaluate(problem);
        }

        route
    }

    /// Walk the schedule from the depot through every client and back.
    ///
    /// Arriving before a window opens waits until it opens. Starting service
    /// after the window closes adds the lateness to the time warp and resets
    /// the clock to the closing time, so later stops see the clamped clock.
    /// Lateness and excess load within [`VIOLATION_TOLERANCE`] are dropped.
    fn evaluate(&mut self, problem: &Problem) {
        let depot = problem.depot();
        let mut clock = depot.tw_early.max(0.0);

        let stops = iter::once(0)
            .chain(self.clients.iter().copied())
            .chain(iter::once(0));

        for (from, to) in stops.tuple_windows() {
            let leg = problem.distance(from, to);
            self.distance += leg;
            clock += leg;

            let stop = problem.client(to);
            if clock < stop.tw_early {
                self.wait_duration += stop.tw_early - clock;
                clock = stop.tw_early;
            }
            if clock > stop.tw_late {
                let lateness = clock - stop.tw_late;
                if lateness > VIOLATION_TOLERANCE {
                    self.time_warp += lateness;
                }
                clock = stop.tw_late;
            }

            if to != 0 {
                clock += stop.service_duration;
                self.service_duration += stop.service_duration;
                self.load += stop.demand;
            }
        }

        self.end_time = clock;
        let excess = self.load - problem.vehicle_capacity();
        if excess > VIOLATION_TOLERANCE {
            self.excess_load = excess;
        }
    }

    /// Visited clients in order, depot excluded.
    pub fn clients(&self) -> &[usize] {
        &self.clients
    }

    /// Number of clients visited.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Check if the route visits no client.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Total distance including both depot legs.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Sum of client demands on the route.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Load above vehicle capacity.
    pub fn excess_load(&self) -> f64 {
        self.excess_load
    }

    /// Total lateness warped back along the route.
    pub fn time_warp(&self) -> f64 {
        self.time_warp
    }

    /// Sum of service durations at the visited clients.
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    /// Time spent waiting for windows to open.
    pub fn wait_duration(&self) -> f64 {
        self.wait_duration
    }

    /// Clock value on return to the depot.
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Check if the route exceeds vehicle capacity.
    pub fn has_excess_load(&self) -> bool {
        self.excess_load > 0.0
    }

    /// Check if any stop on the route was reached late.
    pub fn has_time_warp(&self) -> bool {
        self.time_warp > 0.0
    }

    /// Check if the route respects capacity and all time windows.
    pub fn is_feasible(&self) -> bool {
        !self.has_excess_load() && !self.has_time_warp()
    }
}
