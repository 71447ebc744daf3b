//! Individual representation: one evaluated candidate solution.

use crate::error::{Error, Result};
use crate::penalty::PenaltyManager;
use crate::problem::Problem;
use crate::route::Route;
use itertools::Itertools;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Predecessor and successor of every location, indexed by location.
///
/// The depot entry is `None`. A client's pair uses 0 for the depot when it is
/// the first or last visit of its route; since every client index is at
/// least 1, 0 inside a pair always means the depot.
pub type Neighbours = Vec<Option<(usize, usize)>>;

/// An immutable, fully evaluated partition of clients into vehicle routes.
///
/// Construction validates the partition, evaluates every route and freezes
/// the penalised cost under the coefficients current at that moment. Any
/// change to the routes means building a new individual.
#[derive(Debug, Clone, Serialize)]
pub struct Individual {
    /// One slot per route passed in, non-empty routes first
    routes: Vec<Route>,
    neighbours: Neighbours,
    num_routes: usize,
    distance: f64,
    excess_load: f64,
    time_warp: f64,
    /// Penalised cost at construction time
    cost: f64,
    /// Generation of the penalty coefficients used for `cost`
    penalty_generation: u64,
}

impl Individual {
    /// Build an individual from an explicit route partition.
    ///
    /// Fails if there are more route slots than vehicles, or if the routes do
    /// not visit every client exactly once. Empty routes are allowed and are
    /// moved behind the non-empty ones; the number of slots is kept.
    pub fn new(
        problem: &Problem,
        penalties: &PenaltyManager,
        routes: Vec<Vec<usize>>,
    ) -> Result<Self> {
        validate_partition(problem, &routes)?;

        // Stable partition: relative order among non-empty routes is kept.
        let (mut ordered, empty): (Vec<_>, Vec<_>) =
            routes.into_iter().partition(|route| !route.is_empty());
        let num_routes = ordered.len();
        ordered.extend(empty);

        let routes: Vec<Route> = ordered
            .into_iter()
            .map(|clients| Route::new(problem, clients))
            .collect();

        let neighbours = make_neighbours(problem, &routes);

        let distance: f64 = routes.iter().map(Route::distance).sum();
        let excess_load: f64 = routes.iter().map(Route::excess_load).sum();
        let time_warp: f64 = routes.iter().map(Route::time_warp).sum();
        let cost = penalties.penalised_cost(distance, excess_load, time_warp);

        trace!(
            "evaluated individual: {} routes, distance {:.2}, excess load {:.2}, time warp {:.2}, cost {:.2}",
            num_routes,
            distance,
            excess_load,
            time_warp,
            cost
        );

        Ok(Individual {
            routes,
            neighbours,
            num_routes,
            distance,
            excess_load,
            time_warp,
            cost,
            penalty_generation: penalties.generation(),
        })
    }

    /// Build an individual by spreading shuffled clients evenly over the fleet.
    pub fn random<R: Rng + ?Sized>(
        problem: &Problem,
        penalties: &PenaltyManager,
        rng: &mut R,
    ) -> Result<Self> {
        let num_clients = problem.num_clients();
        let num_vehicles = problem.num_vehicles();

        let mut clients: Vec<usize> = (1..=num_clients).collect();
        clients.shuffle(rng);

        if num_vehicles == 0 {
            let routes = if clients.is_empty() {
                Vec::new()
            } else {
                vec![clients]
            };
            return Self::new(problem, penalties, routes);
        }

        // Clients per route, rounded up when they do not divide evenly.
        let per_vehicle = (num_clients / num_vehicles).max(1);
        let adjustment = num_clients > num_vehicles && num_clients % num_vehicles != 0;
        let per_route = per_vehicle + usize::from(adjustment);

        let mut routes: Vec<Vec<usize>> =
            clients.chunks(per_route).map(<[usize]>::to_vec).collect();
        routes.resize_with(num_vehicles, Vec::new);

        trace!(
            "random construction: {} clients over {} vehicles, {} per route",
            num_clients,
            num_vehicles,
            per_route
        );

        Self::new(problem, penalties, routes)
    }

    /// Penalised cost frozen at construction.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Cost of the same routes priced with another set of coefficients.
    pub fn repriced_cost(&self, penalties: &PenaltyManager) -> f64 {
        penalties.penalised_cost(self.distance, self.excess_load, self.time_warp)
    }

    /// Generation of the coefficients `cost()` was computed with.
    pub fn penalty_generation(&self) -> u64 {
        self.penalty_generation
    }

    /// Number of non-empty routes.
    pub fn num_routes(&self) -> usize {
        self.num_routes
    }

    /// All route slots, empty ones last.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Predecessor and successor per location; `None` for the depot.
    pub fn neighbours(&self) -> &[Option<(usize, usize)>] {
        &self.neighbours
    }

    /// Total distance over all routes.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total excess load over all routes.
    pub fn excess_load(&self) -> f64 {
        self.excess_load
    }

    /// Total time warp over all routes.
    pub fn time_warp(&self) -> f64 {
        self.time_warp
    }

    /// Check if the individual has neither excess load nor time warp.
    pub fn is_feasible(&self) -> bool {
        !self.has_excess_capacity() && !self.has_time_warp()
    }

    /// Check if any route exceeds vehicle capacity.
    pub fn has_excess_capacity(&self) -> bool {
        self.excess_load > 0.0
    }

    /// Check if any route incurs time warp.
    pub fn has_time_warp(&self) -> bool {
        self.time_warp > 0.0
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        // Cheap aggregate checks first, then the full visit structure.
        self.distance == other.distance
            && self.excess_load == other.excess_load
            && self.time_warp == other.time_warp
            && self.routes.len() == other.routes.len()
            && self.neighbours == other.neighbours
    }
}

fn validate_partition(problem: &Problem, routes: &[Vec<usize>]) -> Result<()> {
    if routes.len() > problem.num_vehicles() {
        return Err(Error::TooManyRoutes {
            routes: routes.len(),
            vehicles: problem.num_vehicles(),
        });
    }

    let num_clients = problem.num_clients();
    let mut visited = vec![false; num_clients + 1];

    for &client in routes.iter().flatten() {
        if client == 0 || client > num_clients {
            return Err(Error::ClientOutOfRange {
                client,
                num_clients,
            });
        }
        if visited[client] {
            return Err(Error::DuplicateClient { client });
        }
        visited[client] = true;
    }

    match (1..=num_clients).find(|&client| !visited[client]) {
        Some(client) => Err(Error::MissingClient { client }),
        None => Ok(()),
    }
}

fn make_neighbours(problem: &Problem, routes: &[Route]) -> Neighbours {
    let mut neighbours = vec![None; problem.num_locations()];

    for route in routes.iter().filter(|route| !route.is_empty()) {
        let stops = std::iter::once(0)
            .chain(route.clients().iter().copied())
            .chain(std::iter::once(0));

        for (pred, client, succ) in stops.tuple_windows() {
            neighbours[client] = Some((pred, succ));
        }
    }

    neighbours
}
