//! Problem definition and data structures for the CVRPTW.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Represents a location (client or depot) in the CVRPTW.
///
/// Index 0 is the depot by convention. The depot carries no demand and its
/// time window spans the whole planning horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub demand: f64,
    pub service_duration: f64,
    /// Earliest start of service.
    pub tw_early: f64,
    /// Latest start of service; infinite when the window is open-ended.
    #[serde(with = "open_ended")]
    pub tw_late: f64,
}

/// JSON has no infinity, so an open-ended closing time is written as `null`.
mod open_ended {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let finite = if value.is_finite() { Some(*value) } else { None };
        finite.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl Client {
    /// Create a new client with an unconstrained time window and no service time.
    pub fn new(id: usize, x: f64, y: f64, demand: f64) -> Self {
        Client {
            id,
            x,
            y,
            demand,
            service_duration: 0.0,
            tw_early: 0.0,
            tw_late: f64::INFINITY,
        }
    }

    /// Create the depot at the given coordinates.
    pub fn depot(x: f64, y: f64) -> Self {
        Client::new(0, x, y, 0.0)
    }

    /// Set the service duration.
    pub fn with_service_duration(mut self, duration: f64) -> Self {
        self.service_duration = duration;
        self
    }

    /// Set the time window `[early, late]` in which service must start.
    pub fn with_time_window(mut self, early: f64, late: f64) -> Self {
        self.tw_early = early;
        self.tw_late = late;
        self
    }

    /// Calculate the Euclidean distance between two locations.
    pub fn distance(&self, other: &Client) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Represents a CVRPTW problem instance.
///
/// An instance is read-only once built and may be shared freely between
/// threads evaluating individuals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    clients: Vec<Client>,
    vehicle_capacity: f64,
    num_vehicles: usize,
    distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a new problem whose distances are Euclidean between coordinates.
    ///
    /// `clients[0]` is the depot.
    pub fn new(
        name: String,
        clients: Vec<Client>,
        vehicle_capacity: f64,
        num_vehicles: usize,
    ) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&clients);

        Problem {
            name,
            clients,
            vehicle_capacity,
            num_vehicles,
            distance_matrix,
        }
    }

    /// Create a new problem from an explicit distance matrix.
    ///
    /// The matrix must be square with one row per location, depot included.
    /// Travel durations equal distances.
    pub fn with_distance_matrix(
        name: String,
        clients: Vec<Client>,
        distance_matrix: Vec<Vec<f64>>,
        vehicle_capacity: f64,
        num_vehicles: usize,
    ) -> Result<Self> {
        let expected = clients.len();
        if distance_matrix.len() != expected {
            return Err(Error::DistanceMatrixShape {
                expected,
                found: distance_matrix.len(),
            });
        }
        if let Some(row) = distance_matrix.iter().find(|row| row.len() != expected) {
            return Err(Error::DistanceMatrixShape {
                expected,
                found: row.len(),
            });
        }

        Ok(Problem {
            name,
            clients,
            vehicle_capacity,
            num_vehicles,
            distance_matrix,
        })
    }

    /// Distance (and travel time) between two location indices.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Data of the location at `idx`; index 0 is the depot.
    #[inline]
    pub fn client(&self, idx: usize) -> &Client {
        &self.clients[idx]
    }

    /// All locations, depot first.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Get the depot.
    pub fn depot(&self) -> &Client {
        &self.clients[0]
    }

    /// Number of clients, excluding the depot.
    pub fn num_clients(&self) -> usize {
        self.clients.len().saturating_sub(1)
    }

    /// Number of locations, including the depot.
    pub fn num_locations(&self) -> usize {
        self.clients.len()
    }

    /// Size of the fleet.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Capacity shared by every vehicle.
    pub fn vehicle_capacity(&self) -> f64 {
        self.vehicle_capacity
    }

    /// Sum of all client demands.
    pub fn total_demand(&self) -> f64 {
        self.clients.iter().map(|client| client.demand).sum()
    }

    /// Generate the full distance matrix for all locations.
    fn compute_distance_matrix(clients: &[Client]) -> Vec<Vec<f64>> {
        let n = clients.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = clients[i].distance(&clients[j]);
                }
            }
        }

        matrix
    }
}
