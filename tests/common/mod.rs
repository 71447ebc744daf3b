//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use hgs_cvrptw::penalty::PenaltyManager;
use hgs_cvrptw::problem::{Client, Problem};
use hgs_cvrptw::PenaltyParams;

/// Install a test logger so `RUST_LOG=trace` shows evaluation output.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A depot and four clients with tight time windows, three vehicles of
/// capacity 10 and an explicit, asymmetric distance matrix.
pub fn ok_small() -> Problem {
    let clients = vec![
        Client::depot(2334.0, 726.0).with_time_window(0.0, 45000.0),
        Client::new(1, 226.0, 1297.0, 5.0)
            .with_service_duration(360.0)
            .with_time_window(15600.0, 22500.0),
        Client::new(2, 590.0, 530.0, 5.0)
            .with_service_duration(360.0)
            .with_time_window(12000.0, 19500.0),
        Client::new(3, 435.0, 718.0, 3.0)
            .with_service_duration(420.0)
            .with_time_window(8400.0, 15300.0),
        Client::new(4, 1191.0, 639.0, 5.0)
            .with_service_duration(360.0)
            .with_time_window(12000.0, 19500.0),
    ];

    let distances = vec![
        vec![0.0, 1544.0, 1944.0, 1931.0, 1476.0],
        vec![1726.0, 0.0, 1992.0, 1427.0, 1593.0],
        vec![1965.0, 1975.0, 0.0, 621.0, 1090.0],
        vec![2063.0, 1433.0, 647.0, 0.0, 818.0],
        vec![1475.0, 1594.0, 1090.0, 828.0, 0.0],
    ];

    Problem::with_distance_matrix("OkSmall".to_string(), clients, distances, 10.0, 3)
        .expect("OkSmall matrix is square")
}

/// A grid of unconstrained clients with Euclidean distances.
pub fn grid_problem(num_clients: usize, num_vehicles: usize) -> Problem {
    let mut clients = vec![Client::depot(0.0, 0.0)];

    for id in 1..=num_clients {
        let x = (id % 5) as f64 * 10.0;
        let y = (id / 5) as f64 * 10.0;
        clients.push(Client::new(id, x, y, 1.0));
    }

    Problem::new("Grid".to_string(), clients, 5.0, num_vehicles)
}

pub fn default_penalties() -> PenaltyManager {
    PenaltyManager::new(PenaltyParams::default()).expect("default parameters are valid")
}
