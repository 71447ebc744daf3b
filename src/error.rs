//! Error type for instance, configuration and individual construction.

use std::fmt;

/// Errors raised when a caller hands the core malformed input.
///
/// Constraint violations (excess load, time warp) are never errors: they are
/// priced into an individual's cost instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// More route slots were supplied than there are vehicles.
    TooManyRoutes { routes: usize, vehicles: usize },
    /// A route visits the depot or an index beyond the last client.
    ClientOutOfRange { client: usize, num_clients: usize },
    /// A client is visited more than once across all routes.
    DuplicateClient { client: usize },
    /// A client is not visited by any route.
    MissingClient { client: usize },
    /// An explicit distance matrix does not match the number of locations.
    DistanceMatrixShape { expected: usize, found: usize },
    /// Penalty parameters that cannot drive a sensible adaptation.
    InvalidPenaltyParams(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooManyRoutes { routes, vehicles } => write!(
                f,
                "Number of routes ({}) must not exceed number of vehicles ({})",
                routes, vehicles
            ),
            Error::ClientOutOfRange {
                client,
                num_clients,
            } => write!(
                f,
                "Client index {} is outside the valid range 1..={}",
                client, num_clients
            ),
            Error::DuplicateClient { client } => {
                write!(f, "Client {} is visited more than once", client)
            }
            Error::MissingClient { client } => write!(f, "Client {} is not visited", client),
            Error::DistanceMatrixShape { expected, found } => write!(
                f,
                "Distance matrix must be {0}x{0}, found a row or column of size {1}",
                expected, found
            ),
            Error::InvalidPenaltyParams(reason) => {
                write!(f, "Invalid penalty parameters: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
