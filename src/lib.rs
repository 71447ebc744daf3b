//! # HGS-CVRPTW
//!
//! Solution representation, constraint evaluation and diversity measures for
//! Hybrid Genetic Search on the Capacitated Vehicle Routing Problem with Time
//! Windows (CVRPTW).
//!
//! Capacity and time window constraints are soft: an [`Individual`] reports
//! its excess load and time warp and prices them with the coefficients held
//! by a [`PenaltyManager`], which the search adapts from feasibility
//! feedback. [`broken_pairs_distance`] measures how different two
//! individuals are so the population can stay diverse.
//!
//! Based on the paper "Hybrid Genetic Search for the CVRP: Open-Source Implementation
//! and SWAP* Neighborhood" by Thibaut Vidal.

pub mod config;
pub mod diversity;
pub mod error;
pub mod export;
pub mod individual;
pub mod penalty;
pub mod problem;
pub mod route;

pub use crate::config::PenaltyParams;
pub use crate::diversity::broken_pairs_distance;
pub use crate::error::{Error, Result};
pub use crate::individual::{Individual, Neighbours};
pub use crate::penalty::PenaltyManager;
pub use crate::problem::{Client, Problem};
pub use crate::route::Route;
