//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the supplied temperature schedule cools, allowing the
//! search to escape local optima. The run keeps the full trajectory of
//! accepted solutions and returns its best entry, so the result is never
//! worse than the start even when the walk ends somewhere poor.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::{GaussianStep, NeighborGenerator};
