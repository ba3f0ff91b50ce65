//! Coordinate-wise hill climbing.
//!
//! A deterministic greedy local search. Each step perturbs a single
//! coordinate by a fixed step size — cycling through coordinates in
//! round-robin pairs, alternating increase and decrease attempts — and
//! keeps the perturbed vector only if it strictly improves the objective.
//! The score is therefore monotonically non-decreasing and the final
//! vector is never worse than the start.
//!
//! No randomness is involved: two runs with identical arguments return
//! identical results.

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{HillClimbResult, HillClimbRunner};
