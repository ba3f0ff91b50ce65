//! Trajectory local-search heuristics over fixed-dimension real vectors.
//!
//! Provides two derivative-free optimizers under a shared maximization
//! convention (higher objective score is better):
//!
//! - **Hill climbing** ([`hill`]): deterministic greedy ascent that probes
//!   one coordinate at a time with a fixed step and keeps only strict
//!   improvements.
//! - **Simulated Annealing** ([`sa`]): stochastic trajectory search that
//!   always accepts improving moves and accepts worsening moves with a
//!   probability controlled by a cooling temperature schedule.
//!
//! # Architecture
//!
//! The algorithms are decoupled from the problem through three capability
//! traits: [`objective::Objective`] (scoring), [`schedule::TemperatureSchedule`]
//! (cooling) and [`sa::NeighborGenerator`] (perturbation). Plain closures
//! satisfy the first two, so test doubles and one-off schedules need no
//! boilerplate. Each run owns its random generator, seeded explicitly for
//! reproducibility; nothing is shared across concurrent runs.

pub mod error;
pub mod hill;
pub mod objective;
pub mod sa;
pub mod schedule;
