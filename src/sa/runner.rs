//! SA execution loop.

use super::config::SaConfig;
use super::types::NeighborGenerator;
use crate::error::{SearchError, SearchResult};
use crate::objective::Objective;
use crate::schedule::TemperatureSchedule;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best solution in the trajectory. On equal scores the earliest
    /// entry wins.
    pub best: Vec<f64>,

    /// Score of the best solution.
    pub best_score: f64,

    /// All accepted solutions in chronological order, starting with the
    /// start vector. Append-only; rejected candidates never appear.
    pub trajectory: Vec<Vec<f64>>,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `start`, maximizing `objective`.
    ///
    /// Each iteration `k` (1-based) proposes a neighbor of the last
    /// accepted solution and applies the Metropolis criterion: strict
    /// improvements are always accepted, worsening (or equal-score)
    /// moves with probability `exp(-|delta| / T(k))`. The temperature is
    /// checked at every iteration and a non-positive or non-finite value
    /// aborts the run with [`SearchError::InvalidSchedule`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uphill::objective::sphere;
    /// use uphill::sa::{GaussianStep, SaConfig, SaRunner};
    /// use uphill::schedule::Reciprocal;
    ///
    /// let config = SaConfig::default().with_iterations(2_000).with_seed(42);
    /// let mut neighbor = GaussianStep::new(0.5);
    /// let result =
    ///     SaRunner::run(&sphere, &[3.0, 4.0], &mut neighbor, &Reciprocal::new(1.0), &config)
    ///         .unwrap();
    /// assert!(result.best_score >= sphere(&[3.0, 4.0]));
    /// ```
    pub fn run<O, N, T>(
        objective: &O,
        start: &[f64],
        neighbor: &mut N,
        schedule: &T,
        config: &SaConfig,
    ) -> SearchResult<SaResult>
    where
        O: Objective,
        N: NeighborGenerator,
        T: TemperatureSchedule,
    {
        config.validate()?;
        if start.is_empty() {
            return Err(SearchError::EmptyStart);
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = start.to_vec();
        let mut current_score = objective.score(&current);
        let mut trajectory = vec![current.clone()];
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for k in 1..=config.iterations {
            let temperature = schedule.temperature(k);
            if temperature <= 0.0 || !temperature.is_finite() {
                return Err(SearchError::InvalidSchedule {
                    iteration: k,
                    temperature,
                });
            }

            let candidate = neighbor.propose(&current, &mut rng);
            let candidate_score = objective.score(&candidate);

            // Metropolis acceptance criterion. Equal scores fall to the
            // probabilistic branch with exp(0) = 1, so they are always
            // accepted too.
            let accept = if candidate_score > current_score {
                improving_moves += 1;
                true
            } else {
                let delta = (candidate_score - current_score).abs();
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate;
                current_score = candidate_score;
                trajectory.push(current.clone());
                accepted_moves += 1;
            }
        }

        // Left-to-right scan replacing the incumbent only on a strictly
        // greater score, so the first occurrence of the maximum wins.
        let mut best_index = 0usize;
        let mut best_score = objective.score(&trajectory[0]);
        for (index, entry) in trajectory.iter().enumerate().skip(1) {
            let score = objective.score(entry);
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }
        let best = trajectory[best_index].clone();

        Ok(SaResult {
            best,
            best_score,
            trajectory,
            iterations: config.iterations,
            accepted_moves,
            improving_moves,
        })
    }
}
