//! Hill climbing execution loop.

use super::config::HillClimbConfig;
use crate::error::{SearchError, SearchResult};
use crate::objective::Objective;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult {
    /// The final (and best) solution. Hill climbing never leaves the
    /// current point, so the final point is the best one visited.
    pub best: Vec<f64>,

    /// Score of the best solution.
    pub best_score: f64,

    /// Total number of perturbation attempts.
    pub iterations: usize,

    /// Number of attempts that strictly improved the score.
    pub improving_moves: usize,
}

/// Executes coordinate-wise hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs greedy coordinate ascent from `start`.
    ///
    /// Step `i` perturbs coordinate `(i / 2) % dim` by `+step_size` when
    /// `i` is even and `-step_size` when `i` is odd, so each coordinate
    /// is probed in both directions before moving to the next. A
    /// candidate replaces the current point only on strict improvement.
    ///
    /// # Examples
    ///
    /// ```
    /// use uphill::hill::{HillClimbConfig, HillClimbRunner};
    /// use uphill::objective::sphere;
    ///
    /// let config = HillClimbConfig::default().with_iterations(10_000);
    /// let result = HillClimbRunner::run(&sphere, &[3.0, 4.0], &config).unwrap();
    /// assert!(result.best_score > -25.0);
    /// ```
    pub fn run<O: Objective>(
        objective: &O,
        start: &[f64],
        config: &HillClimbConfig,
    ) -> SearchResult<HillClimbResult> {
        config.validate()?;
        if start.is_empty() {
            return Err(SearchError::EmptyStart);
        }

        let dim = start.len();
        let mut current = start.to_vec();
        let mut current_score = objective.score(&current);
        let mut improving_moves = 0usize;

        for i in 0..config.iterations {
            let coordinate = (i / 2) % dim;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };

            let mut candidate = current.clone();
            candidate[coordinate] += sign * config.step_size;

            let candidate_score = objective.score(&candidate);
            if candidate_score > current_score {
                current = candidate;
                current_score = candidate_score;
                improving_moves += 1;
            }
        }

        Ok(HillClimbResult {
            best: current,
            best_score: current_score,
            iterations: config.iterations,
            improving_moves,
        })
    }
}
