//! Neighbor generation for Simulated Annealing.

use rand::Rng;
use rand_distr::StandardNormal;

/// Produces a stochastic perturbation of the current solution.
///
/// Called exactly once per annealing iteration. Takes `&mut self` so a
/// generator may carry state across calls, such as a step width that
/// shrinks as the run progresses. The neighborhood must keep the
/// dimension of the input vector.
pub trait NeighborGenerator {
    /// Proposes a perturbed copy of `current`.
    fn propose<R: Rng>(&mut self, current: &[f64], rng: &mut R) -> Vec<f64>;
}

/// Gaussian perturbation of every coordinate: `x_i + Normal(0, sigma)`.
///
/// With a `decay` below 1 the step width shrinks multiplicatively on
/// each call, narrowing the search as the run progresses.
///
/// # Examples
///
/// ```
/// use uphill::sa::GaussianStep;
///
/// let wide = GaussianStep::new(1.0);
/// let narrowing = GaussianStep::new(1.0).with_decay(0.999);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianStep {
    sigma: f64,
    decay: f64,
}

impl GaussianStep {
    /// Creates a fixed-width Gaussian step with standard deviation `sigma`.
    pub fn new(sigma: f64) -> Self {
        Self { sigma, decay: 1.0 }
    }

    /// Multiplies `sigma` by `decay` at the start of every proposal.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Current step width.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl NeighborGenerator for GaussianStep {
    fn propose<R: Rng>(&mut self, current: &[f64], rng: &mut R) -> Vec<f64> {
        self.sigma *= self.decay;
        current
            .iter()
            .map(|&coordinate| {
                let z: f64 = rng.sample(StandardNormal);
                coordinate + self.sigma * z
            })
            .collect()
    }
}
