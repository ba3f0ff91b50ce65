//! Temperature schedules for Simulated Annealing.
//!
//! A schedule maps the 1-based iteration index to a temperature. It should
//! be non-increasing in expectation and must be strictly positive and finite
//! at every invoked index — the annealing runner checks each value lazily
//! and aborts with `SearchError::InvalidSchedule` on violation.
//!
//! # References
//!
//! - Geometric: standard textbook approach
//! - Reciprocal (`T0/k`): fast polynomial cooling
//! - Logarithmic (`T0/ln k`): Geman & Geman (1984) convergence schedule

/// Maps the 1-based iteration index to a temperature.
pub trait TemperatureSchedule {
    /// Temperature at iteration `k` (`k >= 1`). Must be strictly positive
    /// and finite for every index the run reaches.
    fn temperature(&self, k: usize) -> f64;
}

impl<F> TemperatureSchedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, k: usize) -> f64 {
        self(k)
    }
}

/// Reciprocal cooling: `T(k) = t0 / k`.
#[derive(Debug, Clone, Copy)]
pub struct Reciprocal {
    /// Temperature at the first iteration.
    pub t0: f64,
}

impl Reciprocal {
    pub fn new(t0: f64) -> Self {
        Self { t0 }
    }
}

impl TemperatureSchedule for Reciprocal {
    fn temperature(&self, k: usize) -> f64 {
        self.t0 / k as f64
    }
}

/// Logarithmic cooling: `T(k) = t0 / ln(k)` for `k >= 2`.
///
/// `ln(1) = 0`, so the raw formula is undefined at the first iteration;
/// this schedule substitutes `floor` there instead of dividing by zero.
/// `floor` must be positive or the runner rejects the first iteration.
#[derive(Debug, Clone, Copy)]
pub struct LogCooling {
    /// Numerator of the cooling formula.
    pub t0: f64,
    /// Temperature substituted at `k = 1`.
    pub floor: f64,
}

impl LogCooling {
    pub fn new(t0: f64, floor: f64) -> Self {
        Self { t0, floor }
    }
}

impl TemperatureSchedule for LogCooling {
    fn temperature(&self, k: usize) -> f64 {
        if k <= 1 {
            self.floor
        } else {
            self.t0 / (k as f64).ln()
        }
    }
}

/// Geometric cooling: `T(k) = t0 * alpha^(k-1)`.
///
/// Most widely used family. Typical `alpha`: 0.95–0.99.
#[derive(Debug, Clone, Copy)]
pub struct Geometric {
    /// Temperature at the first iteration.
    pub t0: f64,
    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,
}

impl Geometric {
    pub fn new(t0: f64, alpha: f64) -> Self {
        Self { t0, alpha }
    }
}

impl TemperatureSchedule for Geometric {
    fn temperature(&self, k: usize) -> f64 {
        self.t0 * self.alpha.powi(k as i32 - 1)
    }
}
