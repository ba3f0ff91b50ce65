//! Objective capability and built-in benchmark functions.
//!
//! # Maximization
//!
//! Both runners maximize the objective score. For minimization, negate
//! the score (see [`sphere`], which negates a sum of squares so the
//! minimum becomes the maximum).

/// Scores candidate solutions. Higher is better.
///
/// Implementations must be pure with respect to the runner's own state:
/// scoring the same vector twice during one run must return the same value.
pub trait Objective {
    /// Scores a candidate solution.
    fn score(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// Negated sum of squares: `-Σ x_i²`. Maximum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    -x.iter().map(|v| v * v).sum::<f64>()
}

/// Schaffer-style ripple bowl over the first two coordinates:
///
/// `0.5 + (cos²(sin|x² − y²|) − 0.5) / (1 + 0.001(x² + y²))²`
///
/// Maximized as written; the value at the origin is exactly `1.0`.
///
/// # Panics
///
/// Panics if `p` has fewer than two coordinates.
pub fn schaffer4(p: &[f64]) -> f64 {
    let x = p[0];
    let y = p[1];
    let l = (x * x - y * y).abs().sin().cos();
    let l = l * l - 0.5;
    let m = 1.0 + 0.001 * (x * x + y * y);
    0.5 + l / (m * m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_at_origin() {
        assert!(sphere(&[0.0, 0.0]).abs() < 1e-15);
    }

    #[test]
    fn test_sphere_known_value() {
        // 3-4-5 triangle: -(9 + 16) = -25
        assert!((sphere(&[3.0, 4.0]) - (-25.0)).abs() < 1e-12);
    }

    #[test]
    fn test_schaffer4_golden_at_origin() {
        // cos(sin 0) = 1, l = 1 - 0.5 = 0.5, m = 1 → 0.5 + 0.5 = 1.0
        assert!((schaffer4(&[0.0, 0.0]) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_schaffer4_symmetric_in_sign() {
        let a = schaffer4(&[1.3, -0.7]);
        let b = schaffer4(&[-1.3, 0.7]);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_closure_satisfies_objective() {
        fn takes_objective<O: Objective>(o: &O) -> f64 {
            o.score(&[2.0])
        }
        let doubled = |x: &[f64]| 2.0 * x[0];
        assert!((takes_objective(&doubled) - 4.0).abs() < 1e-15);
    }
}
