//! Uniform time grid on [0, T].

use super::error::ModelError;

/// `n + 1` equally spaced points `0 = t0 < t1 < ... < tn = T`.
///
/// The last point is pinned to `T` exactly so that `T - t_n` is zero rather
/// than a rounding residue.
///
/// # Examples
///
/// ```
/// use pricer_models::models::TimeGrid;
///
/// let grid = TimeGrid::new(4, 1.0).unwrap();
/// assert_eq!(grid.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.dt(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    steps: usize,
    maturity: f64,
    dt: f64,
    points: Vec<f64>,
}

impl TimeGrid {
    /// Builds a grid of `steps` intervals over `[0, maturity]`.
    pub fn new(steps: usize, maturity: f64) -> Result<Self, ModelError> {
        if steps < 1 {
            return Err(ModelError::InvalidSteps(steps));
        }
        if !maturity.is_finite() {
            return Err(ModelError::NonFinite("maturity".to_string()));
        }
        if maturity <= 0.0 {
            return Err(ModelError::InvalidMaturity(maturity));
        }

        let dt = maturity / steps as f64;
        let mut points: Vec<f64> = (0..=steps).map(|i| i as f64 * dt).collect();
        points[steps] = maturity;

        Ok(Self {
            steps,
            maturity,
            dt,
            points,
        })
    }

    /// Number of intervals n.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Maturity T.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Step size T / n.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Grid points, length n + 1.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_and_endpoints() {
        let grid = TimeGrid::new(100, 1.0).unwrap();
        assert_eq!(grid.points().len(), 101);
        assert_eq!(grid.points()[0], 0.0);
        assert_eq!(grid.points()[100], 1.0);
    }

    #[test]
    fn test_last_point_exact_for_awkward_maturity() {
        let grid = TimeGrid::new(7, 0.3).unwrap();
        assert_eq!(*grid.points().last().unwrap(), 0.3);
    }

    #[test]
    fn test_points_strictly_increasing() {
        let grid = TimeGrid::new(33, 2.5).unwrap();
        assert!(grid.points().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_single_step() {
        let grid = TimeGrid::new(1, 0.5).unwrap();
        assert_eq!(grid.points(), &[0.0, 0.5]);
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(TimeGrid::new(0, 1.0), Err(ModelError::InvalidSteps(0)));
        assert_eq!(TimeGrid::new(10, 0.0), Err(ModelError::InvalidMaturity(0.0)));
        assert_eq!(TimeGrid::new(10, -1.0), Err(ModelError::InvalidMaturity(-1.0)));
        assert!(matches!(
            TimeGrid::new(10, f64::INFINITY),
            Err(ModelError::NonFinite(_))
        ));
    }
}
