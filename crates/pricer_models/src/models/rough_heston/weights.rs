//! Convolution-quadrature weights of the fractional Adams scheme.
//!
//! With `dt = T / n`, `C_a = dt^α / Γ(α + 2)` and `C_b = dt^α / Γ(α + 1)`:
//!
//! ```text
//! a_{0,k} = C_a · [(k-1)^(α+1) - (k-α-1)·k^α]                      k ≥ 1
//! a_{j,k} = C_a · [(k+1-j)^(α+1) + (k-1-j)^(α+1) - 2(k-j)^(α+1)]   0 < j < k
//! a_{k,k} = C_a                                                    k ≥ 1
//! b_{j,k} = C_b · [(k-j)^α - (k-j-1)^α]                            0 ≤ j < k
//! ```
//!
//! Only the upper triangle is ever read, so both matrices are stored packed
//! column by column: column `k` of A holds `a_{0..=k,k}` and column `k` of B
//! holds `b_{0..k,k}`. The solver walks exactly one column per step.

use statrs::function::gamma::gamma;

use crate::models::TimeGrid;

/// Predictor (B) and corrector (A) weight matrices for one `(n, T, α)`.
///
/// Built once and shared read-only by every characteristic-function
/// evaluation.
///
/// # Examples
///
/// ```
/// use pricer_models::models::rough_heston::FractionalWeights;
/// use pricer_models::models::TimeGrid;
///
/// let grid = TimeGrid::new(10, 1.0).unwrap();
/// let weights = FractionalWeights::new(&grid, 0.6);
/// assert_eq!(weights.corrector_column(3).len(), 4);
/// assert_eq!(weights.predictor_column(3).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FractionalWeights {
    steps: usize,
    alpha: f64,
    corrector_scale: f64,
    predictor_scale: f64,
    corrector: Vec<f64>,
    predictor: Vec<f64>,
}

#[inline]
fn corrector_offset(k: usize) -> usize {
    k * (k + 1) / 2
}

#[inline]
fn predictor_offset(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}

impl FractionalWeights {
    /// Computes both matrices in O(n²).
    ///
    /// α is not validated here; parameter construction guarantees
    /// `0.5 < α < 1`.
    pub fn new(grid: &TimeGrid, alpha: f64) -> Self {
        let n = grid.steps();
        let dt_alpha = grid.dt().powf(alpha);
        let c_a = dt_alpha / gamma(alpha + 2.0);
        let c_b = dt_alpha / gamma(alpha + 1.0);

        // i^α and i^(α+1) for i = 0..=n+1; 0 raised to a positive power is 0
        let pow_alpha: Vec<f64> = (0..=n + 1).map(|i| (i as f64).powf(alpha)).collect();
        let pow_alpha1: Vec<f64> = (0..=n + 1)
            .map(|i| (i as f64).powf(alpha + 1.0))
            .collect();

        let mut corrector = Vec::with_capacity(corrector_offset(n + 1));
        let mut predictor = Vec::with_capacity(predictor_offset(n + 1));

        // Column 0 carries a_{0,0}, which the recursion never reads
        corrector.push(0.0);

        for k in 1..=n {
            let kf = k as f64;
            corrector.push(c_a * (pow_alpha1[k - 1] - (kf - alpha - 1.0) * pow_alpha[k]));
            for j in 1..k {
                let d = k - j;
                corrector.push(
                    c_a * (pow_alpha1[d + 1] + pow_alpha1[d - 1] - 2.0 * pow_alpha1[d]),
                );
            }
            corrector.push(c_a);

            for j in 0..k {
                let d = k - j;
                predictor.push(c_b * (pow_alpha[d] - pow_alpha[d - 1]));
            }
        }

        Self {
            steps: n,
            alpha,
            corrector_scale: c_a,
            predictor_scale: c_b,
            corrector,
            predictor,
        }
    }

    /// Number of grid steps n.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Fractional order α the weights were built for.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `C_a = dt^α / Γ(α + 2)`.
    #[inline]
    pub fn corrector_scale(&self) -> f64 {
        self.corrector_scale
    }

    /// `C_b = dt^α / Γ(α + 1)`.
    #[inline]
    pub fn predictor_scale(&self) -> f64 {
        self.predictor_scale
    }

    /// `[a_{0,k}, ..., a_{k,k}]`.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    #[inline]
    pub fn corrector_column(&self, k: usize) -> &[f64] {
        let start = corrector_offset(k);
        &self.corrector[start..start + k + 1]
    }

    /// `[b_{0,k}, ..., b_{k-1,k}]`.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    #[inline]
    pub fn predictor_column(&self, k: usize) -> &[f64] {
        let start = predictor_offset(k);
        &self.predictor[start..start + k]
    }

    /// Corrector weight `a_{j,k}`; zero below the diagonal.
    pub fn a(&self, j: usize, k: usize) -> f64 {
        if j > k {
            0.0
        } else {
            self.corrector_column(k)[j]
        }
    }

    /// Predictor weight `b_{j,k}`; zero for `j >= k`.
    pub fn b(&self, j: usize, k: usize) -> f64 {
        if j >= k {
            0.0
        } else {
            self.predictor_column(k)[j]
        }
    }
}
