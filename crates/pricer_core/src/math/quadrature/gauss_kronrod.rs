//! Globally adaptive Gauss–Kronrod (7/15) quadrature.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::QuadratureConfig;
use crate::types::QuadratureError;

/// Kronrod abscissae on [-1, 1] (non-negative half, descending).
/// Odd indices are the 7-point Gauss abscissae; the last entry is the centre.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_2,
    0.140_653_259_715_525_9,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_8,
];

/// 7-point Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]` and the centre.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Outcome of an adaptive integration with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    /// Integral estimate (sum of the Kronrod estimates over all subintervals).
    pub value: f64,
    /// Summed `|Kronrod - Gauss|` error estimate.
    pub error_estimate: f64,
    /// Number of bisections performed.
    pub subdivisions: usize,
    /// Number of integrand evaluations.
    pub evaluations: usize,
}

/// One subinterval with its local estimates.
#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.error.total_cmp(&other.error) == Ordering::Equal
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    // Max-heap on the local error estimate
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

/// Adaptive Gauss–Kronrod integrator.
///
/// Each subinterval is integrated with the 15-point Kronrod rule and its
/// embedded 7-point Gauss rule; the difference of the two is the local error
/// estimate. The subinterval with the largest error is bisected until the
/// global error estimate meets [`QuadratureConfig::target`] or the
/// subdivision budget runs out.
///
/// # Example
///
/// ```
/// use pricer_core::math::quadrature::{AdaptiveQuadrature, QuadratureConfig, QuadratureError};
///
/// let quad = AdaptiveQuadrature::new(QuadratureConfig::default());
///
/// // ∫₀¹ x² dx = 1/3
/// let value = quad
///     .integrate(|x: f64| Ok::<_, QuadratureError>(x * x), 0.0, 1.0)
///     .unwrap();
/// assert!((value - 1.0 / 3.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdaptiveQuadrature {
    config: QuadratureConfig,
}

impl AdaptiveQuadrature {
    /// Create an integrator with the given configuration.
    pub fn new(config: QuadratureConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the quadrature configuration.
    pub fn config(&self) -> &QuadratureConfig {
        &self.config
    }

    /// Integrate `f` over the finite interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// * Any error returned by `f` is propagated unchanged.
    /// * `QuadratureError::InvalidInterval` (converted into `E`) if the
    ///   endpoints are not finite or `a > b`.
    /// * `QuadratureError::NonConvergence` (converted into `E`) if the
    ///   subdivision budget is exhausted.
    pub fn integrate<F, E>(&self, f: F, a: f64, b: f64) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
        E: From<QuadratureError>,
    {
        self.integrate_detailed(f, a, b).map(|r| r.value)
    }

    /// Integrate `f` over `[a, ∞)`.
    ///
    /// Uses the substitution `x = a + t / (1 - t)`, `dx = dt / (1 - t)²`,
    /// and integrates the transformed integrand over `t ∈ [0, 1]`. Kronrod
    /// nodes are interior points, so `t = 1` is never evaluated.
    pub fn integrate_semi_infinite<F, E>(&self, mut f: F, a: f64) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
        E: From<QuadratureError>,
    {
        if !a.is_finite() {
            return Err(QuadratureError::InvalidInterval { a, b: f64::INFINITY }.into());
        }
        let transformed = |t: f64| {
            let one_minus_t = 1.0 - t;
            let x = a + t / one_minus_t;
            Ok(f(x)? / (one_minus_t * one_minus_t))
        };
        self.integrate_detailed(transformed, 0.0, 1.0)
            .map(|r| r.value)
    }

    /// Integrate `f` over `[a, b]` and report diagnostics.
    pub fn integrate_detailed<F, E>(
        &self,
        mut f: F,
        a: f64,
        b: f64,
    ) -> Result<QuadratureResult, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
        E: From<QuadratureError>,
    {
        if !a.is_finite() || !b.is_finite() || a > b {
            return Err(QuadratureError::InvalidInterval { a, b }.into());
        }
        if a == b {
            return Ok(QuadratureResult {
                value: 0.0,
                error_estimate: 0.0,
                subdivisions: 0,
                evaluations: 0,
            });
        }

        let mut evaluations = 0;
        let first = kronrod_segment(&mut f, a, b)?;
        evaluations += 15;

        let mut value = first.value;
        let mut error = first.error;
        let mut heap = BinaryHeap::new();
        heap.push(first);
        let mut subdivisions = 0;

        while error > self.config.target(value) {
            if subdivisions >= self.config.max_subdivisions {
                return Err(QuadratureError::NonConvergence {
                    estimated_error: error,
                    tolerance: self.config.target(value),
                    subdivisions,
                }
                .into());
            }

            let worst = match heap.pop() {
                Some(segment) => segment,
                None => break,
            };
            let mid = 0.5 * (worst.a + worst.b);
            if mid <= worst.a || mid >= worst.b {
                // Interval can no longer be split in floating point
                return Err(QuadratureError::NonConvergence {
                    estimated_error: error,
                    tolerance: self.config.target(value),
                    subdivisions,
                }
                .into());
            }

            let left = kronrod_segment(&mut f, worst.a, mid)?;
            let right = kronrod_segment(&mut f, mid, worst.b)?;
            evaluations += 30;
            subdivisions += 1;

            heap.push(left);
            heap.push(right);

            // Re-sum rather than update incrementally to avoid drift
            value = heap.iter().map(|s| s.value).sum();
            error = heap.iter().map(|s| s.error).sum();
        }

        Ok(QuadratureResult {
            value,
            error_estimate: error,
            subdivisions,
            evaluations,
        })
    }
}

/// Apply the 7/15 Gauss–Kronrod pair on `[a, b]`.
fn kronrod_segment<F, E>(f: &mut F, a: f64, b: f64) -> Result<Segment, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let centre = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let f_centre = f(centre)?;
    let mut kronrod = WGK[7] * f_centre;
    let mut gauss = WG[3] * f_centre;

    for (j, (&x, &w)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half * x;
        let pair = f(centre - dx)? + f(centre + dx)?;
        kronrod += w * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    kronrod *= half;
    gauss *= half;

    Ok(Segment {
        a,
        b,
        value: kronrod,
        error: (kronrod - gauss).abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ok(x: f64) -> Result<f64, QuadratureError> {
        Ok(x)
    }

    // ========================================
    // Finite Interval Tests
    // ========================================

    #[test]
    fn test_polynomial_exact() {
        let quad = AdaptiveQuadrature::default();

        // 15-point Kronrod is exact for degree 22 polynomials
        let value = quad
            .integrate(|x| ok(3.0 * x.powi(5) - x * x + 1.0), -1.0, 2.0)
            .unwrap();
        let exact = 0.5 * (64.0 - 1.0) - (8.0 + 1.0) / 3.0 + 3.0;
        assert_abs_diff_eq!(value, exact, epsilon = 1e-12);
    }

    #[test]
    fn test_sin_over_half_period() {
        let quad = AdaptiveQuadrature::default();

        let value = quad
            .integrate(|x| ok(x.sin()), 0.0, std::f64::consts::PI)
            .unwrap();
        assert_abs_diff_eq!(value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_oscillatory_integrand_subdivides() {
        let quad = AdaptiveQuadrature::default();

        // ∫₀^10 cos(20x) dx = sin(200) / 20
        let result = quad
            .integrate_detailed(|x| ok((20.0 * x).cos()), 0.0, 10.0)
            .unwrap();
        assert_abs_diff_eq!(result.value, (200.0_f64).sin() / 20.0, epsilon = 1e-10);
        assert!(result.subdivisions > 0);
        assert_eq!(result.evaluations, 15 + 30 * result.subdivisions);
    }

    #[test]
    fn test_empty_interval_is_zero() {
        let quad = AdaptiveQuadrature::default();

        let value = quad.integrate(|x| ok(x.exp()), 1.5, 1.5).unwrap();
        assert_eq!(value, 0.0);
    }

    // ========================================
    // Semi-infinite Interval Tests
    // ========================================

    #[test]
    fn test_exponential_decay() {
        let quad = AdaptiveQuadrature::default();

        let value = quad.integrate_semi_infinite(|x| ok((-x).exp()), 0.0).unwrap();
        assert_abs_diff_eq!(value, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lorentzian_tail() {
        let quad = AdaptiveQuadrature::default();

        // ∫₀^∞ 1 / (x² + 1/4) dx = π
        let value = quad
            .integrate_semi_infinite(|x| ok(1.0 / (x * x + 0.25)), 0.0)
            .unwrap();
        assert_abs_diff_eq!(value, std::f64::consts::PI, epsilon = 1e-9);
    }

    #[test]
    fn test_gaussian_from_shifted_origin() {
        let quad = AdaptiveQuadrature::default();

        // ∫₁^∞ e^{-(x-1)²} dx = √π / 2
        let value = quad
            .integrate_semi_infinite(|x| ok((-(x - 1.0) * (x - 1.0)).exp()), 1.0)
            .unwrap();
        assert_abs_diff_eq!(value, std::f64::consts::PI.sqrt() / 2.0, epsilon = 1e-10);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_reversed_interval_rejected() {
        let quad = AdaptiveQuadrature::default();

        let result = quad.integrate(ok, 2.0, 1.0);
        assert!(matches!(
            result,
            Err(QuadratureError::InvalidInterval { a, b }) if a == 2.0 && b == 1.0
        ));
    }

    #[test]
    fn test_non_finite_endpoint_rejected() {
        let quad = AdaptiveQuadrature::default();

        assert!(quad.integrate(ok, 0.0, f64::INFINITY).is_err());
        assert!(quad.integrate_semi_infinite(ok, f64::NAN).is_err());
    }

    #[test]
    fn test_budget_exhaustion_reports_non_convergence() {
        let quad = AdaptiveQuadrature::new(QuadratureConfig::new(1e-14, 1e-14, 2));

        // Highly oscillatory: two bisections cannot resolve it
        let result = quad.integrate(|x| ok((200.0 * x).sin() * x), 0.0, 10.0);
        match result {
            Err(QuadratureError::NonConvergence { subdivisions, .. }) => {
                assert_eq!(subdivisions, 2)
            }
            other => panic!("Expected NonConvergence, got {:?}", other),
        }
    }

    #[derive(Debug, PartialEq)]
    enum IntegrandError {
        Overflow(f64),
        Quadrature(QuadratureError),
    }

    impl From<QuadratureError> for IntegrandError {
        fn from(err: QuadratureError) -> Self {
            IntegrandError::Quadrature(err)
        }
    }

    #[test]
    fn test_integrand_error_propagates_unchanged() {
        let quad = AdaptiveQuadrature::default();

        let result = quad.integrate(
            |x| {
                if x > 0.9 {
                    Err(IntegrandError::Overflow(x))
                } else {
                    Ok(x)
                }
            },
            0.0,
            1.0,
        );
        assert!(matches!(result, Err(IntegrandError::Overflow(x)) if x > 0.9));
    }

    // ========================================
    // Properties
    // ========================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_exponential_on_finite_interval(
                a in -2.0_f64..0.0,
                b in 0.1_f64..3.0,
                c in 0.1_f64..2.0,
            ) {
                let value = AdaptiveQuadrature::default()
                    .integrate(|x| ok((c * x).exp()), a, b)
                    .unwrap();
                let exact = ((c * b).exp() - (c * a).exp()) / c;
                prop_assert!((value - exact).abs() <= 1e-9 * exact.abs().max(1.0));
            }

            #[test]
            fn prop_exponential_decay_to_infinity(
                a in 0.0_f64..3.0,
                lambda in 0.5_f64..5.0,
            ) {
                let value = AdaptiveQuadrature::default()
                    .integrate_semi_infinite(|x| ok((-lambda * (x - a)).exp()), a)
                    .unwrap();
                prop_assert!((value - 1.0 / lambda).abs() < 1e-8);
            }
        }
    }
}
