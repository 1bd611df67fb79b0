//! Right-hand side of the fractional Riccati equation.

use num_complex::Complex64;

use crate::models::ModelParameters;

/// `F(a, x) = -½(a² + i·a) - (κ - i·a·ρ·ν)·x + ½ν²·x²`.
///
/// Pure and stateless apart from the three model constants it closes over.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use pricer_models::models::rough_heston::RiccatiKernel;
///
/// let kernel = RiccatiKernel::new(0.3, -0.7, 0.3);
/// // At x = 0 only the -½(a² + i·a) term survives
/// let f = kernel.evaluate(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0));
/// assert_eq!(f, Complex64::new(-0.5, -0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiccatiKernel {
    kappa: f64,
    rho: f64,
    nu: f64,
}

impl RiccatiKernel {
    /// Kernel for mean reversion `kappa`, correlation `rho`, vol-of-vol `nu`.
    pub fn new(kappa: f64, rho: f64, nu: f64) -> Self {
        Self { kappa, rho, nu }
    }

    /// Kernel for the given rough Heston parameters.
    pub fn from_params(params: &ModelParameters) -> Self {
        Self::new(params.kappa(), params.rho(), params.nu())
    }

    /// Evaluates `F(a, x)`.
    #[inline]
    pub fn evaluate(&self, a: Complex64, x: Complex64) -> Complex64 {
        let i = Complex64::i();
        let source = -0.5 * (a * a + i * a);
        let drift = (self.kappa - i * a * (self.rho * self.nu)) * x;
        let quadratic = 0.5 * self.nu * self.nu * x * x;
        source - drift + quadratic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_complex_eq(actual: Complex64, expected: Complex64) {
        assert_relative_eq!(actual.re, expected.re, epsilon = 1e-14);
        assert_relative_eq!(actual.im, expected.im, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_state_source_term() {
        let kernel = RiccatiKernel::new(0.3, -0.7, 0.3);
        // a = u - i/2: -½(a² + i a) = -½(u² + ¼)
        let a = Complex64::new(2.0, -0.5);
        assert_complex_eq(
            kernel.evaluate(a, Complex64::new(0.0, 0.0)),
            Complex64::new(-0.5 * (4.0 + 0.25), 0.0),
        );
    }

    #[test]
    fn test_hand_computed_value() {
        let kernel = RiccatiKernel::new(0.5, 0.2, 0.4);
        let a = Complex64::new(1.0, 0.0);
        let x = Complex64::new(0.0, 1.0);
        // -½(1 + i) - (0.5 - 0.08i)·i + ½·0.16·(-1)
        // = -0.5 - 0.5i - 0.5i - 0.08 - 0.08
        let expected = Complex64::new(-0.66, -1.0);
        assert_complex_eq(kernel.evaluate(a, x), expected);
    }

    #[test]
    fn test_linear_in_kappa() {
        let a = Complex64::new(0.7, -0.5);
        let x = Complex64::new(-0.1, 0.3);
        let f1 = RiccatiKernel::new(1.0, -0.5, 0.3).evaluate(a, x);
        let f2 = RiccatiKernel::new(2.0, -0.5, 0.3).evaluate(a, x);
        assert_complex_eq(f1 - f2, x);
    }
}
