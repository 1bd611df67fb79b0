//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use num_complex::Complex64;

/// Test that the characteristic-function trait is accessible via absolute path.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::characteristic::CharacteristicFunction;
    use pricer_core::traits::Float;
    use pricer_core::types::error::PricingError;

    struct Degenerate;

    impl CharacteristicFunction for Degenerate {
        fn evaluate(&self, _u: Complex64) -> Result<Complex64, PricingError> {
            Ok(Complex64::new(1.0, 0.0))
        }
    }

    let phi = Degenerate.evaluate(Complex64::new(2.0, -0.5)).unwrap();
    assert_eq!(phi, Complex64::new(1.0, 0.0));

    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(4.0_f64), 2.0);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::{PricingError, QuadratureError, SolverError};

    let err: PricingError = QuadratureError::NonConvergence {
        estimated_error: 1.0,
        tolerance: 1e-10,
        subdivisions: 3,
    }
    .into();
    assert!(matches!(err, PricingError::QuadratureNonConvergence { .. }));

    let err: PricingError = SolverError::NoBracket { a: 0.0, b: 1.0 }.into();
    assert!(matches!(err, PricingError::Solver(_)));
}

/// Test that math module is accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::quadrature::{AdaptiveQuadrature, QuadratureConfig};
    use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
    use pricer_core::types::PricingError;

    let quad = AdaptiveQuadrature::new(QuadratureConfig::default());
    let area: Result<f64, PricingError> = quad.integrate(|x| Ok(2.0 * x), 0.0, 1.0);
    assert!((area.unwrap() - 1.0).abs() < 1e-14);

    let solver = BisectionSolver::new(SolverConfig::new(1e-12, 100));
    let root = solver.find_root(|x: f64| x - 0.25, 0.0, 1.0).unwrap();
    assert!((root - 0.25).abs() < 1e-11);
}
