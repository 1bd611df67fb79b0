//! Rough and classical Heston characteristic functions against each other.

use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use pricer_core::traits::CharacteristicFunction;
use pricer_models::models::rough_heston::RoughHestonCharacteristicFunction;
use pricer_models::models::{
    HestonCharacteristicFunction, HestonParameters, ModelParameters, TimeGrid,
};

fn heston() -> HestonParameters {
    HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap()
}

fn rough(alpha: f64, steps: usize) -> RoughHestonCharacteristicFunction {
    RoughHestonCharacteristicFunction::new(
        ModelParameters::new(heston(), alpha).unwrap(),
        TimeGrid::new(steps, 1.0).unwrap(),
    )
}

#[test]
fn test_rough_approaches_classical_as_alpha_tends_to_one() {
    let rough = rough(0.999, 200);
    let classical = HestonCharacteristicFunction::new(heston(), 1.0).unwrap();

    for u in [0.0, 0.5, 1.0, 2.0, 3.0, 5.0] {
        let z = Complex64::new(u, -0.5);
        let lhs = rough.evaluate(z).unwrap();
        let rhs = classical.evaluate(z).unwrap();
        assert_abs_diff_eq!(lhs.re, rhs.re, epsilon = 1e-3);
        assert_abs_diff_eq!(lhs.im, rhs.im, epsilon = 1e-3);
    }
}

#[test]
fn test_both_models_are_martingales() {
    let z = Complex64::new(0.0, -1.0);
    let classical = HestonCharacteristicFunction::new(heston(), 1.0).unwrap();
    for phi in [
        rough(0.6, 100).evaluate(z).unwrap(),
        rough(0.9, 50).evaluate(z).unwrap(),
        classical.evaluate(z).unwrap(),
    ] {
        assert_abs_diff_eq!(phi.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(phi.im, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_grid_refinement_converges() {
    let z = Complex64::new(2.0, -0.5);
    let coarse = rough(0.6, 50).evaluate(z).unwrap();
    let medium = rough(0.6, 100).evaluate(z).unwrap();
    let fine = rough(0.6, 200).evaluate(z).unwrap();
    assert!((fine - medium).norm() < (medium - coarse).norm());
}

#[test]
fn test_shared_across_threads() {
    let cf = rough(0.6, 60);
    let z = Complex64::new(1.5, -0.5);
    let expected = cf.evaluate(z).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| cf.evaluate(z).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
