//! Fractional Adams predictor-corrector recursion.
//!
//! For k = 1..=n, with `f_j = F(a, ĥ_j)`:
//!
//! ```text
//! h_P  = Σ_{j<k} b_{j,k} · f_j
//! ĥ_k  = Σ_{j<k} a_{j,k} · f_j + a_{k,k} · F(a, h_P)
//! ```
//!
//! Step k reads every earlier value, so the loop is strictly sequential.

use num_complex::Complex64;

use super::riccati::RiccatiKernel;
use super::weights::FractionalWeights;

/// Solves the fractional Riccati equation on the weight grid.
///
/// Borrows the shared weights; every [`solve`](Self::solve) call owns its
/// own solution array, so one solver can serve many threads.
#[derive(Debug, Clone, Copy)]
pub struct FractionalRiccatiSolver<'w> {
    weights: &'w FractionalWeights,
    kernel: RiccatiKernel,
}

impl<'w> FractionalRiccatiSolver<'w> {
    /// Creates a solver over precomputed weights.
    pub fn new(weights: &'w FractionalWeights, kernel: RiccatiKernel) -> Self {
        Self { weights, kernel }
    }

    /// Returns `ĥ`, length n + 1, with `ĥ_0 = 0`.
    pub fn solve(&self, a: Complex64) -> Vec<Complex64> {
        let n = self.weights.steps();
        let zero = Complex64::new(0.0, 0.0);
        let mut h = vec![zero; n + 1];
        // f[j] caches F(a, h[j]) so each kernel value is computed once
        let mut f = vec![zero; n + 1];
        f[0] = self.kernel.evaluate(a, zero);

        for k in 1..=n {
            let predictor = self.weights.predictor_column(k);
            let corrector = self.weights.corrector_column(k);
            let history = &f[..k];

            let h_p: Complex64 = predictor
                .iter()
                .zip(history)
                .map(|(&b, &fj)| b * fj)
                .sum();
            let sum_a: Complex64 = corrector[..k]
                .iter()
                .zip(history)
                .map(|(&w, &fj)| w * fj)
                .sum();

            h[k] = sum_a + corrector[k] * self.kernel.evaluate(a, h_p);
            f[k] = self.kernel.evaluate(a, h[k]);
        }

        h
    }
}
