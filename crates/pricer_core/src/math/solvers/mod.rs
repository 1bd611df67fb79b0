//! Root-finding solvers for numerical computation.
//!
//! This module provides bracketing root finders for one-dimensional
//! problems such as implied volatility recovery.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Robust bracketing method, one bit of accuracy per iteration
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
//!
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod bisection;
mod config;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
