//! # Pricer Models (L2: Business Logic)
//!
//! Stochastic volatility models and analytical collaborators.
//!
//! This crate provides:
//! - Validated Heston and rough Heston parameter records
//! - The rough Heston characteristic function: convolution weights,
//!   Riccati kernel, fractional Adams solver and exponent assembly
//! - The closed-form classical Heston characteristic function
//! - Black-Scholes prices and implied volatility for reporting
//!
//! ## Design Principles
//!
//! - **Build once, evaluate many**: weight matrices and tail factors depend
//!   only on `(n, T, α)` and are computed at construction
//! - **No shared mutable state**: each evaluation owns its solution array,
//!   so characteristic functions are `Send + Sync`
//! - **Typed failures**: invalid parameters and non-finite exponents surface
//!   as errors rather than NaN

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
