//! # factrix
//!
//! Dense real-valued matrix library with Householder QR factorization and
//! numerical-accuracy diagnostics.
//!
//! ## Quick start
//!
//! ```
//! use factrix::{metrics, Matrix};
//!
//! let a = Matrix::from_rows(3, 3, &[
//!     12.0_f64, -51.0, 4.0,
//!     6.0, 167.0, -68.0,
//!     -4.0, 24.0, -41.0,
//! ]).unwrap();
//!
//! let f = a.qr();
//! assert!(metrics::residual_norm(&a, &f.q, &f.r).unwrap() < 1e-10);
//! assert!(metrics::orthogonality_error(&f.q).unwrap() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated [`Matrix<T>`] with runtime dimensions and
//!   row-major `Vec<T>` storage. Arithmetic operators, transpose, norms,
//!   identity/random factories, and whitespace-delimited text I/O.
//!
//! - [`linalg`] — Householder QR ([`householder_qr`], [`QrFactors`]), LU
//!   with scaled partial pivoting ([`Lu`], backing [`Matrix::inverse`]),
//!   and upper-triangular inversion by back substitution.
//!
//! - [`metrics`] — Factorization diagnostics: residual `‖A − QR‖∞`,
//!   orthogonality `‖QᵀQ − I‖∞`, consistency `‖AR⁻¹ − Q‖∞`, and
//!   `cond∞(R)`.
//!
//! - [`bench`] — Timing harness behind the `factrix bench` subcommand.
//!
//! - [`traits`] — Element traits: [`Scalar`] for container elements,
//!   [`FloatScalar`] for anything numerical.
//!
//! Everything is single-threaded and synchronous; matrices have full value
//! semantics and the algorithms clone their inputs rather than mutating
//! caller-owned data.

pub mod bench;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod metrics;
pub mod traits;

pub use error::{Error, Result};
pub use linalg::{householder_qr, invert_upper_triangular, Lu, QrFactors};
pub use matrix::{Matrix, Matrixf32, Matrixf64};
pub use traits::{FloatScalar, Scalar};
