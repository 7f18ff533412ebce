pub(crate) mod lu;
pub(crate) mod qr;
pub(crate) mod triangular;

pub use lu::{lu_in_place, lu_solve, Lu};
pub use qr::{householder_qr, QrFactors};
pub use triangular::invert_upper_triangular;

/// Pivot and degenerate-column magnitude floor shared by the
/// decompositions. Values below this are treated as numerically zero.
pub(crate) const ZERO_TOL: f64 = 1e-12;
