use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `sqrt`, `abs`, or tolerance comparisons
/// (decompositions, norms, metrics). `from_f64` converts the crate's `f64`
/// tolerance constants into `T` without a fallible cast.
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` constant into `Self`.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn from_f64(v: f64) -> $t {
                    v as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
