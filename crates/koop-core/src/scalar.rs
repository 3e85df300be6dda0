//! Element types accepted by observables.

use std::fmt::Debug;

use ndarray::LinalgScalar;

/// Numeric element type of sample and feature arrays.
///
/// Observables are generic over the element type so that `transform`
/// returns an array of the same type it was given. Floating-point
/// types report their own finiteness; integer types are always finite.
pub trait Scalar: LinalgScalar + Debug + Send + Sync {
    /// Whether the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
impl_integer_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
