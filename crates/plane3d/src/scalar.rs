//! Numeric types a [`Plane3D`](crate::Plane3D) can be built on.

use std::ops::Neg;

use nalgebra::{ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign, Scalar};
use num_traits::{AsPrimitive, One, Zero};

use crate::tolerance::{ROUNDING_ERROR_F32, ROUNDING_ERROR_F64, ROUNDING_ERROR_S32};

/// Scalar capability required by the plane operations.
///
/// Values widen to `f64` through [`AsPrimitive`]. Operations that narrow an
/// `f64` result back to the scalar additionally require `f64: AsPrimitive<T>`,
/// which truncates toward zero and saturates for integers. An integer plane
/// therefore only gives exact answers when every intermediate value is integral.
pub trait PlaneScalar:
    Scalar
    + Copy
    + Zero
    + One
    + PartialOrd
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + Neg<Output = Self>
    + AsPrimitive<f64>
{
    /// Tolerance used when comparing plane offsets.
    const ROUNDING_ERROR: Self;
}

impl PlaneScalar for f32 {
    const ROUNDING_ERROR: Self = ROUNDING_ERROR_F32;
}

impl PlaneScalar for f64 {
    const ROUNDING_ERROR: Self = ROUNDING_ERROR_F64;
}

impl PlaneScalar for i32 {
    const ROUNDING_ERROR: Self = ROUNDING_ERROR_S32;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T>(value: T) -> T
    where
        T: PlaneScalar,
        f64: AsPrimitive<T>,
    {
        let wide: f64 = value.as_();
        AsPrimitive::<T>::as_(wide * 0.5)
    }

    #[test]
    fn rounding_error_per_scalar() {
        assert_eq!(f32::ROUNDING_ERROR, ROUNDING_ERROR_F32);
        assert_eq!(f64::ROUNDING_ERROR, ROUNDING_ERROR_F64);
        assert_eq!(i32::ROUNDING_ERROR, 0);
    }

    #[test]
    fn integer_narrowing_truncates_toward_zero() {
        assert_eq!(round_trip(5i32), 2);
        assert_eq!(round_trip(-5i32), -2);
    }

    #[test]
    fn float_narrowing_is_exact_for_halves() {
        assert_eq!(round_trip(0.5f32), 0.25);
        assert_eq!(round_trip(3.0f64), 1.5);
    }
}
