//! Rounding tolerances shared by the plane queries.

/// Rounding error for single precision values.
pub const ROUNDING_ERROR_F32: f32 = 0.000_001;

/// Rounding error for double precision values.
pub const ROUNDING_ERROR_F64: f64 = 0.000_000_01;

/// Rounding error for 32-bit integers. Integer comparisons are exact.
pub const ROUNDING_ERROR_S32: i32 = 0;

/// Returns `true` if `a` and `b` differ by no more than `tolerance`.
///
/// Written without `abs` so it also works for integer scalars.
#[inline]
pub fn equals<T>(a: T, b: T, tolerance: T) -> bool
where
    T: Copy + PartialOrd + std::ops::Add<Output = T> + std::ops::Sub<Output = T>,
{
    a + tolerance >= b && a - tolerance <= b
}
