//! Vector helpers that work for integer as well as float scalars.
//!
//! nalgebra only offers `norm` and `normalize` for real fields, so lengths
//! are taken in `f64` and narrowed back to the scalar type.

use nalgebra::{Point3, Vector3};
use num_traits::AsPrimitive;

use crate::PlaneScalar;

/// Widens every component to `f64`.
#[inline]
pub fn to_f64<T: PlaneScalar>(v: &Vector3<T>) -> Vector3<f64> {
    v.map(|c| c.as_())
}

/// Squared length, computed in `T`.
#[inline]
pub fn length_squared<T: PlaneScalar>(v: &Vector3<T>) -> T {
    v.dot(v)
}

/// Squared length, computed in `f64`.
#[inline]
pub fn length_squared_f64<T: PlaneScalar>(v: &Vector3<T>) -> f64 {
    to_f64(v).norm_squared()
}

/// Dot product, computed in `f64`.
#[inline]
pub fn dot_f64<T: PlaneScalar>(a: &Vector3<T>, b: &Vector3<T>) -> f64 {
    to_f64(a).dot(&to_f64(b))
}

/// Euclidean length, computed in `f64`.
#[inline]
pub fn length<T: PlaneScalar>(v: &Vector3<T>) -> f64 {
    to_f64(v).norm()
}

/// Scales `v` to unit length.
///
/// A zero vector is returned unchanged. Integer components are truncated,
/// so only axis aligned integer vectors stay unit length.
pub fn normalize<T>(v: &Vector3<T>) -> Vector3<T>
where
    T: PlaneScalar,
    f64: AsPrimitive<T>,
{
    let len = length(v);
    if len == 0.0 {
        return *v;
    }
    to_f64(v).map(|c| AsPrimitive::<T>::as_(c / len))
}

/// Returns `true` if `point` lies within the segment `begin..=end`.
///
/// Only meaningful for points on the line through `begin` and `end`: the
/// point must be no farther from either end than the ends are from each other.
/// Distances are taken in `f64`, so integer coordinates cannot overflow.
pub fn is_between_points<T: PlaneScalar>(
    point: &Point3<T>,
    begin: &Point3<T>,
    end: &Point3<T>,
) -> bool {
    let (point, begin, end) = (to_f64(&point.coords), to_f64(&begin.coords), to_f64(&end.coords));
    let segment = (end - begin).norm_squared();
    (point - begin).norm_squared() <= segment && (point - end).norm_squared() <= segment
}
