//! Plane representation and intersection queries.

use log::{trace, warn};
use nalgebra::{Point3, Vector3};
use num_traits::AsPrimitive;

use crate::tolerance::{equals, ROUNDING_ERROR_F32, ROUNDING_ERROR_F64};
use crate::vector::{dot_f64, is_between_points, length, length_squared_f64, normalize};
use crate::{Line3, PlaneScalar};

/// Where a point lies relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRelation {
    /// Signed distance exceeds `T::ROUNDING_ERROR`
    Front,
    /// Signed distance is below `-T::ROUNDING_ERROR`
    Back,
    /// Signed distance is within `T::ROUNDING_ERROR` of zero, exactly zero
    /// for integer planes
    Planar,
}

/// A plane in 3D space, represented as `normal · point + d = 0`.
///
/// The normal must be unit length for distances and intersections to be
/// correct. Constructors and setters store the normal exactly as given; only
/// [`Plane3D::from_points`] normalizes, because it computes the normal itself.
#[derive(Debug, Clone, Copy)]
pub struct Plane3D<T: PlaneScalar> {
    normal: Vector3<T>,
    d: T,
}

/// Plane with `f32` coordinates.
pub type Plane3Df = Plane3D<f32>;

/// Plane with `i32` coordinates.
pub type Plane3Di = Plane3D<i32>;

impl<T> Default for Plane3D<T>
where
    T: PlaneScalar,
    f64: AsPrimitive<T>,
{
    /// The plane `y = 0` with its normal pointing up.
    fn default() -> Self {
        Self::from_point_and_normal(
            Point3::origin(),
            Vector3::new(T::zero(), T::one(), T::zero()),
        )
    }
}

impl<T> Plane3D<T>
where
    T: PlaneScalar,
    f64: AsPrimitive<T>,
{
    /// Creates a plane from a normal and the offset `d`.
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Self { normal, d }
    }

    /// Creates a plane through `point` with the given normal.
    pub fn from_point_and_normal(point: Point3<T>, normal: Vector3<T>) -> Self {
        let mut plane = Self {
            normal,
            d: T::zero(),
        };
        plane.recalculate_d(point);
        plane
    }

    /// Creates a plane from a member point `(px, py, pz)` and a normal `(nx, ny, nz)`.
    pub fn from_components(px: T, py: T, pz: T, nx: T, ny: T, nz: T) -> Self {
        Self::from_point_and_normal(Point3::new(px, py, pz), Vector3::new(nx, ny, nz))
    }

    /// Creates a plane from three member points.
    ///
    /// The normal follows the right-hand rule: `(p2 - p1) × (p3 - p1)`.
    /// Collinear points give a zero normal and an unusable plane; this is
    /// not checked.
    pub fn from_points(p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) -> Self {
        let mut plane = Self::default();
        plane.set_from_points(p1, p2, p3);
        plane
    }

    #[inline]
    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    /// Offset of the plane: `-(normal · p)` for any member point `p`.
    #[inline]
    pub fn d(&self) -> T {
        self.d
    }

    pub fn set_from_point_and_normal(&mut self, point: Point3<T>, normal: Vector3<T>) {
        self.normal = normal;
        self.recalculate_d(point);
    }

    pub fn set_from_normal_and_d(&mut self, normal: Vector3<T>, d: T) {
        self.normal = normal;
        self.d = d;
    }

    pub fn set_from_points(&mut self, p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) {
        self.normal = normalize(&(p2 - p1).cross(&(p3 - p1)));
        self.recalculate_d(p1);
    }

    /// Recomputes `d` so that `point` lies on the plane, keeping the normal.
    #[inline]
    pub fn recalculate_d(&mut self, point: Point3<T>) {
        self.d = -point.coords.dot(&self.normal);
    }

    /// Returns the point of the plane closest to the origin.
    #[inline]
    pub fn member_point(&self) -> Point3<T> {
        Point3::from(self.normal * -self.d)
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive on the side the normal points to. Only a true distance if the
    /// normal is unit length.
    #[inline]
    pub fn distance_to(&self, point: Point3<T>) -> T {
        point.coords.dot(&self.normal) + self.d
    }

    /// Classifies which side of the plane a point lies on.
    pub fn classify_point_relation(&self, point: Point3<T>) -> PointRelation {
        let distance = self.distance_to(point);
        if distance > T::ROUNDING_ERROR {
            PointRelation::Front
        } else if distance < -T::ROUNDING_ERROR {
            PointRelation::Back
        } else {
            PointRelation::Planar
        }
    }

    /// Returns `true` if a surface on this plane faces a viewer looking along
    /// `look_direction`.
    ///
    /// `look_direction` must be a direction. Passing a camera position gives
    /// meaningless results. The normal must be unit length.
    #[inline]
    pub fn is_front_facing(&self, look_direction: Vector3<T>) -> bool {
        self.normal.dot(&look_direction) <= T::zero()
    }

    /// Returns a plane with the same points and the opposite front side.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// Intersects the line `line_point + t * line_vector` with the plane.
    ///
    /// Returns `None` only when `normal · line_vector` is exactly zero. Nearly
    /// parallel lines are not rejected and can produce points far away.
    pub fn intersection_with_line(
        &self,
        line_point: Point3<T>,
        line_vector: Vector3<T>,
    ) -> Option<Point3<T>> {
        if self.normal.dot(&line_vector) == T::zero() {
            return None;
        }
        Some(self.known_intersection_with_line(line_point, line_vector))
    }

    /// Intersects a line with the plane without checking for parallelism.
    ///
    /// # Panics
    /// Integer planes panic on division by zero if the line is parallel to
    /// the plane. Float planes return non-finite coordinates instead.
    pub fn known_intersection_with_line(
        &self,
        line_point: Point3<T>,
        line_vector: Vector3<T>,
    ) -> Point3<T> {
        let t2 = self.normal.dot(&line_vector);
        let t = -(self.normal.dot(&line_point.coords) + self.d) / t2;
        line_point + line_vector * t
    }

    /// Intersects the segment from `start` to `end` (inclusive) with the plane.
    pub fn intersection_with_limited_line(
        &self,
        start: Point3<T>,
        end: Point3<T>,
    ) -> Option<Point3<T>> {
        self.intersection_with_line(start, end - start)
            .filter(|point| is_between_points(point, &start, &end))
    }

    /// Returns `true` unless the planes are parallel or coincident.
    pub fn exists_intersection(&self, other: &Self) -> bool {
        length(&other.normal.cross(&self.normal)) > f64::from(ROUNDING_ERROR_F32)
    }

    /// Intersects this plane with `other`.
    ///
    /// The line's direction is `self.normal × other.normal`. The linear solve
    /// runs in `f64` whatever `T` is. Returns `None` for parallel planes.
    pub fn intersection_with_plane(&self, other: &Self) -> Option<Line3<T>> {
        let fn00 = length_squared_f64(&self.normal);
        let fn01 = dot_f64(&self.normal, &other.normal);
        let fn11 = length_squared_f64(&other.normal);
        let det = fn00 * fn11 - fn01 * fn01;

        if det.abs() < ROUNDING_ERROR_F64 {
            trace!("plane intersection rejected, determinant {det} is degenerate");
            return None;
        }

        let (d, other_d): (f64, f64) = (self.d.as_(), other.d.as_());
        let invdet = 1.0 / det;
        let c0 = (fn11 * -d + fn01 * other_d) * invdet;
        let c1 = (fn00 * -other_d + fn01 * d) * invdet;

        let direction = self.normal.cross(&other.normal);
        let (c0, c1): (T, T) = (AsPrimitive::<T>::as_(c0), AsPrimitive::<T>::as_(c1));
        let point = self.normal * c0 + other.normal * c1;
        Some(Line3::new(Point3::from(point), direction))
    }

    /// Returns the point shared by this plane and two others.
    ///
    /// Fails if any two of the planes are parallel.
    pub fn intersection_with_planes(&self, o1: &Self, o2: &Self) -> Option<Point3<T>> {
        let line = self.intersection_with_plane(o1)?;
        o2.intersection_with_line(line.point, line.direction)
    }

    /// Returns `true` if the normal is unit length within single precision
    /// rounding error.
    pub fn is_normalized(&self) -> bool {
        (length_squared_f64(&self.normal) - 1.0).abs() <= f64::from(ROUNDING_ERROR_F32)
    }

    /// Debug-only check of the unit normal precondition.
    ///
    /// Logs a warning and trips a `debug_assert!` if the normal is not unit
    /// length. Compiles to nothing in release builds.
    #[inline]
    pub fn debug_check_normalized(&self) {
        if cfg!(debug_assertions) {
            let normalized = self.is_normalized();
            if !normalized {
                warn!(
                    "plane normal {:?} has length {}, expected unit length",
                    self.normal,
                    length(&self.normal)
                );
            }
            debug_assert!(normalized, "Plane normal must be unit length");
        }
    }
}

/// Planes are equal if their normals match exactly and their offsets match
/// within the scalar's rounding error.
impl<T: PlaneScalar> PartialEq for Plane3D<T> {
    fn eq(&self, other: &Self) -> bool {
        equals(self.d, other.d, T::ROUNDING_ERROR) && self.normal == other.normal
    }
}
