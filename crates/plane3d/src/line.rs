//! Infinite line in 3D space.

use nalgebra::{Point3, Vector3};

use crate::PlaneScalar;

/// A line through `point` running along `direction`.
///
/// The direction is not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3<T: PlaneScalar> {
    pub point: Point3<T>,
    pub direction: Vector3<T>,
}

impl<T: PlaneScalar> Line3<T> {
    pub fn new(point: Point3<T>, direction: Vector3<T>) -> Self {
        Self { point, direction }
    }

    /// Creates the line through `start` and `end`, with direction `end - start`.
    pub fn through(start: Point3<T>, end: Point3<T>) -> Self {
        Self::new(start, end - start)
    }

    /// Returns `point + direction * t`.
    #[inline]
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.point + self.direction * t
    }
}

impl<T: PlaneScalar> From<(Point3<T>, Vector3<T>)> for Line3<T> {
    fn from((point, direction): (Point3<T>, Vector3<T>)) -> Self {
        Self::new(point, direction)
    }
}

impl<T: PlaneScalar> From<Line3<T>> for (Point3<T>, Vector3<T>) {
    fn from(line: Line3<T>) -> Self {
        (line.point, line.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_parameter() {
        let line = Line3::new(Point3::new(1.0f32, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));

        assert_eq!(line.point_at(0.0), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(line.point_at(1.5), Point3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn through_two_points() {
        let line = Line3::through(Point3::new(1i32, 1, 1), Point3::new(3, 1, 1));

        assert_eq!(line.direction, Vector3::new(2, 0, 0));
        assert_eq!(line.point_at(1), Point3::new(3, 1, 1));
    }
}
