//! Plane in 3D space with distance and intersection queries.
//!
//! [`Plane3D`] stores a unit normal and an offset `d` so that every member
//! point `p` satisfies `normal · p + d = 0`. It is generic over the scalar
//! type; [`Plane3Df`] and [`Plane3Di`] are the float and integer planes.
//!
//! Queries that can fail return `Option`:
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use plane3d::Plane3Df;
//!
//! let ground = Plane3Df::default();
//! let hit = ground.intersection_with_line(Point3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
//! assert_eq!(hit, Some(Point3::origin()));
//! ```

mod line;
mod plane;
mod scalar;
pub mod tolerance;
pub mod vector;

pub use line::Line3;
pub use plane::{Plane3D, Plane3Df, Plane3Di, PointRelation};
pub use scalar::PlaneScalar;
