//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec] and [points][point] in real Euclidean
//! spaces, as well as utilities such as approximate equality comparisons
//! and a floating-point compatibility layer for `no_std` targets.
//!
//! Vectors and points are distinct types. A point is a *position* and a
//! vector is a *displacement*; two points cannot be added, but a vector can
//! be added to a point, and the difference of two points is a vector. This
//! lets the type system catch mixups that would otherwise only show up as
//! a misplaced vertex.

pub use {
    approx::ApproxEq,
    point::{Point, Point3, pt3},
    space::{Affine, Linear},
    vec::{Vec3, Vector, vec3},
};

pub mod approx;
pub mod float;
pub mod point;
pub mod space;
pub mod vec;

/// The square root of one half, ½√2 ≈ 0.7071.
///
/// The equatorial corners of the base octahedron lie at (±t, 0, ±t) for
/// this value of t, which puts them at unit distance from the origin.
pub const SQRT_HALF: f32 = core::f32::consts::FRAC_1_SQRT_2;
