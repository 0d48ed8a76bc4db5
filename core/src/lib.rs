//! Core functionality of the `spherefill` project.
//!
//! Includes a small, strongly typed math library with vectors and points,
//! approximate equality comparisons, and basic geometry primitives such as
//! triangles, polylines, and index-addressed triangle meshes.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes the floating-point functions of `std` available. If this feature
//!   is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! All features are disabled by default. Without any of them, square roots
//! are computed with a fast approximation accurate to about three decimals.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod math;

pub mod prelude {
    pub use crate::math::{
        ApproxEq, Point3, Vec3, Vector,
        space::{Affine, Linear},
        pt3, vec3,
    };

    pub use crate::geom::{Edge, Mesh, Polyline, Tri, tri};
}
