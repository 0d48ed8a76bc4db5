//! Subdivided spheres and space-filling traversals of them.
//!
//! The two constructions share one recursion: a triangle is split in two by
//! bisecting its edge *ab*, and each half is split again, alternating which
//! vertex plays which role. [`subdivide`][solids::subdivide] emits the leaf
//! triangles into a shared-vertex [mesh][re::geom::Mesh], while
//! [`traverse`][solids::traverse] emits one point per leaf triangle in an
//! order that keeps consecutive points close to each other.
//!
//! Both are seeded with the faces of a base [octahedron][solids::Octahedron]
//! or [tetrahedron][solids::Tetrahedron] and the results projected onto the
//! unit sphere.
//!
//! # Crate features
//!
//! * `std` (default): use the exact floating-point functions of `std`.
//! * `libm`, `mm`: use `libm` or `micromath` for floating-point math on
//!   `no_std` targets.
//! * `tracing`: emit spans and events from the mesh and path builders.

#![no_std]

extern crate alloc;
extern crate core;
#[cfg(feature = "std")]
extern crate std;

pub use re;

pub mod frame;
pub mod params;
pub mod solids;

pub use solids::{
    build_octahedron_mesh, build_octahedron_path, build_tetrahedron_path,
};
