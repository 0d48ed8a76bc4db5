//! Mesh approximations of the sphere and curves on its surface.

use re::geom::{Mesh, Polyline};
use re::math::Point3;

mod platonic;
mod subdiv;
mod traverse;

pub use platonic::*;
pub use subdiv::*;
pub use traverse::*;

/// Trait for shapes that can be built into a triangle mesh.
pub trait Build {
    /// Builds the mesh.
    fn build(self) -> Mesh;
}

/// A convex polyhedron with triangular faces, used to seed subdivision.
///
/// The faces must be wound counter-clockwise when seen from outside, and the
/// centroid of the vertices must be the origin, so that no point produced by
/// subdividing a face can coincide with the origin.
pub trait Polyhedron {
    /// The vertices of the polyhedron.
    const COORDS: &'static [Point3];
    /// The faces of the polyhedron, as triplets of indices to `COORDS`.
    const FACES: &'static [[usize; 3]];

    /// Returns the vertices of each face, in face order.
    fn face_coords() -> impl Iterator<Item = [Point3; 3]> {
        Self::FACES.iter().map(|f| f.map(|i| Self::COORDS[i]))
    }
}

/// Projects every point in `pts` onto the unit sphere.
///
/// Each point is replaced by the unit vector in its direction. The order
/// and number of points is unchanged.
///
/// None of the points may be at the origin; this is checked by a debug
/// assertion.
///
/// # Examples
/// ```
/// use spherefill_geom::re::{assert_approx_eq, math::{pt3, Point3}};
/// use spherefill_geom::solids::spherize;
///
/// let mut pts: [Point3; 2] = [pt3(0.0, 0.0, 2.0), pt3(0.5, 0.0, 0.5)];
/// spherize(&mut pts);
///
/// assert_approx_eq!(pts[0], pt3(0.0, 0.0, 1.0));
/// assert_approx_eq!(pts[1], pt3(0.70710677, 0.0, 0.70710677));
/// ```
pub fn spherize(pts: &mut [Point3]) {
    for p in pts {
        *p = p.to_vec().normalize().to_pt();
    }
}

/// Returns the spherized mesh of an octahedron subdivided to `depth`.
///
/// Equivalent to `Octosphere { depth }.build()`.
///
/// # Panics
/// If `depth` > [`MAX_DEPTH`][crate::params::MAX_DEPTH].
pub fn build_octahedron_mesh(depth: u32) -> Mesh {
    Octosphere { depth }.build()
}

/// Returns the spherized traversal path of an octahedron at `depth`.
///
/// Equivalent to `Octosphere { depth }.curve()`.
///
/// # Panics
/// If `depth` > [`MAX_DEPTH`][crate::params::MAX_DEPTH].
pub fn build_octahedron_path(depth: u32) -> Polyline<Point3> {
    Octosphere { depth }.curve()
}

/// Returns the spherized traversal path of a tetrahedron at `depth`.
///
/// Equivalent to `Tetrasphere { depth }.curve()`.
///
/// # Panics
/// If `depth` > [`MAX_DEPTH`][crate::params::MAX_DEPTH].
pub fn build_tetrahedron_path(depth: u32) -> Polyline<Point3> {
    Tetrasphere { depth }.curve()
}

/// Returns the number of leaf triangles, or path points, that `faces`
/// faces produce when recursed to `depth`.
pub(crate) fn leaf_count(faces: usize, depth: u32) -> usize {
    faces << depth
}
