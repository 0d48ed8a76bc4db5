//! The two Platonic solids used to seed sphere subdivision.

use re::geom::{Mesh, Tri};
use re::math::{Point3, SQRT_HALF, pt3};

use super::{Build, Polyhedron};

/// Regular octahedron.
///
/// A Platonic solid with six vertices and eight equilateral triangle faces,
/// four meeting at each vertex. All the vertices are on the unit sphere.
///
/// `Octahedron`'s vertices are at (0, ±1, 0) and (±√½, 0, ±√½), that is,
/// the four "equatorial" vertices are rotated 45° about the y axis from
/// the usual (±1, 0, 0), (0, 0, ±1).
#[derive(Copy, Clone, Debug, Default)]
pub struct Octahedron;

/// Regular tetrahedron.
///
/// A Platonic solid with four vertices and four equilateral triangle faces.
/// The centroid is at the origin, and the vertices are at a distance of
/// √(3/2) from it.
///
/// `Tetrahedron`'s vertices are at:
/// * (±1, 0, -√½), and
/// * (0, ±1, √½).
#[derive(Copy, Clone, Debug, Default)]
pub struct Tetrahedron;

impl Octahedron {
    /// Index of the bottom vertex.
    pub const DOWN: usize = 0;
    /// Index of the top vertex.
    pub const UP: usize = 5;
}

impl Polyhedron for Octahedron {
    #[rustfmt::skip]
    const COORDS: &'static [Point3] = &[
        pt3( 0.0,        -1.0,  0.0),        // down
        pt3(-SQRT_HALF,  0.0, -SQRT_HALF),  // back left
        pt3(-SQRT_HALF,  0.0,  SQRT_HALF),  // front left
        pt3( SQRT_HALF,  0.0,  SQRT_HALF),  // front right
        pt3( SQRT_HALF,  0.0, -SQRT_HALF),  // back right
        pt3( 0.0,         1.0,  0.0),        // up
    ];
    #[rustfmt::skip]
    const FACES: &'static [[usize; 3]] = &[
        // Lower half
        [1, 4, 0], [4, 3, 0], [3, 2, 0], [2, 1, 0],
        // Upper half
        [1, 2, 5], [2, 3, 5], [3, 4, 5], [4, 1, 5],
    ];
}

impl Polyhedron for Tetrahedron {
    #[rustfmt::skip]
    const COORDS: &'static [Point3] = &[
        pt3(-1.0,  0.0, -SQRT_HALF), // back left
        pt3( 1.0,  0.0, -SQRT_HALF), // back right
        pt3( 0.0, -1.0,  SQRT_HALF), // front down
        pt3( 0.0,  1.0,  SQRT_HALF), // front up
    ];
    #[rustfmt::skip]
    const FACES: &'static [[usize; 3]] = &[
        [0, 2, 3], [2, 1, 3], [1, 0, 3], [0, 1, 2],
    ];
}

impl Build for Octahedron {
    /// Builds the octahedron as a mesh with six shared vertices.
    fn build(self) -> Mesh {
        flat::<Self>()
    }
}

impl Build for Tetrahedron {
    /// Builds the tetrahedron as a mesh with four shared vertices.
    fn build(self) -> Mesh {
        flat::<Self>()
    }
}

fn flat<P: Polyhedron>() -> Mesh {
    Mesh::new(
        P::FACES.iter().copied().map(Tri),
        P::COORDS.iter().copied(),
    )
}
