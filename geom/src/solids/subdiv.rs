//! Subdivision surfaces.

use re::geom::{Mesh, mesh::Builder};

use crate::params::MAX_DEPTH;

use super::{
    Build, Octahedron, Polyhedron, Tetrahedron, leaf_count, spherize,
};

/// Spherical mesh created by recursively bisecting the faces of an
/// [octahedron][Octahedron].
///
/// At depth *d*, the mesh has 8·2<sup>*d*</sup> faces and
/// 6 + 8·(2<sup>*d*</sup> − 1) vertices, all of them on the unit sphere.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Octosphere {
    pub depth: u32,
}

/// Spherical mesh created by recursively bisecting the faces of a
/// [tetrahedron][Tetrahedron].
///
/// At depth *d*, the mesh has 4·2<sup>*d*</sup> faces.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Tetrasphere {
    pub depth: u32,
}

impl Build for Octosphere {
    /// Builds the subdivided, spherized octahedron.
    ///
    /// # Panics
    /// If `self.depth` > [`MAX_DEPTH`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, name = "solids::octosphere", fields(depth = self.depth))
    )]
    fn build(self) -> Mesh {
        sphere::<Octahedron>(self.depth)
    }
}

impl Build for Tetrasphere {
    /// Builds the subdivided, spherized tetrahedron.
    ///
    /// # Panics
    /// If `self.depth` > [`MAX_DEPTH`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, name = "solids::tetrasphere", fields(depth = self.depth))
    )]
    fn build(self) -> Mesh {
        sphere::<Tetrahedron>(self.depth)
    }
}

/// Recursively bisects the triangle with vertex indices `[a, b, c]`.
///
/// The indices must be valid indices into the vertices of `bld`. At depth
/// zero, pushes the face `[a, b, c]` unchanged. Otherwise pushes a new
/// vertex *d* at the midpoint of edge *ab*, and subdivides the triangles
/// *cad* and *bcd*, in that order, to `depth` − 1:
///
/// ```text
///           c
///          /|\
///        /  |  \
///      /    |    \
///    /  cad | bcd  \
///  /________|________\
/// a         d         b
/// ```
///
/// Both children keep the winding of the parent, and in each the new
/// vertex is last, so the next level bisects the edge opposite to it.
/// Midpoints are not shared between neighboring triangles.
///
/// In total, pushes 2<sup>`depth`</sup> faces and
/// 2<sup>`depth`</sup> − 1 vertices.
pub fn subdivide(bld: &mut Builder, [a, b, c]: [usize; 3], depth: u32) {
    if depth == 0 {
        bld.push_face(a, b, c);
    } else {
        let ab = bld.vert(a).midpoint(&bld.vert(b));
        let d = bld.push_vert(ab);
        subdivide(bld, [c, a, d], depth - 1);
        subdivide(bld, [b, c, d], depth - 1);
    }
}

fn sphere<P: Polyhedron>(depth: u32) -> Mesh {
    assert!(
        depth <= MAX_DEPTH,
        "subdivision depth {depth} exceeds maximum of {MAX_DEPTH}"
    );
    let mut bld = Mesh::builder();
    bld.push_verts(P::COORDS.iter().copied());
    for &face in P::FACES {
        subdivide(&mut bld, face, depth);
    }
    // One new vertex per split, no sharing between faces
    let faces = leaf_count(P::FACES.len(), depth);
    debug_assert_eq!(bld.face_count(), faces);
    debug_assert_eq!(
        bld.vert_count(),
        P::COORDS.len() + faces - P::FACES.len()
    );
    let mut mesh = bld.build();
    spherize(&mut mesh.verts);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        faces = mesh.faces.len(),
        verts = mesh.verts.len(),
        "built sphere mesh"
    );
    mesh
}
