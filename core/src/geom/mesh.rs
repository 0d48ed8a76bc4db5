//! Triangle meshes.

use alloc::{vec, vec::Vec};

use crate::math::Point3;

use super::Tri;

/// A triangle mesh.
///
/// An object made of flat polygonal faces that typically form a contiguous
/// surface without holes or boundaries, so that every face shares each of its
/// edges with another face. By using many faces, complex curved shapes can be
/// approximated.
///
/// Faces refer to their vertices by index, so a vertex shared by several
/// faces is only stored once.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<B = ()> {
    /// The faces of the mesh, with each face a triplet of indices
    /// to the `verts` vector. Several faces can share a vertex.
    pub faces: Vec<Tri<usize>>,
    /// The vertex positions of the mesh.
    pub verts: Vec<Point3<B>>,
}

/// Incrementally constructs a [`Mesh`].
///
/// Vertices are append-only: once pushed, a vertex keeps its index and
/// position for the lifetime of the builder. Faces pushed before
/// [`build`][Builder::build] may thus refer to any index returned by
/// [`push_vert`][Builder::push_vert].
#[derive(Clone, Debug)]
pub struct Builder<B = ()> {
    mesh: Mesh<B>,
}

impl<B> Mesh<B> {
    /// Creates a new triangle mesh with the given faces and vertices.
    ///
    /// Each face in `faces` is a triplet of indices, referring to
    /// the vertices in `verts` that define that face.
    ///
    /// # Examples
    /// ```
    /// # use spherefill_core::geom::{Tri, Mesh};
    /// # use spherefill_core::math::{pt3, Point3};
    /// let verts: [Point3; 4] = [
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(1.0, 0.0, 0.0),
    ///     pt3(0.0, 1.0, 0.0),
    ///     pt3(0.0, 0.0, 1.0)
    /// ];
    ///
    /// let faces = [
    ///     Tri([0, 2, 1]),
    ///     Tri([0, 1, 3]),
    ///     Tri([0, 3, 2]),
    ///     Tri([1, 2, 3])
    /// ];
    ///
    /// // Create a mesh with a tetrahedral shape
    /// let tetra = Mesh::new(faces, verts);
    /// assert_eq!(tetra.faces.len(), 4);
    /// ```
    /// # Panics
    /// If any of the vertex indices in `faces` ≥ `verts.len()`.
    pub fn new<F, V>(faces: F, verts: V) -> Self
    where
        F: IntoIterator<Item = Tri<usize>>,
        V: IntoIterator<Item = Point3<B>>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        let verts: Vec<_> = verts.into_iter().collect();

        for (i, Tri(vs)) in faces.iter().enumerate() {
            assert!(
                vs.iter().all(|&j| j < verts.len()),
                "vertex index out of bounds at faces[{i}]: {vs:?}"
            )
        }
        Self { faces, verts }
    }

    /// Returns a new mesh builder.
    pub fn builder() -> Builder<B> {
        Builder::default()
    }

    /// Returns an iterator over the faces of `self`, with the vertex
    /// indices resolved to positions.
    pub fn tris(&self) -> impl Iterator<Item = Tri<Point3<B>>> + '_ {
        self.faces
            .iter()
            .map(|Tri(vs)| Tri(vs.map(|i| self.verts[i])))
    }
}

impl<B> Builder<B> {
    /// Appends a vertex with the given position.
    ///
    /// Returns the index of the new vertex. The index stays valid, and
    /// refers to the same position, for as long as the builder lives.
    pub fn push_vert(&mut self, pos: Point3<B>) -> usize {
        let idx = self.mesh.verts.len();
        self.mesh.verts.push(pos);
        idx
    }

    /// Appends all the vertices yielded by the given iterator.
    pub fn push_verts<Vs>(&mut self, verts: Vs)
    where
        Vs: IntoIterator<Item = Point3<B>>,
    {
        self.mesh.verts.extend(verts);
    }

    /// Appends a face with the given vertex indices.
    ///
    /// The indices are not checked until [`build`][Self::build].
    pub fn push_face(&mut self, a: usize, b: usize, c: usize) {
        self.mesh.faces.push(Tri([a, b, c]));
    }

    /// Appends all the faces yielded by the given iterator.
    pub fn push_faces<Fs>(&mut self, faces: Fs)
    where
        Fs: IntoIterator<Item = [usize; 3]>,
    {
        self.mesh.faces.extend(faces.into_iter().map(Tri));
    }

    /// Returns the position of the vertex at index `i`.
    ///
    /// # Panics
    /// If `i` is not an index returned by [`push_vert`][Self::push_vert].
    pub fn vert(&self, i: usize) -> Point3<B> {
        self.mesh.verts[i]
    }

    /// Returns the number of vertices pushed so far.
    pub fn vert_count(&self) -> usize {
        self.mesh.verts.len()
    }

    /// Returns the number of faces pushed so far.
    pub fn face_count(&self) -> usize {
        self.mesh.faces.len()
    }

    /// Returns the finished mesh containing all the added faces and vertices.
    ///
    /// # Panics
    /// If any of the vertex indices in `faces` ≥ `verts.len()`.
    pub fn build(self) -> Mesh<B> {
        // Sanity checks done by new()
        Mesh::new(self.mesh.faces, self.mesh.verts)
    }
}

impl<B> Default for Mesh<B> {
    fn default() -> Self {
        Self { faces: vec![], verts: vec![] }
    }
}

impl<B> Default for Builder<B> {
    fn default() -> Self {
        Self { mesh: Mesh::default() }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::pt3;

    use super::*;

    #[test]
    #[should_panic(expected = "vertex index out of bounds at faces[1]: [1, 2, 3]")]
    fn mesh_new_panics_if_vertex_index_oob() {
        let _: Mesh = Mesh::new(
            [Tri([0, 1, 2]), Tri([1, 2, 3])],
            [
                pt3(0.0, 0.0, 0.0),
                pt3(1.0, 1.0, 1.0),
                pt3(2.0, 2.0, 2.0),
            ],
        );
    }

    #[test]
    #[should_panic]
    fn mesh_builder_panics_if_vertex_index_oob() {
        let mut b: Builder = Mesh::builder();
        b.push_faces([[0, 1, 2], [1, 2, 3]]);
        b.push_verts([
            pt3(0.0, 0.0, 0.0),
            pt3(1.0, 1.0, 1.0),
            pt3(2.0, 2.0, 2.0),
        ]);

        _ = b.build();
    }

    #[test]
    fn mesh_with_custom_basis_is_debug() {
        // Debug but not Default
        #[derive(Debug)]
        struct World;

        let mut b = Mesh::<World>::builder();
        let i = b.push_vert(pt3(1.0, 2.0, 3.0));
        b.push_face(i, i, i);
        let mesh = b.build();
        assert_eq!(
            alloc::format!("{mesh:?}"),
            "Mesh { faces: [Tri([0, 0, 0])], \
             verts: [Point<R3<World>>[1.0, 2.0, 3.0]] }"
        );
    }

    #[test]
    fn push_vert_returns_consecutive_indices() {
        let mut b: Builder = Mesh::builder();
        assert_eq!(b.push_vert(pt3(0.0, 0.0, 0.0)), 0);
        assert_eq!(b.push_vert(pt3(1.0, 0.0, 0.0)), 1);
        assert_eq!(b.push_vert(pt3(0.0, 1.0, 0.0)), 2);
        assert_eq!(b.vert(1), pt3(1.0, 0.0, 0.0));
        assert_eq!(b.vert_count(), 3);
    }

    #[test]
    fn faces_may_share_vertices() {
        let mut b: Builder = Mesh::builder();
        let [v0, v1, v2, v3] = [
            pt3(0.0, 0.0, 0.0),
            pt3(1.0, 0.0, 0.0),
            pt3(1.0, 1.0, 0.0),
            pt3(0.0, 1.0, 0.0),
        ]
        .map(|p| b.push_vert(p));
        b.push_face(v0, v1, v2);
        b.push_face(v0, v2, v3);
        assert_eq!(b.face_count(), 2);

        let quad = b.build();
        assert_eq!(quad.verts.len(), 4);
        assert_eq!(quad.faces, [Tri([0, 1, 2]), Tri([0, 2, 3])]);

        let tris: Vec<_> = quad.tris().collect();
        assert_eq!(tris[1].0[1], pt3(1.0, 1.0, 0.0));
    }
}
