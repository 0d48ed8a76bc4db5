//! Space-filling curves over subdivided triangles.

use alloc::vec::Vec;

use re::geom::{Polyline, Tri};
use re::math::{Point3, pt3};

use crate::params::MAX_DEPTH;

use super::{
    Octahedron, Octosphere, Polyhedron, Tetrahedron, Tetrasphere, leaf_count,
    spherize,
};

/// The square [-1, 1]² on the xy plane, split into two triangles along
/// its anti-diagonal.
///
/// Traversing the square shows the shape of the curve without the
/// distortion of the sphere projection.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Square {
    pub depth: u32,
}

impl Square {
    #[rustfmt::skip]
    const HALVES: [[Point3; 3]; 2] = [
        [pt3( 1.0, -1.0, 0.0), pt3(-1.0,  1.0, 0.0), pt3(-1.0, -1.0, 0.0)],
        [pt3(-1.0,  1.0, 0.0), pt3( 1.0, -1.0, 0.0), pt3( 1.0,  1.0, 0.0)],
    ];

    /// Returns the traversal curve of the square, 2·2<sup>`depth`</sup>
    /// points on the xy plane.
    ///
    /// # Panics
    /// If `self.depth` > [`MAX_DEPTH`].
    pub fn curve(self) -> Polyline<Point3> {
        check_depth(self.depth);
        let mut out = Vec::with_capacity(leaf_count(2, self.depth));
        for half in Self::HALVES {
            traverse(&mut out, half, self.depth, false);
        }
        Polyline(out)
    }
}

impl Octosphere {
    /// Returns the traversal curve of the octosphere, 8·2<sup>`depth`</sup>
    /// points on the unit sphere, one in each face of
    /// [`build`][super::Build::build]'s mesh at the same depth.
    ///
    /// # Panics
    /// If `self.depth` > [`MAX_DEPTH`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, name = "solids::octosphere_curve", fields(depth = self.depth))
    )]
    pub fn curve(self) -> Polyline<Point3> {
        sphere_curve::<Octahedron>(self.depth)
    }
}

impl Tetrasphere {
    /// Returns the traversal curve of the tetrasphere, 4·2<sup>`depth`</sup>
    /// points on the unit sphere.
    ///
    /// # Panics
    /// If `self.depth` > [`MAX_DEPTH`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, name = "solids::tetrasphere_curve", fields(depth = self.depth))
    )]
    pub fn curve(self) -> Polyline<Point3> {
        sphere_curve::<Tetrahedron>(self.depth)
    }
}

/// Recursively bisects the triangle `[a, b, c]` like
/// [`subdivide`][super::subdivide], appending the centroid of each leaf
/// triangle to `out`.
///
/// The leaves are visited in an order where consecutive centroids are
/// close to each other. At each level the edge *ab* is bisected at *d*,
/// and the halves *cad* and *bcd* are visited in that order if `flip` is
/// false, in the reverse order if it is true. The flag is toggled for the
/// next level down; always using the same order would make the curve
/// zig-zag between distant leaves.
///
/// Appends exactly 2<sup>`depth`</sup> points, without touching the
/// existing contents of `out`.
///
/// # Examples
/// ```
/// use spherefill_geom::re::{assert_approx_eq, math::{pt3, Point3}};
/// use spherefill_geom::solids::traverse;
///
/// let tri: [Point3; 3] =
///     [pt3(0.0, 0.0, 0.0), pt3(6.0, 0.0, 0.0), pt3(0.0, 6.0, 0.0)];
///
/// let mut out = vec![];
/// traverse(&mut out, tri, 1, false);
/// assert_approx_eq!(out[0], pt3(1.0, 2.0, 0.0));
/// assert_approx_eq!(out[1], pt3(3.0, 2.0, 0.0));
///
/// out.clear();
/// traverse(&mut out, tri, 1, true);
/// assert_approx_eq!(out[0], pt3(3.0, 2.0, 0.0));
/// assert_approx_eq!(out[1], pt3(1.0, 2.0, 0.0));
/// ```
pub fn traverse(
    out: &mut Vec<Point3>,
    [a, b, c]: [Point3; 3],
    depth: u32,
    flip: bool,
) {
    if depth == 0 {
        out.push(Tri([a, b, c]).centroid());
    } else {
        let d = a.midpoint(&b);
        let [first, second] = if flip {
            [[b, c, d], [c, a, d]]
        } else {
            [[c, a, d], [b, c, d]]
        };
        traverse(out, first, depth - 1, !flip);
        traverse(out, second, depth - 1, !flip);
    }
}

fn sphere_curve<P: Polyhedron>(depth: u32) -> Polyline<Point3> {
    check_depth(depth);
    let mut out = Vec::with_capacity(leaf_count(P::FACES.len(), depth));
    for face in P::face_coords() {
        traverse(&mut out, face, depth, false);
    }
    spherize(&mut out);

    #[cfg(feature = "tracing")]
    tracing::debug!(points = out.len(), "built sphere curve");
    Polyline(out)
}

fn check_depth(depth: u32) {
    assert!(
        depth <= MAX_DEPTH,
        "traversal depth {depth} exceeds maximum of {MAX_DEPTH}"
    );
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use re::assert_approx_eq;

    use crate::solids::Build;

    use super::*;

    const TRI: [Point3; 3] =
        [pt3(0.0, 0.0, 0.0), pt3(8.0, 0.0, 0.0), pt3(0.0, 8.0, 0.0)];

    #[test]
    fn depth_0_is_centroid() {
        let mut out = vec![];
        traverse(&mut out, TRI, 0, false);
        assert_eq!(out.len(), 1);
        assert_approx_eq!(out[0], pt3(8.0 / 3.0, 8.0 / 3.0, 0.0));
    }

    #[test]
    fn flip_is_ignored_at_depth_0() {
        let (mut a, mut b) = (vec![], vec![]);
        traverse(&mut a, TRI, 0, false);
        traverse(&mut b, TRI, 0, true);
        assert_eq!(a, b);
    }

    #[test]
    fn depth_2_alternates_order() {
        let mut out = vec![];
        traverse(&mut out, TRI, 2, false);

        // d = (4, 0); first [c, a, d] with flip: visits [a, d, e] then
        // [d, c, e] where e = mid(c, a) = (0, 4)
        let expected: [Point3; 4] = [
            Tri([pt3(0.0, 0.0, 0.0), pt3(4.0, 0.0, 0.0), pt3(0.0, 4.0, 0.0)]),
            Tri([pt3(4.0, 0.0, 0.0), pt3(0.0, 8.0, 0.0), pt3(0.0, 4.0, 0.0)]),
            // second [b, c, d] with flip: visits [c, d, f] then [d, b, f]
            // where f = mid(b, c) = (4, 4)
            Tri([pt3(0.0, 8.0, 0.0), pt3(4.0, 0.0, 0.0), pt3(4.0, 4.0, 0.0)]),
            Tri([pt3(4.0, 0.0, 0.0), pt3(8.0, 0.0, 0.0), pt3(4.0, 4.0, 0.0)]),
        ]
        .map(|t| t.centroid());
        assert_approx_eq!(out[..], expected[..]);
    }

    #[test]
    fn appends_to_existing() {
        let mut out = vec![pt3(9.0, 9.0, 9.0)];
        traverse(&mut out, TRI, 3, true);
        assert_eq!(out.len(), 1 + 8);
        assert_eq!(out[0], pt3(9.0, 9.0, 9.0));
    }

    #[test]
    fn curve_visits_leaves_of_mesh() {
        // Unspherized, each point is the centroid of one leaf face
        let depth = 3;
        let mut pts = vec![];
        for face in Octahedron::face_coords() {
            traverse(&mut pts, face, depth, false);
        }
        let mut bld = re::geom::Mesh::builder();
        bld.push_verts(Octahedron::COORDS.iter().copied());
        for &f in Octahedron::FACES {
            crate::solids::subdivide(&mut bld, f, depth);
        }
        let mesh = bld.build();
        assert_eq!(pts.len(), mesh.faces.len());

        for c in mesh.tris().map(|t| t.centroid()) {
            assert!(
                pts.iter().any(|p| p.distance(&c) < 1e-5),
                "no curve point at {c:?}"
            );
        }
    }

    #[test]
    fn sphere_curve_lengths() {
        assert_eq!(Octosphere { depth: 0 }.curve().len(), 8);
        assert_eq!(Octosphere { depth: 1 }.curve().len(), 16);
        assert_eq!(Tetrasphere { depth: 0 }.curve().len(), 4);
        assert_eq!(Tetrasphere { depth: 1 }.curve().len(), 8);
        assert_eq!(Octosphere { depth: 5 }.curve().len(), 256);
    }

    #[test]
    fn sphere_curves_are_on_unit_sphere() {
        let oct = Octosphere { depth: 4 }.curve();
        let tet = Tetrasphere { depth: 4 }.curve();
        for p in oct.0.iter().chain(&tet.0) {
            assert_approx_eq!(p.to_vec().len(), 1.0);
        }
    }

    #[test]
    fn octosphere_depth_0_is_face_directions() {
        let curve = Octosphere { depth: 0 }.curve();
        // Centroid of (BL, BR, Down) is (0, -1/3, -2√½/3)
        assert_approx_eq!(
            curve.0[0],
            pt3(0.0, -0.57735026, -0.8164966),
            eps = 1e-4
        );
        // Each face touches one pole
        for p in &curve.0 {
            assert_approx_eq!(p.y() * p.y(), 1.0 / 3.0, eps = 1e-4);
        }
    }

    #[test]
    fn octosphere_curve_matches_mesh_faces() {
        let mesh = Octosphere { depth: 2 }.build();
        let curve = Octosphere { depth: 2 }.curve();
        assert_eq!(curve.len(), mesh.faces.len());
    }

    #[test]
    fn square_curve() {
        let curve = Square { depth: 0 }.curve();
        let centroids: [Point3; 2] =
            [pt3(-1.0 / 3.0, -1.0 / 3.0, 0.0), pt3(1.0 / 3.0, 1.0 / 3.0, 0.0)];
        assert_approx_eq!(curve.0[..], centroids[..]);
        let curve = Square { depth: 6 }.curve();
        assert_eq!(curve.len(), 2 << 6);
        for p in &curve.0 {
            assert!(-1.0 < p.x() && p.x() < 1.0, "{p:?}");
            assert!(-1.0 < p.y() && p.y() < 1.0, "{p:?}");
            assert_eq!(p.z(), 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "traversal depth 21 exceeds maximum of 20")]
    fn curve_too_deep() {
        _ = Tetrasphere { depth: 21 }.curve();
    }
}
