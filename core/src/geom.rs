//! Basic geometric primitives.

use alloc::vec::Vec;

use crate::math::{Point3, Vec3};

pub use mesh::{Builder, Mesh};

pub mod mesh;

/// Triangle, defined by three vertices.
///
/// The vertices may be positions, or indices into some vertex storage
/// such as [`Mesh::verts`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// A curve composed of a chain of line segments.
///
/// The polyline is represented as a list of points, or vertices, with each
/// pair of consecutive vertices sharing an edge. The order of the vertices
/// is therefore significant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Polyline<T>(pub Vec<T>);

/// A line segment between two vertices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edge<T>(pub T, pub T);

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

impl<B> Tri<Point3<B>> {
    /// Given a triangle ABC, returns the vectors [AB, AC].
    pub fn tangents(&self) -> [Vec3<B>; 2] {
        let [a, b, c] = self.0;
        [b - a, c - a]
    }

    /// Returns the centroid of `self`, the average of its vertices.
    ///
    /// # Examples
    /// ```
    /// use spherefill_core::{assert_approx_eq, geom::tri};
    /// use spherefill_core::math::{pt3, Point3};
    ///
    /// let t = tri::<Point3>(
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(3.0, 0.0, 0.0),
    ///     pt3(0.0, 3.0, 3.0),
    /// );
    /// assert_approx_eq!(t.centroid(), pt3(1.0, 1.0, 1.0));
    /// ```
    pub fn centroid(&self) -> Point3<B> {
        let [a, b, c] = self.0.map(|p| p.to_vec());
        ((a + b + c) * (1.0 / 3.0)).to_pt()
    }

    /// Returns the unit normal of `self`.
    ///
    /// The normal points toward the side from which the vertices appear
    /// in counter-clockwise order, as per the right-hand rule.
    ///
    /// # Examples
    /// ```
    /// use spherefill_core::{assert_approx_eq, geom::tri};
    /// use spherefill_core::math::{pt3, vec3, Point3};
    ///
    /// let t = tri::<Point3>(
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(1.0, 0.0, 0.0),
    ///     pt3(0.0, 1.0, 0.0),
    /// );
    /// assert_approx_eq!(t.normal(), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normal(&self) -> Vec3<B> {
        let [t, u] = self.tangents();
        t.cross(&u).normalize()
    }
}

impl<T> Polyline<T> {
    /// Creates a new polyline from an iterator of vertex points.
    pub fn new(verts: impl IntoIterator<Item = T>) -> Self {
        Self(verts.into_iter().collect())
    }

    /// Returns the number of vertices in `self`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `self` has no vertices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first `n` vertices of `self`, or all of them if `n`
    /// is greater than the number of vertices.
    pub fn prefix(&self, n: usize) -> &[T] {
        &self.0[..n.min(self.0.len())]
    }

    /// Returns an iterator over the line segments of `self`.
    ///
    /// # Examples
    /// ```
    /// use spherefill_core::geom::{Polyline, Edge};
    /// use spherefill_core::math::{pt3, Point3};
    ///
    /// let pts: [Point3; 3] = [
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(1.0, 1.0, 0.0),
    ///     pt3(2.0, 1.0, 0.0),
    /// ];
    ///
    /// let pline = Polyline::new(pts);
    /// let mut edges = pline.edges();
    ///
    /// assert_eq!(edges.next(), Some(Edge(&pts[0], &pts[1])));
    /// assert_eq!(edges.next(), Some(Edge(&pts[1], &pts[2])));
    /// assert_eq!(edges.next(), None);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Edge<&T>> + '_ {
        self.0.windows(2).map(|e| Edge(&e[0], &e[1]))
    }
}

impl<B> Polyline<Point3<B>> {
    /// Returns the total length of the line segments of `self`.
    pub fn arc_len(&self) -> f32 {
        self.edges().map(|Edge(a, b)| a.distance(b)).sum()
    }
}

impl<T> FromIterator<T> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::assert_approx_eq;
    use crate::math::{pt3, vec3};

    use super::*;

    #[test]
    fn centroid_is_vertex_average() {
        let t: Tri<Point3> =
            tri(pt3(-1.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0), pt3(0.0, 0.0, 3.0));
        assert_approx_eq!(t.centroid(), pt3(0.0, 0.0, 1.0));
    }

    #[test]
    fn normal_follows_winding() {
        let [a, b, c]: [Point3; 3] =
            [pt3(0.0, 0.0, 0.0), pt3(0.0, 1.0, 0.0), pt3(0.0, 0.0, 1.0)];
        assert_approx_eq!(tri(a, b, c).normal(), vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(tri(a, c, b).normal(), vec3(-1.0, 0.0, 0.0));
        // Rotating the vertices keeps the winding
        assert_approx_eq!(tri(b, c, a).normal(), vec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn polyline_prefix() {
        let pl = Polyline(vec![1, 2, 3, 4]);
        assert_eq!(pl.prefix(0), &[] as &[i32]);
        assert_eq!(pl.prefix(3), &[1, 2, 3]);
        assert_eq!(pl.prefix(10), &[1, 2, 3, 4]);
    }

    #[test]
    fn polyline_edges_of_short_lines() {
        assert_eq!(Polyline::<i32>::default().edges().count(), 0);
        assert_eq!(Polyline(vec![1]).edges().count(), 0);
        assert_eq!(Polyline(vec![1, 2]).edges().count(), 1);
    }

    #[test]
    fn polyline_arc_len() {
        let pl: Polyline<Point3> = [
            pt3(0.0, 0.0, 0.0),
            pt3(3.0, 4.0, 0.0),
            pt3(3.0, 4.0, 1.0),
        ]
        .into_iter()
        .collect();
        assert_approx_eq!(pl.arc_len(), 6.0);
    }
}
