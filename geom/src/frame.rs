//! The geometry of one displayed frame.

use re::geom::{Mesh, Polyline};
use re::math::Point3;

use crate::params::{Params, visible_len};
use crate::solids::{Build, Octosphere, Tetrasphere};

/// A sphere mesh together with a traversal curve over it.
///
/// The mesh and the curve are generated at the same depth, so that the
/// curve has one point in each face of an octosphere mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The subdivided sphere.
    pub mesh: Mesh,
    /// The traversal curve, in visiting order.
    pub path: Polyline<Point3>,
    /// Fraction of `path` to show, in [0, 1].
    pub draw_ratio: f32,
}

impl Frame {
    /// Generates an octosphere mesh and its traversal curve.
    ///
    /// # Examples
    /// ```
    /// use spherefill_geom::{frame::Frame, params::Params};
    ///
    /// let params = Params::from_sliders(3.0, 0.25);
    /// let frame = Frame::generate(&params);
    ///
    /// assert_eq!(frame.mesh.faces.len(), 64);
    /// assert_eq!(frame.path.len(), 64);
    /// assert_eq!(frame.visible_path().len(), 16);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, name = "frame::generate", fields(depth = params.depth))
    )]
    pub fn generate(params: &Params) -> Self {
        let Params { depth, draw_ratio } = *params;
        Self {
            mesh: Octosphere { depth }.build(),
            path: Octosphere { depth }.curve(),
            draw_ratio,
        }
    }

    /// Generates an octosphere mesh with the traversal curve of a
    /// tetrasphere instead.
    ///
    /// The curve has half as many points as the mesh has faces.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, name = "frame::tetrahedral", fields(depth = params.depth))
    )]
    pub fn tetrahedral(params: &Params) -> Self {
        let Params { depth, draw_ratio } = *params;
        Self {
            mesh: Octosphere { depth }.build(),
            path: Tetrasphere { depth }.curve(),
            draw_ratio,
        }
    }

    /// Returns the part of the curve to draw, the first
    /// ⌊`draw_ratio` · `len`⌋ points.
    pub fn visible_path(&self) -> &[Point3] {
        self.path
            .prefix(visible_len(self.draw_ratio, self.path.len()))
    }
}
