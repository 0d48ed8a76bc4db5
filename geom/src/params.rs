//! Generation parameters.
//!
//! [`Params`] holds the two values that control one frame: the subdivision
//! depth, and the fraction of the traversal curve to draw. Values coming
//! from an interactive control can be clamped into range with
//! [`Params::from_sliders`]; values from anywhere else should be checked
//! with [`Params::new`].

use core::fmt::{self, Display, Formatter};

use Error::*;

/// The greatest depth accepted by the mesh and curve builders.
///
/// At this depth an octosphere has 8·2<sup>20</sup> faces, a little over
/// eight million. Deeper recursion would exhaust memory long before the
/// recursion itself became a problem.
pub const MAX_DEPTH: u32 = 20;

/// The greatest depth selectable with [`Params::from_sliders`].
pub const SLIDER_MAX_DEPTH: u32 = 12;

/// Parameters for generating a [`Frame`][crate::frame::Frame].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Subdivision depth, at most [`MAX_DEPTH`].
    pub depth: u32,
    /// Fraction of the traversal curve to draw, in [0, 1].
    pub draw_ratio: f32,
}

/// Error validating [`Params`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    /// Depth was less than zero.
    NegativeDepth(i64),
    /// Depth was greater than [`MAX_DEPTH`].
    DepthTooLarge(i64),
    /// Draw ratio was not a number in [0, 1].
    InvalidRatio(f32),
}

/// Result of validating [`Params`].
pub type Result<T> = core::result::Result<T, Error>;

impl Params {
    /// Returns new parameters if `depth` and `draw_ratio` are in range.
    ///
    /// # Errors
    /// Returns [`NegativeDepth`] or [`DepthTooLarge`] if `depth` is not in
    /// 0..=[`MAX_DEPTH`], and [`InvalidRatio`] if `draw_ratio` is not in
    /// [0, 1].
    ///
    /// # Examples
    /// ```
    /// use spherefill_geom::params::{Error, Params};
    ///
    /// assert!(Params::new(4, 0.5).is_ok());
    /// assert_eq!(Params::new(-1, 0.5), Err(Error::NegativeDepth(-1)));
    /// assert_eq!(Params::new(4, 1.5), Err(Error::InvalidRatio(1.5)));
    /// ```
    pub fn new(depth: i64, draw_ratio: f32) -> Result<Self> {
        let depth = match u32::try_from(depth) {
            Err(_) if depth < 0 => return Err(NegativeDepth(depth)),
            Ok(d) if d <= MAX_DEPTH => d,
            _ => return Err(DepthTooLarge(depth)),
        };
        if !(0.0..=1.0).contains(&draw_ratio) {
            return Err(InvalidRatio(draw_ratio));
        }
        Ok(Self { depth, draw_ratio })
    }

    /// Returns parameters from the raw values of two sliders.
    ///
    /// `depth` is clamped to [0, [`SLIDER_MAX_DEPTH`]] and truncated toward
    /// zero; `draw_ratio` is clamped to [0, 1]. NaN values map to zero.
    ///
    /// # Examples
    /// ```
    /// use spherefill_geom::params::Params;
    ///
    /// let p = Params::from_sliders(7.9, 0.25);
    /// assert_eq!(p.depth, 7);
    /// assert_eq!(p.draw_ratio, 0.25);
    ///
    /// let p = Params::from_sliders(99.0, -1.0);
    /// assert_eq!(p.depth, 12);
    /// assert_eq!(p.draw_ratio, 0.0);
    /// ```
    pub fn from_sliders(depth: f32, draw_ratio: f32) -> Self {
        // Float-to-int `as` saturates and maps NaN to 0
        let depth = (depth.clamp(0.0, SLIDER_MAX_DEPTH as f32) as u32)
            .min(SLIDER_MAX_DEPTH);
        let draw_ratio = if draw_ratio.is_nan() {
            0.0
        } else {
            draw_ratio.clamp(0.0, 1.0)
        };
        Self { depth, draw_ratio }
    }

    /// Returns how many of the first `len` points of a curve to draw,
    /// ⌊`draw_ratio` · `len`⌋.
    ///
    /// # Examples
    /// ```
    /// use spherefill_geom::params::Params;
    ///
    /// let p = Params::from_sliders(1.0, 0.5);
    /// assert_eq!(p.visible(16), 8);
    /// assert_eq!(p.visible(5), 2);
    /// ```
    pub fn visible(&self, len: usize) -> usize {
        visible_len(self.draw_ratio, len)
    }
}

/// Returns ⌊`draw_ratio` · `len`⌋, capped at `len`.
///
/// A ratio below zero or NaN yields zero.
pub fn visible_len(draw_ratio: f32, len: usize) -> usize {
    let n = f64::from(draw_ratio) * len as f64;
    // Float-to-int `as` saturates and maps NaN to 0
    (n as usize).min(len)
}

impl Default for Params {
    fn default() -> Self {
        Self { depth: 8, draw_ratio: 1.0 }
    }
}

impl core::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NegativeDepth(d) => write!(f, "depth must not be negative: {d}"),
            DepthTooLarge(d) => {
                write!(f, "depth must be at most {MAX_DEPTH}: {d}")
            }
            InvalidRatio(r) => {
                write!(f, "draw ratio must be in [0, 1]: {r}")
            }
        }
    }
}
