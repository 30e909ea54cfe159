//! Starfield
//! =========
//!
//! Spot shape matrix
//! -----------------
//!
//! Defines `SpotShape`, the 2x2 matrix describing a light spot's PSF footprint.

use std::fmt;

use crate::pattern::{J1_ZERO1, J1_ZERO2};

/// Spot shape definition matrix.
///
/// A unit sized circular spot is scaled, stretched and/or rotated
/// using this 2x2 linear transform matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotShape {
    /// xx - X dimension
    pub xx: f64,
    /// xy - XY skew
    pub xy: f64,
    /// yx - YX skew
    pub yx: f64,
    /// yy - Y dimension
    pub yy: f64,
}

impl Default for SpotShape {
    /// The identity shape: a unit circular spot.
    fn default() -> Self {
        SpotShape {
            xx: 1.0,
            xy: 0.0,
            yx: 0.0,
            yy: 1.0,
        }
    }
}

impl SpotShape {
    /// Creates a shape from a uniform scale factor: `diag(s, s)`.
    pub fn from_scalar(s: f64) -> Self {
        SpotShape {
            xx: s,
            xy: 0.0,
            yx: 0.0,
            yy: s,
        }
    }

    /// Creates a shape from independent X/Y scale factors: `diag(kx, ky)`.
    pub fn from_diag(kx: f64, ky: f64) -> Self {
        SpotShape {
            xx: kx,
            xy: 0.0,
            yx: 0.0,
            yy: ky,
        }
    }

    /// Creates a shape from the four matrix coefficients, row-major.
    pub fn from_matrix(xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        SpotShape { xx, xy, yx, yy }
    }

    /// Scales the shape uniformly by `k`.
    ///
    /// Equivalent to left-multiplying the shape matrix by `k * I`.
    pub fn scale(&self, k: f64) -> SpotShape {
        Self::from_scalar(k).premultiply(self)
    }

    /// Stretches the shape independently along X and Y.
    ///
    /// Equivalent to left-multiplying the shape matrix by `diag(kx, ky)`.
    pub fn stretch(&self, kx: f64, ky: f64) -> SpotShape {
        Self::from_diag(kx, ky).premultiply(self)
    }

    /// Rotates the shape by `deg` degrees.
    ///
    /// Equivalent to left-multiplying the shape matrix by the rotation matrix.
    pub fn rotate(&self, deg: f64) -> SpotShape {
        Self::rotation(deg).premultiply(self)
    }

    /// Builds the rotation matrix for `deg` degrees (zero translation analogue).
    fn rotation(deg: f64) -> SpotShape {
        let rad = deg.to_radians();
        let (s, c) = rad.sin_cos();

        SpotShape {
            xx: c,
            xy: -s,
            yx: s,
            yy: c,
        }
    }

    /// Left-multiplies `self` onto `other`: returns `self * other`.
    pub(crate) fn premultiply(&self, other: &SpotShape) -> SpotShape {
        SpotShape {
            xx: self.xx * other.xx + self.xy * other.yx,
            xy: self.xx * other.xy + self.xy * other.yy,
            yx: self.yx * other.xx + self.yy * other.yx,
            yy: self.yx * other.xy + self.yy * other.yy,
        }
    }

    /// Transforms a 2D vector using the shape matrix.
    pub(crate) fn apply(&self, vec: (f64, f64)) -> (f64, f64) {
        let x = vec.0 * self.xx + vec.1 * self.xy;
        let y = vec.0 * self.yx + vec.1 * self.yy;

        (x, y)
    }

    /// Inverts the shape matrix.
    ///
    /// Falls back to the identity shape on (near-)singular input in release
    /// builds; panics in debug builds, since a singular spot shape always
    /// indicates a programming error upstream (e.g. a zero scale factor).
    pub(crate) fn invert(&self) -> SpotShape {
        let det = self.xx * self.yy - self.xy * self.yx;

        if det.abs() < 1e-9 {
            debug_assert!(false, "singular shape matrix: {:?}", self);
            return SpotShape::default();
        }

        let inv_det = det.recip();

        SpotShape {
            xx: inv_det * self.yy,
            xy: inv_det * -self.xy,
            yx: inv_det * -self.yx,
            yy: inv_det * self.xx,
        }
    }

    /// Fudge factor for the effective spot radius estimation.
    ///
    /// The unit radius is the radius of the Airy disc at the first minimum,
    /// also known as the diffraction radius. The effective (rasterized) spot
    /// radius is arbitrarily chosen as the radius of the second Airy disc
    /// minimum.
    const EFFECTIVE_RADIUS_FACTOR: f64 = J1_ZERO2 / J1_ZERO1;

    /// Calculates the effective radius of the spot image, projected onto
    /// the coordinate axes, as `(rx, ry)`.
    pub(crate) fn effective_radius_xy(&self) -> (f64, f64) {
        (
            Self::EFFECTIVE_RADIUS_FACTOR * self.xx.hypot(self.xy),
            Self::EFFECTIVE_RADIUS_FACTOR * self.yy.hypot(self.yx),
        )
    }
}

impl fmt::Display for SpotShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.xx, self.xy, self.yx, self.yy
        )
    }
}
