//! Starfield
//! =========
//!
//! View transform
//! --------------
//!
//! Defines `Transform`, the 2x3 affine map from world coordinates to
//! canvas pixel coordinates.

use std::fmt;

use crate::shape::SpotShape;

/// World-to-canvas affine view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// xx - X dimension
    pub xx: f64,
    /// xy - XY skew
    pub xy: f64,
    /// yx - YX skew
    pub yx: f64,
    /// yy - Y dimension
    pub yy: f64,
    /// tx - X translation
    pub tx: f64,
    /// ty - Y translation
    pub ty: f64,
}

impl Default for Transform {
    /// The identity transform: zero translation, unit linear part.
    fn default() -> Self {
        Transform {
            xx: 1.0,
            xy: 0.0,
            yx: 0.0,
            yy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Transform {
    /// Creates a transform from a uniform scale factor: `diag(s, s)`, zero translation.
    pub fn from_scalar(s: f64) -> Self {
        Transform {
            xx: s,
            xy: 0.0,
            yx: 0.0,
            yy: s,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Creates a transform from a translation vector: identity linear part.
    pub fn from_translation(t: (f64, f64)) -> Self {
        Transform {
            xx: 1.0,
            xy: 0.0,
            yx: 0.0,
            yy: 1.0,
            tx: t.0,
            ty: t.1,
        }
    }

    /// Creates a transform from a 2x2 linear part, zero translation.
    pub fn from_matrix2x2(xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        Transform {
            xx,
            xy,
            yx,
            yy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Creates a transform from the full 2x3 affine coefficients.
    pub fn from_matrix2x3(xx: f64, xy: f64, tx: f64, yx: f64, yy: f64, ty: f64) -> Self {
        Transform {
            xx,
            xy,
            yx,
            yy,
            tx,
            ty,
        }
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: (f64, f64)) -> (f64, f64) {
        (
            self.xx * p.0 + self.xy * p.1 + self.tx,
            self.yx * p.0 + self.yy * p.1 + self.ty,
        )
    }

    /// Composes `self` with `other`, applying `self`'s mapping first and
    /// `other`'s mapping second: `self.compose(other)(p) == other(self(p))`.
    pub fn compose(&self, other: &Transform) -> Transform {
        Transform {
            xx: other.xx * self.xx + other.xy * self.yx,
            xy: other.xx * self.xy + other.xy * self.yy,
            tx: other.xx * self.tx + other.xy * self.ty + other.tx,
            yx: other.yx * self.xx + other.yy * self.yx,
            yy: other.yx * self.xy + other.yy * self.yy,
            ty: other.yx * self.tx + other.yy * self.ty + other.ty,
        }
    }

    /// Scales the transform uniformly by `k`.
    pub fn scale(&self, k: f64) -> Transform {
        self.compose(&Transform::from_scalar(k))
    }

    /// Stretches the transform independently along X and Y.
    pub fn stretch(&self, kx: f64, ky: f64) -> Transform {
        self.compose(&Transform::from_matrix2x2(kx, 0.0, 0.0, ky))
    }

    /// Rotates the transform by `deg` degrees.
    pub fn rotate(&self, deg: f64) -> Transform {
        let rad = deg.to_radians();
        let (s, c) = rad.sin_cos();
        self.compose(&Transform::from_matrix2x2(c, -s, s, c))
    }

    /// Translates the transform by `(tx, ty)`, added to the existing translation.
    pub fn translate(&self, t: (f64, f64)) -> Transform {
        self.compose(&Transform::from_translation(t))
    }

    /// Returns the 2x2 linear part of the transform, discarding translation.
    pub(crate) fn linear(&self) -> SpotShape {
        SpotShape::from_matrix(self.xx, self.xy, self.yx, self.yy)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}]]",
            self.xx, self.xy, self.tx, self.yx, self.yy, self.ty
        )
    }
}
