//! The vertex abstraction shared by every polyline.
//!
//! Arc-length bookkeeping only needs three things from a point type: the
//! distance to another point, linear interpolation, and a tolerant equality
//! test. Anything providing them can be measured and divided, independent of
//! its dimension.

use super::{Point2, Point3};
use num_traits::Float;
use std::fmt::Debug;

/// Absolute tolerance floor used by [`Vertex::is_close`].
///
/// Keeps comparisons against zero coordinates meaningful, where a purely
/// relative test would demand exact equality.
pub const ABS_TOL: f64 = 1e-12;

/// A point that can be placed along a polyline.
pub trait Vertex: Copy + Debug {
    /// Coordinate and distance type.
    type Scalar: Float + Debug;

    /// Euclidean distance to `other`, i.e. the magnitude of `other - self`.
    fn distance(self, other: Self) -> Self::Scalar;

    /// Linearly interpolates between `self` (`t = 0`) and `other` (`t = 1`).
    fn lerp(self, other: Self, t: Self::Scalar) -> Self;

    /// Returns `true` if every coordinate of `self` and `other` agrees within
    /// the relative tolerance `rel_tol` (with an absolute floor of [`ABS_TOL`]).
    fn is_close(self, other: Self, rel_tol: Self::Scalar) -> bool;
}

/// Scalar closeness test: `|a - b| <= max(rel_tol * max(|a|, |b|), ABS_TOL)`.
#[inline]
pub fn is_close<F: Float>(a: F, b: F, rel_tol: F) -> bool {
    if a == b {
        return true;
    }
    let abs_tol = F::from(ABS_TOL).unwrap_or_else(F::zero);
    let diff = (a - b).abs();
    diff <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

impl<F: Float + Debug> Vertex for Point2<F> {
    type Scalar = F;

    #[inline]
    fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        Point2::lerp(self, other, t)
    }

    #[inline]
    fn is_close(self, other: Self, rel_tol: F) -> bool {
        is_close(self.x, other.x, rel_tol) && is_close(self.y, other.y, rel_tol)
    }
}

impl<F: Float + Debug> Vertex for Point3<F> {
    type Scalar = F;

    #[inline]
    fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    #[inline]
    fn lerp(self, other: Self, t: F) -> Self {
        Point3::lerp(self, other, t)
    }

    #[inline]
    fn is_close(self, other: Self, rel_tol: F) -> bool {
        is_close(self.x, other.x, rel_tol)
            && is_close(self.y, other.y, rel_tol)
            && is_close(self.z, other.z, rel_tol)
    }
}
