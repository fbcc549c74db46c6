//! The capability a curve needs to be parameterized by arc length.

use crate::primitives::Vertex;

/// A parametrized curve that can be evaluated at any parameter `t`.
///
/// Implementations must be deterministic: the same `t` always gives the same
/// point. The valid parameter domain is `[0, max_t]`, chosen by the caller
/// when sampling the curve.
///
/// Closures `Fn(t) -> P` implement this trait, so ad-hoc curves need no
/// wrapper type:
///
/// ```
/// use arclen::curves::PointAt;
/// use arclen::Point3;
///
/// let helix = |t: f64| Point3::new(t.cos(), t.sin(), 0.5 * t);
/// let start: Point3<f64> = helix.point_at(0.0);
/// assert_eq!(start, Point3::new(1.0, 0.0, 0.0));
/// ```
pub trait PointAt<P: Vertex> {
    /// Evaluates the curve at parameter `t`.
    fn point_at(&self, t: P::Scalar) -> P;
}

impl<P, G> PointAt<P> for G
where
    P: Vertex,
    G: Fn(P::Scalar) -> P,
{
    #[inline]
    fn point_at(&self, t: P::Scalar) -> P {
        self(t)
    }
}
