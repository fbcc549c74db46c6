//! Bézier curve types.
//!
//! Both curves are parametrized over `[0, 1]`. Their parameter speed is not
//! uniform, which is what makes them a typical input for arc-length
//! parameterization.

use super::PointAt;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::Debug;

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve starts at `p0`, is influenced by `p1`, and ends at `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let two = one + one;
        let (a, b, c) = (mt * mt, two * mt * t, t * t);

        Point2::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y,
        )
    }
}

impl<F: Float + Debug> PointAt<Point2<F>> for QuadraticBezier2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        self.eval(t)
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is influenced by `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let three = one + one + one;
        let mt = one - t;
        let (a, b, c, d) = (
            mt * mt * mt,
            three * mt * mt * t,
            three * mt * t * t,
            t * t * t,
        );

        Point2::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }
}

impl<F: Float + Debug> PointAt<Point2<F>> for CubicBezier2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        self.eval(t)
    }
}
