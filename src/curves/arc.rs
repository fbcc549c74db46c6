//! Circular arc type.
//!
//! Arcs have a closed-form length, which makes them the reference curve for
//! checking sampled arc-length approximations.

use super::PointAt;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::Debug;

/// A 2D circular arc defined by center, radius, and angular range.
///
/// Angles are in radians, measured counter-clockwise from the positive x-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2<F> {
    /// Center of the arc's circle.
    pub center: Point2<F>,
    /// Radius of the arc.
    pub radius: F,
    /// Start angle in radians.
    pub start_angle: F,
    /// End angle in radians.
    pub end_angle: F,
}

impl<F: Float> Arc2<F> {
    /// Creates a new arc.
    ///
    /// The arc runs from `start_angle` to `end_angle`; use
    /// `start_angle > end_angle` for a clockwise arc.
    #[inline]
    pub fn new(center: Point2<F>, radius: F, start_angle: F, end_angle: F) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Returns the point at the given angle on the arc's circle.
    #[inline]
    pub fn point_at_angle(&self, angle: F) -> Point2<F> {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Returns the signed sweep angle (positive = counter-clockwise).
    #[inline]
    pub fn sweep_angle(&self) -> F {
        self.end_angle - self.start_angle
    }

    /// Returns the exact arc length.
    #[inline]
    pub fn arc_length(&self) -> F {
        self.radius * self.sweep_angle().abs()
    }

    /// Evaluates the arc at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        self.point_at_angle(self.start_angle + t * self.sweep_angle())
    }
}

impl<F: Float + Debug> PointAt<Point2<F>> for Arc2<F> {
    #[inline]
    fn point_at(&self, t: F) -> Point2<F> {
        self.eval(t)
    }
}
