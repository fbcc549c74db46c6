//! Approximate mapping between curve parameter and arc length.
//!
//! A curve is sampled at uniformly spaced parameter values into a
//! [`Polyline`]. Arc length is then looked up on the polyline, and the
//! parameter is recovered by linear interpolation inside the bracketing
//! sample segment (and vice versa).
//!
//! The error in both directions is bounded by how far the curve deviates from
//! its chord within one sample segment. More segments tighten the bound for
//! curves with bounded curvature, but no a-priori guarantee is given; pick the
//! segment count empirically, e.g. by doubling it until two successive
//! approximations agree.
//!
//! # Example
//!
//! ```
//! use arclen::curves::{CubicBezier2, CurveParameterApproximator};
//! use arclen::Point2;
//!
//! let curve = CubicBezier2::new(
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 0.0),
//! );
//! let approx = CurveParameterApproximator::new(&curve)?;
//!
//! assert!((approx.length() - 10.0).abs() < 1e-9);
//! assert!((approx.parameter_at(5.0) - 0.5).abs() < 1e-9);
//! assert!((approx.distance_at(0.5) - 5.0).abs() < 1e-9);
//! # Ok::<(), arclen::ArcLengthError>(())
//! ```

use super::PointAt;
use crate::error::{ArcLengthError, Result};
use crate::polyline::Polyline;
use crate::primitives::Vertex;
use crate::sampling::linspace;
use num_traits::{Float, ToPrimitive, Zero};

/// Minimum sample segment length for the parameter correction to apply.
const MIN_SEGMENT_LENGTH: f64 = 1e-12;

/// Sampling options for a [`CurveParameterApproximator`].
#[derive(Debug, Clone, Copy)]
pub struct ApproximatorOptions<F> {
    /// Upper bound of the parameter domain `[0, max_t]`.
    pub max_t: F,
    /// Number of equal parameter subdivisions to sample.
    pub segments: usize,
}

impl<F: Float> Default for ApproximatorOptions<F> {
    fn default() -> Self {
        Self {
            max_t: F::one(),
            segments: 100,
        }
    }
}

impl<F: Float> ApproximatorOptions<F> {
    /// Creates options with the specified segment count.
    pub fn with_segments(segments: usize) -> Self {
        Self {
            segments,
            ..Default::default()
        }
    }

    /// Sets the upper bound of the parameter domain.
    pub fn max_t(mut self, max_t: F) -> Self {
        self.max_t = max_t;
        self
    }
}

/// Approximates the parameter-to-arc-length mapping of a curve.
///
/// The curve is evaluated only during construction; afterwards all queries
/// run against the internal sample polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveParameterApproximator<P: Vertex> {
    polyline: Polyline<P>,
    /// Parameter of every sample, `parameters[i]` belongs to vertex `i`.
    parameters: Vec<P::Scalar>,
    max_t: P::Scalar,
    segment_count: usize,
    step: P::Scalar,
}

impl<P: Vertex> CurveParameterApproximator<P> {
    /// Samples `curve` over `[0, 1]` with 100 segments.
    pub fn new<C: PointAt<P> + ?Sized>(curve: &C) -> Result<Self> {
        Self::with_options(curve, ApproximatorOptions::default())
    }

    /// Samples `curve` at `segments + 1` parameters evenly spaced over
    /// `[0, max_t]`.
    ///
    /// # Errors
    ///
    /// [`ArcLengthError::InvalidArgument`] if `segments` is zero or `max_t`
    /// is not a positive finite number.
    pub fn with_options<C: PointAt<P> + ?Sized>(
        curve: &C,
        options: ApproximatorOptions<P::Scalar>,
    ) -> Result<Self> {
        let ApproximatorOptions { max_t, segments } = options;
        if segments == 0 {
            return Err(ArcLengthError::invalid_argument(
                "segments",
                "must be at least 1",
            ));
        }
        if !(max_t.is_finite() && max_t > <P::Scalar as Zero>::zero()) {
            return Err(ArcLengthError::invalid_argument(
                "max_t",
                format!("must be positive and finite, got {max_t:?}"),
            ));
        }
        let divisor = num_traits::cast::<_, P::Scalar>(segments).ok_or_else(|| {
            ArcLengthError::invalid_argument("segments", "not representable as a float")
        })?;

        let parameters: Vec<P::Scalar> =
            linspace(<P::Scalar as Zero>::zero(), max_t, segments + 1).collect();
        let polyline = Polyline::new(parameters.iter().map(|&t| curve.point_at(t)));
        log::debug!(
            "sampled curve over [0, {max_t:?}] with {segments} segments, length {:?}",
            polyline.length()
        );
        if polyline.length() == <P::Scalar as Zero>::zero() {
            log::warn!("sampled curve has zero length; every distance maps to max_t");
        }

        Ok(Self {
            polyline,
            parameters,
            max_t,
            segment_count: segments,
            step: max_t / divisor,
        })
    }

    /// Returns the upper bound of the parameter domain.
    #[inline]
    pub fn max_t(&self) -> P::Scalar {
        self.max_t
    }

    /// Returns the number of sample segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Returns the parameter distance between two samples.
    #[inline]
    pub fn step(&self) -> P::Scalar {
        self.step
    }

    /// Returns the sample polyline.
    #[inline]
    pub fn polyline(&self) -> &Polyline<P> {
        &self.polyline
    }

    /// Returns the approximate length of the whole curve.
    #[inline]
    pub fn length(&self) -> P::Scalar {
        self.polyline.length()
    }

    /// Approximates the parameter `t` of the point `distance` along the curve.
    ///
    /// Distances at or beyond the length map to `max_t`, distances at or
    /// below zero to 0. NaN is treated like a distance below zero. The
    /// result is non-decreasing in `distance`.
    pub fn parameter_at(&self, distance: P::Scalar) -> P::Scalar {
        if distance >= self.polyline.length() {
            return self.max_t;
        }
        let zero = <P::Scalar as Zero>::zero();
        // Written to catch NaN as well.
        if !(distance > zero) {
            return zero;
        }

        let index = self.polyline.index_at(distance);
        let (station, delta) = self.station(index);
        let mut t = self.parameters[index];
        let min_delta = num_traits::cast::<_, P::Scalar>(MIN_SEGMENT_LENGTH).unwrap_or(zero);
        if delta > min_delta {
            t = t - self.step * (station - distance) / delta;
        }
        t.min(self.max_t)
    }

    /// Approximates the distance along the curve from the start to the point
    /// at parameter `t`.
    ///
    /// Parameters at or below zero map to 0, at or beyond `max_t` to the
    /// length. NaN is treated like a parameter below zero.
    pub fn distance_at(&self, t: P::Scalar) -> P::Scalar {
        let zero = <P::Scalar as Zero>::zero();
        if !(t > zero) {
            return zero;
        }
        if t >= self.max_t {
            return self.polyline.length();
        }

        // Rounding in `t / step` may land on the last sample.
        let index = (t / self.step)
            .floor()
            .to_usize()
            .map_or(self.segment_count, |i| i + 1)
            .min(self.segment_count);
        let (station, delta) = self.station(index);
        station - delta * (self.parameters[index] - t) / self.step
    }

    /// Returns the point `distance` along the sample polyline.
    ///
    /// # Errors
    ///
    /// [`ArcLengthError::OutOfRange`] if `distance` is outside
    /// `[0, length]`.
    pub fn point_at_distance(&self, distance: P::Scalar) -> Result<P> {
        self.polyline.point_at(distance)
    }

    /// Station of sample `index` and the length of the segment ending there.
    ///
    /// `index` never exceeds `segment_count`, and the polyline holds
    /// `segment_count + 1` samples.
    fn station(&self, index: usize) -> (P::Scalar, P::Scalar) {
        let distances = self.polyline.distances();
        let station = distances[index];
        match index {
            0 => (station, <P::Scalar as Zero>::zero()),
            _ => (station, station - distances[index - 1]),
        }
    }
}
