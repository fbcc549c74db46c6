//! The immutable measured polyline.

use super::stations::{bracket_start, cumulative_distances, lower_bound};
use crate::error::{ArcLengthError, Result};
use crate::primitives::Vertex;
use num_traits::{Float, ToPrimitive, Zero};
use std::ops::{Bound, Index, RangeBounds};

/// Default relative tolerance for vertex comparisons.
pub const REL_TOL: f64 = 1e-9;

/// Construction options for a [`Polyline`].
#[derive(Debug, Clone, Copy)]
pub struct PolylineOptions<F> {
    /// Append the first vertex if the input is not already closed.
    pub close: bool,
    /// Relative tolerance for comparing vertices.
    pub relative_tolerance: F,
}

impl<F: Float> Default for PolylineOptions<F> {
    fn default() -> Self {
        Self {
            close: false,
            relative_tolerance: F::from(REL_TOL).unwrap_or_else(F::epsilon),
        }
    }
}

impl<F: Float> PolylineOptions<F> {
    /// Creates options with the specified relative tolerance.
    pub fn with_tolerance(relative_tolerance: F) -> Self {
        Self {
            relative_tolerance,
            ..Default::default()
        }
    }

    /// Sets whether the polyline is closed on construction.
    pub fn close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }
}

/// A polyline that can be measured, interpolated and divided by arc length.
///
/// Stores the vertices together with the station (distance from the start
/// along the polyline) of each vertex. Both are fixed at construction.
///
/// # Example
///
/// ```
/// use arclen::{Point2, Polyline};
///
/// let polyline = Polyline::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 4.0),
/// ]);
///
/// assert_eq!(polyline.length(), 7.0);
/// assert_eq!(polyline.point_at(5.0).unwrap(), Point2::new(3.0, 2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<P: Vertex> {
    pub(super) vertices: Vec<P>,
    pub(super) distances: Vec<P::Scalar>,
    pub(super) relative_tolerance: P::Scalar,
}

impl<P: Vertex> Polyline<P> {
    /// Creates an open polyline with the default tolerance.
    pub fn new<I: IntoIterator<Item = P>>(vertices: I) -> Self {
        Self::with_options(vertices, PolylineOptions::default())
    }

    /// Creates a closed polyline with the default tolerance.
    ///
    /// The first vertex is appended unless the input already ends on it.
    pub fn closed<I: IntoIterator<Item = P>>(vertices: I) -> Self {
        Self::with_options(vertices, PolylineOptions::default().close(true))
    }

    /// Creates a polyline with explicit options.
    ///
    /// Closing only applies to polylines with more than two vertices.
    pub fn with_options<I: IntoIterator<Item = P>>(
        vertices: I,
        options: PolylineOptions<P::Scalar>,
    ) -> Self {
        let mut vertices: Vec<P> = vertices.into_iter().collect();
        let tol = options.relative_tolerance;

        if options.close && vertices.len() > 2 {
            let first = vertices[0];
            let last = vertices[vertices.len() - 1];
            if !first.is_close(last, tol) {
                vertices.push(first);
            }
        }

        Self::from_vertices(vertices, tol)
    }

    fn from_vertices(vertices: Vec<P>, relative_tolerance: P::Scalar) -> Self {
        let distances = cumulative_distances(&vertices);
        Self {
            vertices,
            distances,
            relative_tolerance,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[P] {
        &self.vertices
    }

    /// Returns the station of every vertex.
    #[inline]
    pub fn distances(&self) -> &[P::Scalar] {
        &self.distances
    }

    /// Returns the relative tolerance used for vertex comparisons.
    #[inline]
    pub fn relative_tolerance(&self) -> P::Scalar {
        self.relative_tolerance
    }

    /// Returns an iterator over the vertices.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.vertices.iter()
    }

    /// Returns the overall length, zero for fewer than two vertices.
    #[inline]
    pub fn length(&self) -> P::Scalar {
        self.distances
            .last()
            .copied()
            .unwrap_or_else(<P::Scalar as Zero>::zero)
    }

    /// Returns `true` if the first and last vertex coincide.
    ///
    /// Polylines with two or fewer vertices are never closed.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(&first), Some(&last)) if self.vertices.len() > 2 => {
                first.is_close(last, self.relative_tolerance)
            }
            _ => false,
        }
    }

    /// Returns the vertex at `index`.
    pub fn at(&self, index: usize) -> Result<P> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(ArcLengthError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Returns a new polyline over a sub-range of the vertices.
    ///
    /// Stations are recomputed from the first vertex of the slice. The slice
    /// keeps the tolerance but is never closed.
    ///
    /// # Example
    ///
    /// ```
    /// use arclen::{Point2, Polyline};
    ///
    /// let polyline = Polyline::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(3.0, 0.0),
    ///     Point2::new(3.0, 4.0),
    /// ]);
    ///
    /// let tail = polyline.slice(1..).unwrap();
    /// assert_eq!(tail.len(), 2);
    /// assert_eq!(tail.length(), 4.0);
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Self> {
        let len = self.vertices.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        if end > len {
            return Err(ArcLengthError::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Err(ArcLengthError::IndexOutOfRange { index: start, len });
        }

        Ok(Self::from_vertices(
            self.vertices[start..end].to_vec(),
            self.relative_tolerance,
        ))
    }

    /// Returns `(station, distance from previous vertex, vertex)` for `index`.
    ///
    /// The first vertex reports `(0, 0, vertex)`.
    pub fn station_info(&self, index: usize) -> Result<(P::Scalar, P::Scalar, P)> {
        if self.vertices.is_empty() {
            return Err(ArcLengthError::EmptyPolyline);
        }
        let vertex = self.at(index)?;
        if index == 0 {
            let zero = <P::Scalar as Zero>::zero();
            return Ok((zero, zero, vertex));
        }
        let station = self.distances[index];
        Ok((station, station - self.distances[index - 1], vertex))
    }

    /// Returns the index of the first vertex whose station is not less than
    /// `distance`.
    ///
    /// Distances at or below zero map to 0; distances at or beyond the
    /// length map to the last index (0 for an empty polyline).
    pub fn index_at(&self, distance: P::Scalar) -> usize {
        if distance <= <P::Scalar as Zero>::zero() {
            return 0;
        }
        if distance >= self.length() {
            return self.vertices.len().saturating_sub(1);
        }
        lower_bound(&self.distances, distance)
    }

    /// Returns the point at `distance` along the polyline.
    ///
    /// # Errors
    ///
    /// - [`ArcLengthError::OutOfRange`] if `distance` is outside `[0, length]`
    /// - [`ArcLengthError::InsufficientVertices`] for fewer than two vertices
    pub fn point_at(&self, distance: P::Scalar) -> Result<P> {
        self.check_distance(distance)?;
        self.check_interpolable()?;
        self.interpolate(distance)
    }

    /// Interpolates without validating `distance` or the vertex count.
    pub(crate) fn interpolate(&self, distance: P::Scalar) -> Result<P> {
        let last = self.vertices.len() - 1;
        let index1 = lower_bound(&self.distances, distance).min(last);
        if index1 == 0 {
            return Ok(self.vertices[0]);
        }

        let index0 = bracket_start(&self.distances, index1)?;
        let d0 = self.distances[index0];
        let d1 = self.distances[index1];
        let factor = (distance - d0) / (d1 - d0);
        Ok(self.vertices[index0].lerp(self.vertices[index1], factor))
    }

    pub(crate) fn check_interpolable(&self) -> Result<()> {
        if self.vertices.len() < 2 {
            return Err(ArcLengthError::InsufficientVertices {
                required: 2,
                actual: self.vertices.len(),
            });
        }
        Ok(())
    }

    fn check_distance(&self, distance: P::Scalar) -> Result<()> {
        let length = self.length();
        // Written to reject NaN as well.
        if !(distance >= <P::Scalar as Zero>::zero() && distance <= length) {
            return Err(ArcLengthError::OutOfRange {
                value: distance.to_f64().unwrap_or(f64::NAN),
                min: 0.0,
                max: length.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

impl<P: Vertex> Index<usize> for Polyline<P> {
    type Output = P;

    #[inline]
    fn index(&self, index: usize) -> &P {
        &self.vertices[index]
    }
}

impl<'a, P: Vertex> IntoIterator for &'a Polyline<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<P: Vertex> FromIterator<P> for Polyline<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
