//! Dividing a polyline into points at regular arc-length intervals.

use super::Polyline;
use crate::error::{ArcLengthError, Result};
use crate::primitives::Vertex;
use crate::sampling::{linspace, Linspace};
use num_traits::{Float, Zero};
use std::iter::FusedIterator;

impl<P: Vertex> Polyline<P> {
    /// Returns `count` points evenly spaced by arc length.
    ///
    /// The first point is the start vertex and the last one the end vertex.
    /// The iterator is lazy; call `divide` again for a fresh pass.
    ///
    /// # Errors
    ///
    /// - [`ArcLengthError::InvalidArgument`] if `count < 2`
    /// - [`ArcLengthError::InsufficientVertices`] for fewer than two vertices
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
    /// let points: Vec<_> = polyline
    ///     .divide(3)?
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(points[1], Point2::new(3.0, 0.5));
    /// # Ok::<(), arclen::ArcLengthError>(())
    /// ```
    pub fn divide(&self, count: usize) -> Result<Divide<'_, P>> {
        if count < 2 {
            return Err(ArcLengthError::invalid_argument(
                "count",
                format!("must be at least 2, got {count}"),
            ));
        }
        self.check_interpolable()?;

        Ok(Divide {
            polyline: self,
            distances: linspace(<P::Scalar as Zero>::zero(), self.length(), count),
        })
    }

    /// Returns points spaced `step_length` apart along the polyline,
    /// starting at the first vertex.
    ///
    /// Yields `floor(length / step_length) + 1` points. With `force_last`,
    /// the end vertex is appended when the stepping does not land on it.
    ///
    /// # Errors
    ///
    /// - [`ArcLengthError::InvalidArgument`] if `step_length <= 0`
    /// - [`ArcLengthError::InsufficientVertices`] for fewer than two vertices
    pub fn divide_by_length(
        &self,
        step_length: P::Scalar,
        force_last: bool,
    ) -> Result<DivideByLength<'_, P>> {
        if !(step_length > <P::Scalar as Zero>::zero()) {
            return Err(ArcLengthError::invalid_argument(
                "step_length",
                format!("must be positive, got {step_length:?}"),
            ));
        }
        self.check_interpolable()?;

        Ok(DivideByLength {
            polyline: self,
            step_length,
            next_step: 0,
            force_last,
            last_yielded: None,
            finished: false,
        })
    }
}

/// Iterator returned by [`Polyline::divide`].
#[derive(Debug, Clone)]
pub struct Divide<'a, P: Vertex> {
    polyline: &'a Polyline<P>,
    distances: Linspace<P::Scalar>,
}

impl<P: Vertex> Iterator for Divide<'_, P> {
    type Item = Result<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let distance = self.distances.next()?;
        Some(self.polyline.interpolate(distance))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.distances.size_hint()
    }
}

impl<P: Vertex> ExactSizeIterator for Divide<'_, P> {}

impl<P: Vertex> FusedIterator for Divide<'_, P> {}

/// Iterator returned by [`Polyline::divide_by_length`].
#[derive(Debug, Clone)]
pub struct DivideByLength<'a, P: Vertex> {
    polyline: &'a Polyline<P>,
    step_length: P::Scalar,
    next_step: usize,
    force_last: bool,
    last_yielded: Option<P>,
    finished: bool,
}

impl<P: Vertex> DivideByLength<'_, P> {
    fn trailing_vertex(&self) -> Option<P> {
        if !self.force_last {
            return None;
        }
        let end = *self.polyline.vertices.last()?;
        match self.last_yielded {
            Some(p) if p.is_close(end, self.polyline.relative_tolerance) => None,
            _ => Some(end),
        }
    }
}

impl<P: Vertex> Iterator for DivideByLength<'_, P> {
    type Item = Result<P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // Multiply instead of accumulating so the stations do not drift.
        let distance = num_traits::cast::<_, P::Scalar>(self.next_step)
            .map_or_else(<P::Scalar as Float>::infinity, |k| k * self.step_length);

        if distance <= self.polyline.length() {
            self.next_step += 1;
            let point = self.polyline.interpolate(distance);
            match point {
                Ok(p) => self.last_yielded = Some(p),
                Err(_) => self.finished = true,
            }
            return Some(point);
        }

        self.finished = true;
        self.trailing_vertex().map(Ok)
    }
}

impl<P: Vertex> FusedIterator for DivideByLength<'_, P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point2, Point3};
    use approx::assert_relative_eq;

    fn l_shape() -> Polyline<Point2<f64>> {
        Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ])
    }

    #[test]
    fn test_divide_l_shape() {
        let polyline = l_shape();
        let points: Vec<_> = polyline.divide(3).unwrap().map(|p| p.unwrap()).collect();
        assert_eq!(
            points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(3.0, 0.5),
                Point2::new(3.0, 4.0)
            ]
        );
    }

    #[test]
    fn test_divide_counts() {
        let polyline = l_shape();
        for n in 2..50 {
            let divide = polyline.divide(n).unwrap();
            assert_eq!(divide.len(), n);

            let points: Vec<_> = divide.collect::<Result<_>>().unwrap();
            assert_eq!(points.len(), n);
            assert_eq!(points[0], polyline[0]);
            assert!(points[n - 1].is_close(polyline[2], 1e-9));
        }
    }

    #[test]
    fn test_divide_is_restartable() {
        let polyline = l_shape();
        let first: Vec<_> = polyline.divide(8).unwrap().collect();
        let second: Vec<_> = polyline.divide(8).unwrap().collect();
        assert_eq!(first, second);

        let mut it = polyline.divide(2).unwrap();
        assert!(it.next().is_some());
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_divide_even_spacing() {
        let polyline = Polyline::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)]);
        let points: Vec<_> = polyline.divide(11).unwrap().collect::<Result<_>>().unwrap();
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(p.z, i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_divide_invalid() {
        let polyline = l_shape();
        assert!(matches!(
            polyline.divide(1),
            Err(ArcLengthError::InvalidArgument { name: "count", .. })
        ));
        assert!(polyline.divide(0).is_err());

        let single = Polyline::new(vec![Point2::new(0.0, 0.0)]);
        assert!(matches!(
            single.divide(4),
            Err(ArcLengthError::InsufficientVertices { .. })
        ));
    }

    #[test]
    fn test_divide_by_length() {
        let polyline = l_shape();
        let points: Vec<_> = polyline
            .divide_by_length(2.5, false)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.5, 0.0),
                Point2::new(3.0, 2.0)
            ]
        );
    }

    #[test]
    fn test_divide_by_length_force_last() {
        let polyline = l_shape();
        let points: Vec<_> = polyline
            .divide_by_length(2.5, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_divide_by_length_exact_fit() {
        // 7 / 3.5 lands exactly on the end vertex; no extra point.
        let polyline = l_shape();
        let points: Vec<_> = polyline
            .divide_by_length(3.5, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_divide_by_length_count() {
        let polyline = l_shape();
        for &(step, expected) in &[(1.0, 8), (2.0, 4), (3.0, 3), (6.9, 2), (7.0, 2), (100.0, 1)] {
            let count = polyline.divide_by_length(step, false).unwrap().count();
            assert_eq!(count, expected, "step {step}");
        }
    }

    #[test]
    fn test_divide_by_length_longer_than_polyline() {
        let polyline = l_shape();
        let points: Vec<_> = polyline
            .divide_by_length(10.0, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(points, vec![Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)]);
    }

    #[test]
    fn test_divide_by_length_invalid() {
        let polyline = l_shape();
        assert!(matches!(
            polyline.divide_by_length(0.0, false),
            Err(ArcLengthError::InvalidArgument {
                name: "step_length",
                ..
            })
        ));
        assert!(polyline.divide_by_length(-1.0, false).is_err());
        assert!(polyline.divide_by_length(f64::NAN, false).is_err());

        let empty: Polyline<Point2<f64>> = Polyline::new(vec![]);
        assert!(matches!(
            empty.divide_by_length(1.0, false),
            Err(ArcLengthError::InsufficientVertices { actual: 0, .. })
        ));
    }

    #[test]
    fn test_divide_by_length_zero_length() {
        let polyline = Polyline::new(vec![Point2::new(2.0, 2.0), Point2::new(2.0, 2.0)]);
        let points: Vec<_> = polyline
            .divide_by_length(1.0, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(points, vec![Point2::new(2.0, 2.0)]);
    }

    #[test]
    fn test_divide_trailing_duplicates() {
        let polyline = Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 0.0),
        ]);
        let points: Vec<_> = polyline.divide(3).unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[1].x, 2.0, epsilon = 1e-12);
        assert_eq!(points[2], Point2::new(4.0, 0.0));

        let points: Vec<_> = polyline
            .divide_by_length(1.5, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[1].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(points[2].x, 3.0, epsilon = 1e-12);
        assert_eq!(points[3], Point2::new(4.0, 0.0));
    }

    #[test]
    fn test_divide_f32() {
        let polyline: Polyline<Point2<f32>> = Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ]);
        let points: Vec<_> = polyline
            .divide_by_length(2.5, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[1].x, 2.5, epsilon = 1e-5);
        assert_relative_eq!(points[2].y, 2.0, epsilon = 1e-5);

        let points: Vec<_> = polyline.divide(3).unwrap().collect::<Result<_>>().unwrap();
        assert_relative_eq!(points[1].y, 0.5, epsilon = 1e-5);
        assert_eq!(points[2], Point2::new(3.0, 4.0));
    }
}
