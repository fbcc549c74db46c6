//! Station table construction and lookup.
//!
//! A station is the cumulative distance along the polyline from its first
//! vertex. The table is non-decreasing, which is what makes the lower-bound
//! search in [`lower_bound`] valid.

use crate::error::{ArcLengthError, Result};
use crate::primitives::Vertex;
use num_traits::{Float, Zero};

/// Computes the station of every vertex.
///
/// The first station is always zero; each following one adds the distance
/// to its predecessor. The result has the same length as `vertices`.
pub(crate) fn cumulative_distances<P: Vertex>(vertices: &[P]) -> Vec<P::Scalar> {
    let mut distances = Vec::with_capacity(vertices.len());
    let mut station = <P::Scalar as Zero>::zero();
    let mut prev: Option<P> = None;

    for &vertex in vertices {
        if let Some(prev) = prev {
            station = station + prev.distance(vertex);
        }
        distances.push(station);
        prev = Some(vertex);
    }

    distances
}

/// Returns the index of the first station not less than `key`.
///
/// Returns `distances.len()` if every station is less than `key`.
#[inline]
pub(crate) fn lower_bound<F: Float>(distances: &[F], key: F) -> usize {
    distances.partition_point(|&d| d < key)
}

/// Finds the lower end of the interpolation bracket ending at `index1`.
///
/// Walks backward over zero-length segments left by coincident vertices.
/// The walk is bounded by the run of duplicates, so it is O(1) for typical
/// input and O(n) only when most vertices coincide.
pub(crate) fn bracket_start<F: Float>(distances: &[F], index1: usize) -> Result<usize> {
    let d1 = distances[index1];
    let mut index0 = index1 - 1;

    if distances[index0] == d1 {
        log::debug!("skipping coincident vertices before vertex {index1}");
        while index0 > 0 && distances[index0] == d1 {
            index0 -= 1;
        }
    }

    if distances[index0] == d1 {
        log::error!("zero-length bracket ending at vertex {index1}; station table is corrupt");
        return Err(ArcLengthError::InternalInconsistency { index: index1 });
    }
    Ok(index0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point2, Point3};
    use approx::assert_relative_eq;

    #[test]
    fn test_distances_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(cumulative_distances(&points).is_empty());
    }

    #[test]
    fn test_distances_single() {
        let points = vec![Point2::new(5.0, 5.0)];
        assert_eq!(cumulative_distances(&points), vec![0.0]);
    }

    #[test]
    fn test_distances_l_shape() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ];
        assert_eq!(cumulative_distances(&points), vec![0.0, 3.0, 7.0]);
    }

    #[test]
    fn test_distances_3d() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 3.0, 6.0),
            Point3::new(2.0, 3.0, 6.0),
        ];
        let d = cumulative_distances(&points);
        assert_relative_eq!(d[1], 7.0, epsilon = 1e-12);
        assert_eq!(d[1], d[2]);
    }

    #[test]
    fn test_lower_bound() {
        let d = [0.0, 1.0, 1.0, 2.0];
        assert_eq!(lower_bound(&d, -1.0), 0);
        assert_eq!(lower_bound(&d, 0.0), 0);
        assert_eq!(lower_bound(&d, 0.5), 1);
        // First of the equal run
        assert_eq!(lower_bound(&d, 1.0), 1);
        assert_eq!(lower_bound(&d, 1.5), 3);
        assert_eq!(lower_bound(&d, 2.5), 4);
    }

    #[test]
    fn test_bracket_start_regular() {
        let d = [0.0, 1.0, 2.0];
        assert_eq!(bracket_start(&d, 2).unwrap(), 1);
    }

    #[test]
    fn test_bracket_start_skips_duplicates() {
        let d = [0.0, 1.0, 3.0, 3.0, 3.0];
        assert_eq!(bracket_start(&d, 4).unwrap(), 1);
    }

    #[test]
    fn test_bracket_start_all_coincident() {
        let d = [0.0, 0.0, 0.0];
        assert_eq!(
            bracket_start(&d, 2),
            Err(ArcLengthError::InternalInconsistency { index: 2 })
        );
    }
}
