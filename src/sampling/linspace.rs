//! Uniform sampling of a closed interval.
//!
//! # Example
//!
//! ```
//! use arclen::sampling::linspace;
//!
//! let values: Vec<f64> = linspace(0.0, 1.0, 5).collect();
//! assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```

use num_traits::Float;

/// Returns `count` evenly spaced values over `[start, stop]`, both ends
/// included.
///
/// A `count` of 0 yields nothing and a `count` of 1 yields only `start`.
/// The last value is always exactly `stop`, so it never drifts past the end
/// of the interval through accumulated rounding.
pub fn linspace<F: Float>(start: F, stop: F, count: usize) -> Linspace<F> {
    let delta = if count > 1 {
        (stop - start) / F::from(count - 1).unwrap_or_else(F::one)
    } else {
        F::zero()
    };
    Linspace {
        start,
        stop,
        delta,
        count,
        front: 0,
    }
}

/// Iterator returned by [`linspace`].
#[derive(Debug, Clone)]
pub struct Linspace<F> {
    start: F,
    stop: F,
    delta: F,
    count: usize,
    front: usize,
}

impl<F: Float> Linspace<F> {
    fn value(&self, index: usize) -> F {
        if index > 0 && index + 1 == self.count {
            return self.stop;
        }
        match F::from(index) {
            Some(i) => self.start + self.delta * i,
            None => self.stop,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.front >= self.count {
            return None;
        }
        let value = self.value(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.front;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

impl<F: Float> std::iter::FusedIterator for Linspace<F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_inclusive() {
        let values: Vec<f64> = linspace(0.0, 7.0, 3).collect();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], 0.0);
        assert_relative_eq!(values[1], 3.5, epsilon = 1e-12);
        assert_eq!(values[2], 7.0);
    }

    #[test]
    fn test_linspace_last_is_exact() {
        // 0.1 is not representable; the last value must still hit `stop`.
        let values: Vec<f64> = linspace(0.0, 0.1 * 3.0, 7).collect();
        assert_eq!(*values.last().unwrap(), 0.1 * 3.0);
    }

    #[test]
    fn test_linspace_small_counts() {
        assert_eq!(linspace(1.0_f64, 2.0, 0).count(), 0);
        let single: Vec<f64> = linspace(1.0, 2.0, 1).collect();
        assert_eq!(single, vec![1.0]);
    }

    #[test]
    fn test_linspace_exact_size() {
        let mut it = linspace(0.0_f64, 1.0, 11);
        assert_eq!(it.len(), 11);
        it.next();
        assert_eq!(it.len(), 10);
    }

    #[test]
    fn test_linspace_degenerate_interval() {
        let values: Vec<f64> = linspace(2.0, 2.0, 4).collect();
        assert_eq!(values, vec![2.0; 4]);
    }
}
