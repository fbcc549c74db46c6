//! Polylines measured by arc length.
//!
//! A [`Polyline`] keeps, next to its vertices, the station of every vertex:
//! the distance from the first vertex measured along the path. Queries by
//! distance use a lower-bound binary search over the stations to find the
//! bracketing segment and interpolate linearly inside it.
//!
//! # Example
//!
//! ```
//! use arclen::{Point2, Polyline};
//!
//! let polyline = Polyline::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(3.0, 0.0),
//!     Point2::new(3.0, 4.0),
//! ]);
//!
//! // Points 2.5 units apart, plus the end vertex.
//! let points: Vec<_> = polyline
//!     .divide_by_length(2.5, true)?
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[3], Point2::new(3.0, 4.0));
//! # Ok::<(), arclen::ArcLengthError>(())
//! ```

mod core;
mod divide;
mod stations;

pub use self::core::{Polyline, PolylineOptions, REL_TOL};
pub use divide::{Divide, DivideByLength};
