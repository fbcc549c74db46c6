//! arclen - Arc-length parameterization for polylines and curves
//!
//! Answers two dual questions about a path: which point lies at distance `d`
//! along it, and, for a parametrized curve over `[0, max_t]`, which parameter
//! `t` corresponds to distance `d` and vice versa.
//!
//! Curves are not measured exactly. They are sampled into a [`Polyline`],
//! trading exactness for a bounded sampling error that shrinks as the sample
//! count grows.
//!
//! # Example
//!
//! ```
//! use arclen::curves::{Arc2, ApproximatorOptions, CurveParameterApproximator};
//! use arclen::Point2;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let arc = Arc2::new(Point2::new(0.0, 0.0), 1.0, 0.0, FRAC_PI_2);
//! let approx = CurveParameterApproximator::with_options(
//!     &arc,
//!     ApproximatorOptions::with_segments(64),
//! )?;
//!
//! assert!((approx.length() - FRAC_PI_2).abs() < 1e-3);
//! let t = approx.parameter_at(approx.length() / 2.0);
//! assert!((t - 0.5).abs() < 1e-9);
//! # Ok::<(), arclen::ArcLengthError>(())
//! ```

pub mod curves;
pub mod error;
pub mod polyline;
pub mod primitives;
pub mod sampling;

pub use curves::{CurveParameterApproximator, PointAt};
pub use error::ArcLengthError;
pub use polyline::{Polyline, PolylineOptions};
pub use primitives::{Point2, Point3, Vec2, Vec3, Vertex};
