//! Parametrized curves and their arc-length parameterization.

mod arc;
mod bezier;
mod param;
mod traits;

pub use arc::Arc2;
pub use bezier::{CubicBezier2, QuadraticBezier2};
pub use param::{ApproximatorOptions, CurveParameterApproximator};
pub use traits::PointAt;
