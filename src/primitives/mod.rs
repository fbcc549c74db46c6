//! Floating-point geometric primitives and operations.

mod point2;
mod point3;
mod vec2;
mod vec3;
mod vertex;

pub use point2::Point2;
pub use point3::Point3;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vertex::{is_close, Vertex, ABS_TOL};
