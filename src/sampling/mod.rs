//! Parameter sampling utilities.

mod linspace;

pub use linspace::{linspace, Linspace};
