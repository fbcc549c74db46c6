//! Error types for arc-length operations.

use thiserror::Error;

/// Errors that can occur while measuring, interpolating or dividing a path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArcLengthError {
    /// A caller-supplied parameter is structurally invalid.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A distance query lies outside the measured range of the path.
    #[error("distance {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// The queried distance.
        value: f64,
        /// Lower bound of the valid range.
        min: f64,
        /// Upper bound of the valid range.
        max: f64,
    },

    /// A vertex index lies outside `[0, len)`.
    #[error("index {index} out of range for polyline with {len} vertices")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of vertices in the polyline.
        len: usize,
    },

    /// Interpolation needs more vertices than the polyline has.
    #[error("not enough vertices for interpolation: need {required}, have {actual}")]
    InsufficientVertices {
        /// Minimum number of vertices.
        required: usize,
        /// Number of vertices present.
        actual: usize,
    },

    /// A station query was made on a polyline without vertices.
    #[error("empty polyline")]
    EmptyPolyline,

    /// A zero-length bracket survived the degenerate-segment skip.
    ///
    /// Only a corrupted distance table can produce this.
    #[error("internal interpolation error: zero-length bracket ending at vertex {index}")]
    InternalInconsistency {
        /// Upper vertex index of the bracket.
        index: usize,
    },
}

impl ArcLengthError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArcLengthError>;
