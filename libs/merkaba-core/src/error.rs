//! # Error Types
//!
//! Errors raised by the validated entry points ([`crate::try_align`],
//! [`crate::Session`]) and the WASM boundary. The pure geometry functions
//! never return errors: they degrade numerically instead.
//!
//! ## Error Policy
//!
//! - Preconditions are checked once, at the caller-facing boundary
//! - Errors carry the offending values for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when validating geometric input.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use merkaba_core::{try_align, GeometryError};
///
/// let p = DVec3::new(2.0, 0.0, 0.0);
/// assert_eq!(try_align(p, p, 2.0), Err(GeometryError::CoincidentPoints));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The sphere radius is zero, negative or not finite.
    #[error("Invalid sphere radius: {0}")]
    InvalidRadius(f64),

    /// The constraint-circle segment count is out of range.
    #[error("Invalid constraint-circle segment count: {0}")]
    InvalidSegments(u32),

    /// A point has NaN or infinite coordinates.
    #[error("Point '{label}' has non-finite coordinates")]
    NonFinitePoint {
        /// Which input was rejected
        label: &'static str,
    },

    /// A point that must lie on the sphere does not.
    #[error("Point '{label}' lies {distance} from the center, expected sphere radius {radius}")]
    OffSphere {
        /// Which input was rejected
        label: &'static str,
        /// Distance of the point from the origin
        distance: f64,
        /// Expected sphere radius
        radius: f64,
    },

    /// The two edge endpoints coincide, so no edge direction exists.
    #[error("Edge endpoints coincide")]
    CoincidentPoints,

    /// A click at the sphere center defines no surface direction.
    #[error("Click does not define a direction from the sphere center")]
    DegenerateClick,

    /// A flat coordinate buffer has the wrong length.
    #[error("Expected a buffer of {expected} values, got {actual}")]
    InvalidBuffer {
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}

impl From<ConfigError> for GeometryError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidRadius(radius) => GeometryError::InvalidRadius(radius),
            ConfigError::InvalidSegments(segments) => GeometryError::InvalidSegments(segments),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for validated geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let off = GeometryError::OffSphere {
            label: "point2",
            distance: 3.0,
            radius: 2.0,
        };
        assert!(off.to_string().contains("point2"));
        assert!(off.to_string().contains("radius 2"));

        let buffer = GeometryError::InvalidBuffer {
            expected: 3,
            actual: 2,
        };
        assert_eq!(buffer.to_string(), "Expected a buffer of 3 values, got 2");
    }

    #[test]
    fn test_config_error_conversion() {
        assert_eq!(
            GeometryError::from(ConfigError::InvalidRadius(-1.0)),
            GeometryError::InvalidRadius(-1.0)
        );
        assert_eq!(
            GeometryError::from(ConfigError::InvalidSegments(1)),
            GeometryError::InvalidSegments(1)
        );
    }

    /// Test error types are Send + Sync so hosts can move them across threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
