//! Centralized configuration values shared across the merkaba alignment core.
//!
//! Each public item in this module documents its purpose and, where useful,
//! provides a minimal usage example so that downstream crates can remain
//! declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Squared-length threshold below which the roll correction of the
/// alignment solver is skipped.
///
/// Applies to the projections of `point1` and the edge-aligned canonical
/// vertex onto the plane orthogonal to the target edge.
pub const ROLL_DEGENERACY_EPSILON: f64 = 1e-8;

/// Squared-length threshold below which a snapped click has no usable
/// direction on the constraint circle plane and the fallback axis is used.
pub const SNAP_DEGENERACY_EPSILON: f64 = 1e-8;

/// Relative tolerance used by validated entry points to accept a point as
/// lying on the sphere.
///
/// A point `p` is on a sphere of radius `r` when
/// `|p.length() - r| <= ON_SPHERE_TOLERANCE * r`.
pub const ON_SPHERE_TOLERANCE: f64 = 1e-6;

// =============================================================================
// SPHERE CONSTANTS
// =============================================================================

/// Radius of the globe used when the caller does not supply one.
pub const DEFAULT_SPHERE_RADIUS: f64 = 5.0;

/// Cosine of the angle subtended at the sphere center by one tetrahedron
/// edge of the inscribed solid.
pub const EDGE_ANGLE_COSINE: f64 = -1.0 / 3.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of segments in the constraint-circle polyline.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 64;

/// Minimum number of constraint-circle segments (a triangle).
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;

/// Safety limit on constraint-circle segments.
pub const MAX_CIRCLE_SEGMENTS: u32 = 4096;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Angular radius of the constraint circle, `arccos(-1/3)` (~109.47°).
///
/// # Example
///
/// ```rust
/// use config::constants::edge_angular_radius;
///
/// assert!((edge_angular_radius().to_degrees() - 109.4712).abs() < 1e-4);
/// ```
#[inline]
pub fn edge_angular_radius() -> f64 {
    EDGE_ANGLE_COSINE.acos()
}

/// Fixed tetrahedron edge length of a solid inscribed in a sphere of
/// `radius`: `radius * sqrt(8/3)`.
///
/// # Example
///
/// ```rust
/// use config::constants::edge_length;
///
/// assert!((edge_length(3.0) - 3.0 * (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
/// ```
#[inline]
pub fn edge_length(radius: f64) -> f64 {
    radius * (8.0f64 / 3.0).sqrt()
}

/// Clamps a requested segment count to `MIN_CIRCLE_SEGMENTS..=MAX_CIRCLE_SEGMENTS`.
#[inline]
pub fn clamp_circle_segments(segments: u32) -> u32 {
    segments.clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// Callers compare lengths relative to the sphere radius, so the check is
/// scale-independent.
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Validated runtime configuration for an interactive session.
///
/// # Examples
/// ```
/// use config::constants::{GlobalConfig, DEFAULT_CIRCLE_SEGMENTS};
/// let cfg = GlobalConfig::default();
/// assert_eq!(cfg.circle_segments, DEFAULT_CIRCLE_SEGMENTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Radius of the globe the solid is inscribed in.
    pub radius: f64,
    /// Segment count of the constraint-circle polyline.
    pub circle_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// radius and segment count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(2.0, 32).expect("valid config");
    /// assert_eq!(cfg.circle_segments, 32);
    /// ```
    pub fn new(radius: f64, circle_segments: u32) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !(MIN_CIRCLE_SEGMENTS..=MAX_CIRCLE_SEGMENTS).contains(&circle_segments) {
            return Err(ConfigError::InvalidSegments(circle_segments));
        }
        Ok(Self {
            radius,
            circle_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SPHERE_RADIUS,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

/// Errors raised by [`GlobalConfig::new`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the radius is zero, negative or not finite.
    InvalidRadius(f64),
    /// Raised when the segment count is outside the supported range.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be positive and finite: {value}")
            }
            ConfigError::InvalidSegments(value) => write!(
                f,
                "circle_segments must be in {MIN_CIRCLE_SEGMENTS}..={MAX_CIRCLE_SEGMENTS}: {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
