//! Caller-owned interaction state for the two-click selection cycle.
//!
//! The geometry functions are stateless. `Session` is a plain value the UI
//! layer owns and mutates in response to clicks and slider changes; it
//! calls back into the pure functions to produce each frame.
//!
//! ## Selection cycle
//!
//! ```text
//! Empty ──click──▶ First(p1) ──click──▶ Complete(p1, snap(p2)) ──click──▶ First(p1')
//! ```
//!
//! Starting a new first point resets the rotation sliders.

use config::constants::{approx_zero, GlobalConfig, DEFAULT_CIRCLE_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::constraint::{constraint_circle_with_segments, snap_to_circle};
use crate::error::{GeometryError, GeometryResult};
use crate::geographic::GeoCoordinate;
use crate::materialize::{solve, MerkabaVertices};
use crate::rotation::RotationState;

/// The user's edge selection on the sphere surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum EdgeSelection {
    /// Nothing chosen yet.
    #[default]
    Empty,
    /// Only the first point is chosen.
    First(DVec3),
    /// Both points chosen; the second lies on the first's constraint circle.
    Complete(DVec3, DVec3),
}

impl EdgeSelection {
    /// The first point, if chosen.
    pub fn point1(&self) -> Option<DVec3> {
        match *self {
            EdgeSelection::Empty => None,
            EdgeSelection::First(p1) | EdgeSelection::Complete(p1, _) => Some(p1),
        }
    }

    /// The second point, if chosen.
    pub fn point2(&self) -> Option<DVec3> {
        match *self {
            EdgeSelection::Complete(_, p2) => Some(p2),
            _ => None,
        }
    }
}

/// What the renderer should draw for the current session state.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// No point chosen: draw the bare globe.
    Idle,
    /// One point chosen: draw the constraint-circle polyline.
    Locus(Vec<DVec3>),
    /// Both points chosen: draw the solid and list its coordinates.
    Solid {
        /// The placed vertices.
        vertices: MerkabaVertices,
        /// Latitude/longitude of each vertex, in canonical order.
        coordinates: [GeoCoordinate; 8],
    },
}

/// Interaction state for one globe view.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::{Frame, Session};
///
/// let mut session = Session::new(2.0).unwrap();
/// session.click(DVec3::new(2.0, 0.0, 0.0)).unwrap();
/// assert!(matches!(session.frame(), Frame::Locus(_)));
/// session.click(DVec3::new(0.0, 2.0, 0.0)).unwrap();
/// assert!(matches!(session.frame(), Frame::Solid { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    radius: f64,
    circle_segments: u32,
    selection: EdgeSelection,
    rotation: RotationState,
}

impl Session {
    /// Creates a session on a sphere of `radius` with the default circle
    /// resolution.
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidRadius`] for a non-positive or
    /// non-finite radius.
    pub fn new(radius: f64) -> GeometryResult<Self> {
        Ok(Self::from_config(GlobalConfig::new(radius, DEFAULT_CIRCLE_SEGMENTS)?))
    }

    /// Creates a session from an already validated configuration.
    pub fn from_config(config: GlobalConfig) -> Self {
        Self {
            radius: config.radius,
            circle_segments: config.circle_segments,
            selection: EdgeSelection::Empty,
            rotation: RotationState::default(),
        }
    }

    /// Changes the constraint-circle resolution.
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidSegments`] when out of range.
    pub fn with_circle_segments(mut self, circle_segments: u32) -> GeometryResult<Self> {
        let config = GlobalConfig::new(self.radius, circle_segments)?;
        self.circle_segments = config.circle_segments;
        Ok(self)
    }

    /// Sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Constraint-circle segment count.
    pub fn circle_segments(&self) -> u32 {
        self.circle_segments
    }

    /// Current edge selection.
    pub fn selection(&self) -> EdgeSelection {
        self.selection
    }

    /// Current rotation angles.
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Advances the selection cycle with a clicked point.
    ///
    /// The click is projected radially onto the sphere. A second click is
    /// snapped onto the first point's constraint circle; a click after a
    /// complete selection starts over and resets the rotation.
    ///
    /// # Errors
    /// Rejects non-finite clicks and clicks at the sphere center; the
    /// session is left unchanged.
    pub fn click(&mut self, raw: DVec3) -> GeometryResult<()> {
        if !raw.is_finite() {
            warn!(?raw, "rejected non-finite click");
            return Err(GeometryError::NonFinitePoint { label: "click" });
        }
        if approx_zero(raw.length() / self.radius) {
            warn!(?raw, "rejected click at sphere center");
            return Err(GeometryError::DegenerateClick);
        }

        let surface = raw.normalize() * self.radius;
        self.selection = match self.selection {
            EdgeSelection::Empty | EdgeSelection::Complete(..) => {
                self.rotation.reset();
                EdgeSelection::First(surface)
            }
            EdgeSelection::First(p1) => {
                EdgeSelection::Complete(p1, snap_to_circle(p1, surface, self.radius))
            }
        };
        trace!(selection = ?self.selection, "selection updated");
        Ok(())
    }

    /// Sets the rotation angles. They persist until a new first point is
    /// chosen.
    pub fn set_rotation(&mut self, rotation_y: f64, rotation_x: f64) {
        self.rotation = RotationState::new(rotation_y, rotation_x);
    }

    /// Clears the selection and the rotation.
    pub fn reset(&mut self) {
        self.selection = EdgeSelection::Empty;
        self.rotation.reset();
    }

    /// Computes what to draw for the current state.
    pub fn frame(&self) -> Frame {
        match self.selection {
            EdgeSelection::Empty => Frame::Idle,
            EdgeSelection::First(p1) => Frame::Locus(constraint_circle_with_segments(
                p1,
                self.radius,
                self.circle_segments,
            )),
            EdgeSelection::Complete(p1, p2) => {
                let vertices = solve(p1, p2, self.radius, self.rotation);
                Frame::Solid {
                    coordinates: vertices.geographic(self.radius),
                    vertices,
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(GlobalConfig::default())
    }
}

#[cfg(test)]
mod tests;
