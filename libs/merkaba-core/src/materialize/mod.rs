//! Vertex materialization and the full point-pair → vertices pipeline.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::alignment::align;
use crate::canonical::{CanonicalSolid, TETRA_EDGE_COUNT};
use crate::geographic::{to_geographic, GeoCoordinate};
use crate::rotation::RotationState;
use crate::{Orientation, Point3};

/// Places the canonical solid in the world: rotates each unit vertex by
/// `orientation` and scales it by `radius`. Index `i` of the result is
/// canonical vertex `i`.
///
/// # Examples
/// ```
/// use glam::DQuat;
/// use merkaba_core::{canonical::CANONICAL_VERTICES, materialize};
///
/// let vertices = materialize(DQuat::IDENTITY, 2.0);
/// assert_eq!(vertices[7], CANONICAL_VERTICES[7] * 2.0);
/// ```
pub fn materialize(orientation: Orientation, radius: f64) -> [Point3; 8] {
    let canonical = *CanonicalSolid::get().vertices();
    canonical.map(|vertex| (orientation * vertex) * radius)
}

/// Runs alignment, the user rotation and materialization in one step.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::{constraint::snap_to_circle, solve, RotationState};
///
/// let p1 = DVec3::new(0.0, 0.0, 1.0);
/// let p2 = snap_to_circle(p1, DVec3::X, 1.0);
/// let merkaba = solve(p1, p2, 1.0, RotationState::default());
/// assert!(merkaba.points()[0].abs_diff_eq(p1, 1e-9));
/// ```
pub fn solve(point1: Point3, point2: Point3, radius: f64, rotation: RotationState) -> MerkabaVertices {
    let orientation = rotation.apply(align(point1, point2, radius));
    trace!(?orientation, ?rotation, radius, "materializing merkaba");
    MerkabaVertices::new(materialize(orientation, radius))
}

/// The eight world-space vertices of a placed merkaba, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MerkabaVertices {
    points: [Point3; 8],
}

impl MerkabaVertices {
    /// Wraps materialized vertices.
    pub fn new(points: [Point3; 8]) -> Self {
        Self { points }
    }

    /// All eight vertices.
    pub fn points(&self) -> &[Point3; 8] {
        &self.points
    }

    /// The four vertices of the first tetrahedron.
    pub fn tetra1(&self) -> [Point3; 4] {
        CanonicalSolid::get().tetra1().map(|i| self.points[i])
    }

    /// The four vertices of the second tetrahedron.
    pub fn tetra2(&self) -> [Point3; 4] {
        CanonicalSolid::get().tetra2().map(|i| self.points[i])
    }

    /// Line segments for every edge of both tetrahedra.
    pub fn edge_segments(&self) -> [(Point3, Point3); 2 * TETRA_EDGE_COUNT] {
        CanonicalSolid::get()
            .edges()
            .map(|[a, b]| (self.points[a], self.points[b]))
    }

    /// Latitude/longitude of each vertex, in canonical order.
    pub fn geographic(&self, radius: f64) -> [GeoCoordinate; 8] {
        self.points.map(|vertex| to_geographic(vertex, radius))
    }
}
