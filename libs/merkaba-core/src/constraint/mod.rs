//! Constraint-circle solver: where the second point may go.
//!
//! With `point1` fixed, every valid `point2` sits at the solid's edge length
//! from it, which on the sphere is the small circle of angular radius
//! `arccos(-1/3)` around `point1`.

use std::f64::consts::TAU;

use config::constants::{
    clamp_circle_segments, edge_angular_radius, edge_length, DEFAULT_CIRCLE_SEGMENTS,
    SNAP_DEGENERACY_EPSILON,
};
use glam::{DQuat, DVec3};
use tracing::debug;

use crate::Point3;

// =============================================================================
// LOCUS
// =============================================================================

/// Closed polyline of valid second points around `point1`, with
/// `DEFAULT_CIRCLE_SEGMENTS` segments.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::constraint::constraint_circle;
///
/// let circle = constraint_circle(DVec3::new(0.0, 0.0, 2.0), 2.0);
/// assert_eq!(circle.len(), 65);
/// assert_eq!(circle.first(), circle.last());
/// ```
pub fn constraint_circle(point1: Point3, radius: f64) -> Vec<Point3> {
    constraint_circle_with_segments(point1, radius, DEFAULT_CIRCLE_SEGMENTS)
}

/// Closed polyline of valid second points with an explicit segment count.
///
/// The count is clamped to the configured range. The result holds
/// `segments + 1` points; the last is a copy of the first.
pub fn constraint_circle_with_segments(point1: Point3, radius: f64, segments: u32) -> Vec<Point3> {
    let segments = clamp_circle_segments(segments);
    let (sin_a, cos_a) = edge_angular_radius().sin_cos();
    let pole_to_point1 = DQuat::from_rotation_arc(DVec3::Y, point1.normalize());

    let mut points: Vec<DVec3> = (0..segments)
        .map(|i| {
            let theta = TAU * f64::from(i) / f64::from(segments);
            let (sin_t, cos_t) = theta.sin_cos();
            let around_pole = DVec3::new(sin_a * cos_t, cos_a, sin_a * sin_t);
            (pole_to_point1 * around_pole) * radius
        })
        .collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

// =============================================================================
// SNAPPING
// =============================================================================

/// Snaps an arbitrary click to the angularly closest valid second point.
///
/// Works analytically on the circle rather than the polyline. A click
/// straight above `point1` or its antipode has no preferred direction; a
/// fixed world axis is used instead, so the result is always defined.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::constraint::snap_to_circle;
///
/// let p1 = DVec3::new(2.0, 0.0, 0.0);
/// let snapped = snap_to_circle(p1, DVec3::new(0.0, 2.0, 0.0), 2.0);
/// assert!((snapped.distance(p1) - 2.0 * (8.0f64 / 3.0).sqrt()).abs() < 1e-9);
/// assert!(snapped.y > 0.0);
/// ```
pub fn snap_to_circle(point1: Point3, clicked: Point3, radius: f64) -> Point3 {
    let axis = point1.normalize();
    let (sin_a, cos_a) = edge_angular_radius().sin_cos();
    let circle_center = axis * (radius * cos_a);
    let circle_radius = radius * sin_a;

    let projected = (clicked - circle_center).reject_from_normalized(axis);
    let direction = if projected.length_squared() < SNAP_DEGENERACY_EPSILON {
        let fallback = fallback_direction(axis);
        debug!(?clicked, ?fallback, "snap click on circle axis, using fallback direction");
        fallback
    } else {
        projected.normalize()
    };

    (circle_center + direction * circle_radius).normalize() * radius
}

/// Deterministic in-plane direction: the world axis least aligned with
/// `axis`, crossed with `axis`. Ties go to X, then Y.
fn fallback_direction(axis: DVec3) -> DVec3 {
    let a = axis.abs();
    let world = if a.x <= a.y && a.x <= a.z {
        DVec3::X
    } else if a.y <= a.z {
        DVec3::Y
    } else {
        DVec3::Z
    };
    world.cross(axis).normalize()
}

/// Returns `true` if `candidate` is at the solid's edge length from
/// `point1`, within `tolerance`.
pub fn is_on_circle(point1: Point3, candidate: Point3, radius: f64, tolerance: f64) -> bool {
    (point1.distance(candidate) - edge_length(radius)).abs() <= tolerance
}

#[cfg(test)]
mod tests;
