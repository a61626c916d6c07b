//! Alignment solver: maps the canonical solid onto an edge through two
//! surface points.
//!
//! Two constraints fix the orientation. The shortest-arc rotation makes the
//! canonical reference edge parallel to the target edge, then a roll about
//! that edge brings the canonical first vertex into the half-plane of
//! `point1`. Because both chords have the same length relative to their
//! spheres, this lands both endpoints exactly.

use config::constants::{approx_zero, ON_SPHERE_TOLERANCE, ROLL_DEGENERACY_EPSILON};
use glam::{DQuat, DVec3};
use tracing::debug;

use crate::canonical::CanonicalSolid;
use crate::error::{GeometryError, GeometryResult};
use crate::{Orientation, Point3};

// =============================================================================
// ALIGNMENT
// =============================================================================

/// Computes the orientation placing the canonical reference edge on
/// `point1 → point2`.
///
/// Preconditions are not checked: equal points propagate NaN. Use
/// [`try_align`] at an input boundary.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::{align, constraint::snap_to_circle, materialize};
///
/// let radius = 2.0;
/// let p1 = DVec3::new(2.0, 0.0, 0.0);
/// let p2 = snap_to_circle(p1, DVec3::new(0.0, 2.0, 0.0), radius);
/// let vertices = materialize(align(p1, p2, radius), radius);
/// assert!(vertices[0].abs_diff_eq(p1, 1e-9));
/// assert!(vertices[3].abs_diff_eq(p2, 1e-9));
/// ```
pub fn align(point1: Point3, point2: Point3, radius: f64) -> Orientation {
    let (canonical_p1, canonical_p2) = CanonicalSolid::get().reference_edge();

    let target_edge = (point2 - point1).normalize();
    let canonical_edge = (canonical_p2 - canonical_p1).normalize();
    let q_align_edge = DQuat::from_rotation_arc(canonical_edge, target_edge);

    let temp_canonical_p1 = q_align_edge * canonical_p1;
    let q_roll = roll_correction(temp_canonical_p1, point1, target_edge).unwrap_or_else(|| {
        debug!(
            radius,
            point1 = ?point1,
            point2 = ?point2,
            "roll correction skipped: reference vertex collinear with edge"
        );
        DQuat::IDENTITY
    });

    q_roll * q_align_edge
}

/// Rotation about `axis` carrying `current` into the half-plane of `target`.
///
/// Returns `None` when either projection onto the plane orthogonal to
/// `axis` is too short to define a direction.
fn roll_correction(current: DVec3, target: DVec3, axis: DVec3) -> Option<DQuat> {
    let projected_target = target.normalize().reject_from_normalized(axis);
    let projected_current = current.normalize().reject_from_normalized(axis);

    if projected_target.length_squared() < ROLL_DEGENERACY_EPSILON
        || projected_current.length_squared() < ROLL_DEGENERACY_EPSILON
    {
        return None;
    }

    let mut angle = projected_current.angle_between(projected_target);
    if projected_current.cross(projected_target).dot(axis) < 0.0 {
        angle = -angle;
    }
    Some(DQuat::from_axis_angle(axis, angle))
}

// =============================================================================
// VALIDATED ENTRY POINT
// =============================================================================

/// Validates the alignment preconditions, then delegates to [`align`].
///
/// Both points must be finite, lie on the sphere within
/// `ON_SPHERE_TOLERANCE * radius`, and be distinct. Edge length is not
/// checked: any two distinct points produce an orientation, but only points
/// on each other's constraint circle are reproduced exactly.
///
/// # Errors
/// Returns the first violated precondition as a [`GeometryError`].
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::{try_align, GeometryError};
///
/// let p1 = DVec3::new(2.0, 0.0, 0.0);
/// let inside = DVec3::new(0.0, 1.0, 0.0);
/// assert!(matches!(
///     try_align(p1, inside, 2.0),
///     Err(GeometryError::OffSphere { label: "point2", .. })
/// ));
/// ```
pub fn try_align(point1: Point3, point2: Point3, radius: f64) -> GeometryResult<Orientation> {
    ensure_radius(radius)?;
    ensure_on_sphere("point1", point1, radius)?;
    ensure_on_sphere("point2", point2, radius)?;
    if approx_zero(point1.distance(point2) / radius) {
        return Err(GeometryError::CoincidentPoints);
    }
    Ok(align(point1, point2, radius))
}

/// Checks that `radius` is positive and finite.
///
/// # Errors
/// Returns [`GeometryError::InvalidRadius`] otherwise.
pub fn ensure_radius(radius: f64) -> GeometryResult<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius(radius))
    }
}

fn ensure_on_sphere(label: &'static str, point: DVec3, radius: f64) -> GeometryResult<()> {
    if !point.is_finite() {
        return Err(GeometryError::NonFinitePoint { label });
    }
    let distance = point.length();
    if (distance - radius).abs() > ON_SPHERE_TOLERANCE * radius {
        return Err(GeometryError::OffSphere {
            label,
            distance,
            radius,
        });
    }
    Ok(())
}
