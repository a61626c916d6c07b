//! Constraint-circle tests.

use super::*;
use approx::assert_abs_diff_eq;
use config::constants::{edge_length, MAX_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS};

fn sample_points(radius: f64) -> Vec<DVec3> {
    [
        DVec3::X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::new(0.3, -0.4, 0.87),
        DVec3::new(-1.0, -1.0, 0.2),
    ]
    .into_iter()
    .map(|d| d.normalize() * radius)
    .collect()
}

// =============================================================================
// LOCUS
// =============================================================================

#[test]
fn every_circle_point_is_at_edge_length() {
    for radius in [1.0, 2.0, 100.0] {
        for p1 in sample_points(radius) {
            for q in constraint_circle(p1, radius) {
                assert!(
                    is_on_circle(p1, q, radius, 1e-6 * radius),
                    "{q} is {} from {p1}",
                    q.distance(p1)
                );
                assert_abs_diff_eq!(q.length(), radius, epsilon = 1e-9 * radius);
            }
        }
    }
}

#[test]
fn circle_is_closed() {
    let circle = constraint_circle(DVec3::new(0.0, 0.0, 3.0), 3.0);
    assert_eq!(circle.len(), DEFAULT_CIRCLE_SEGMENTS as usize + 1);
    assert_eq!(circle[0], circle[circle.len() - 1]);
}

#[test]
fn segment_count_is_clamped() {
    let p1 = DVec3::X;
    assert_eq!(
        constraint_circle_with_segments(p1, 1.0, 0).len(),
        MIN_CIRCLE_SEGMENTS as usize + 1
    );
    assert_eq!(
        constraint_circle_with_segments(p1, 1.0, u32::MAX).len(),
        MAX_CIRCLE_SEGMENTS as usize + 1
    );
    assert_eq!(constraint_circle_with_segments(p1, 1.0, 8).len(), 9);
}

#[test]
fn circle_around_north_pole_is_below_equator() {
    let radius = 2.0;
    for q in constraint_circle(DVec3::Y * radius, radius) {
        assert_abs_diff_eq!(q.y, -radius / 3.0, epsilon = 1e-12);
    }
}

// =============================================================================
// SNAPPING
// =============================================================================

#[test]
fn snapped_points_lie_on_locus() {
    let radius = 2.0;
    let clicks = [
        DVec3::new(0.0, 2.0, 0.0),
        DVec3::new(10.0, -4.0, 7.0),
        DVec3::new(0.01, 0.02, -0.03),
        DVec3::new(-2.0, 0.0, 0.1),
    ];
    for p1 in sample_points(radius) {
        for click in clicks {
            let snapped = snap_to_circle(p1, click, radius);
            assert_abs_diff_eq!(snapped.distance(p1), edge_length(radius), epsilon = 1e-6 * radius);
            assert_abs_diff_eq!(snapped.length(), radius, epsilon = 1e-9);
        }
    }
}

#[test]
fn snap_is_closest_polyline_point() {
    let radius = 1.0;
    let p1 = DVec3::new(0.3, -0.4, 0.87).normalize();
    let click = DVec3::new(-0.8, 0.1, 0.4).normalize();
    let snapped = snap_to_circle(p1, click, radius);

    let best_sampled = constraint_circle_with_segments(p1, radius, 1024)
        .into_iter()
        .map(|q| q.angle_between(click))
        .fold(f64::INFINITY, f64::min);
    assert!(snapped.angle_between(click) <= best_sampled + 1e-9);
}

#[test]
fn snapping_a_point_already_on_circle_keeps_it() {
    let radius = 3.0;
    let p1 = DVec3::new(0.0, 0.0, radius);
    for q in constraint_circle_with_segments(p1, radius, 12) {
        assert!(snap_to_circle(p1, q, radius).abs_diff_eq(q, 1e-9));
    }
}

#[test]
fn equator_click_snaps_toward_it() {
    let radius = 2.0;
    let p1 = DVec3::new(2.0, 0.0, 0.0);
    let snapped = snap_to_circle(p1, DVec3::new(0.0, 2.0, 0.0), radius);
    let expected = DVec3::new(-2.0 / 3.0, 2.0 * (8.0f64 / 9.0).sqrt(), 0.0);
    assert!(snapped.abs_diff_eq(expected, 1e-12));
}

#[test]
fn degenerate_click_is_deterministic() {
    let radius = 2.0;
    let p1 = DVec3::new(0.0, 0.0, radius);
    for click in [p1, -p1, p1 * 5.0] {
        let first = snap_to_circle(p1, click, radius);
        let second = snap_to_circle(p1, click, radius);
        assert_eq!(first, second);
        assert!(first.is_finite());
        assert_abs_diff_eq!(first.distance(p1), edge_length(radius), epsilon = 1e-9);
    }
}

#[test]
fn degenerate_click_uses_least_aligned_world_axis() {
    // Z-axis point: X is least aligned, X × Z = -Y.
    let radius = 1.0;
    let p1 = DVec3::Z;
    let snapped = snap_to_circle(p1, p1, radius);
    assert!(snapped.y < 0.0);
    assert_abs_diff_eq!(snapped.x, 0.0, epsilon = 1e-12);
}

#[test]
fn fallback_direction_is_orthogonal_unit() {
    for axis in [
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::new(0.6, 0.0, -0.8),
        DVec3::new(1.0, 1.0, 1.0).normalize(),
    ] {
        let d = fallback_direction(axis);
        assert_abs_diff_eq!(d.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.dot(axis), 0.0, epsilon = 1e-12);
    }
    assert_eq!(fallback_direction(DVec3::Z), DVec3::X.cross(DVec3::Z));
    assert_eq!(fallback_direction(DVec3::X), DVec3::Y.cross(DVec3::X));
}
