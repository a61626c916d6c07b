//! Session state machine tests.

use super::*;
use crate::constraint::is_on_circle;
use config::constants::{DEFAULT_CIRCLE_SEGMENTS, DEFAULT_SPHERE_RADIUS};

fn complete_session() -> Session {
    let mut session = Session::new(2.0).unwrap();
    session.click(DVec3::new(2.0, 0.0, 0.0)).unwrap();
    session.click(DVec3::new(0.0, 2.0, 0.0)).unwrap();
    session
}

#[test]
fn default_session_uses_configured_constants() {
    let session = Session::default();
    assert_eq!(session.radius(), DEFAULT_SPHERE_RADIUS);
    assert_eq!(session.circle_segments(), DEFAULT_CIRCLE_SEGMENTS);
    assert_eq!(session.selection(), EdgeSelection::Empty);
    assert_eq!(session.frame(), Frame::Idle);
}

#[test]
fn new_rejects_invalid_radius() {
    assert_eq!(Session::new(-1.0), Err(GeometryError::InvalidRadius(-1.0)));
    assert!(Session::new(f64::NAN).is_err());
}

#[test]
fn circle_segments_are_validated() {
    let session = Session::new(1.0).unwrap().with_circle_segments(16).unwrap();
    assert_eq!(session.circle_segments(), 16);
    assert_eq!(
        Session::new(1.0).unwrap().with_circle_segments(2),
        Err(GeometryError::InvalidSegments(2))
    );
}

#[test]
fn first_click_is_projected_onto_sphere() {
    let mut session = Session::new(2.0).unwrap();
    session.click(DVec3::new(0.0, 0.0, 10.0)).unwrap();
    assert_eq!(session.selection(), EdgeSelection::First(DVec3::new(0.0, 0.0, 2.0)));
}

#[test]
fn first_point_shows_constraint_circle() {
    let mut session = Session::new(2.0).unwrap().with_circle_segments(8).unwrap();
    session.click(DVec3::X * 2.0).unwrap();
    match session.frame() {
        Frame::Locus(points) => {
            assert_eq!(points.len(), 9);
            assert!(points
                .iter()
                .all(|&q| is_on_circle(DVec3::X * 2.0, q, 2.0, 1e-9)));
        }
        other => panic!("expected locus, got {other:?}"),
    }
}

#[test]
fn second_click_is_snapped() {
    let session = complete_session();
    let p1 = session.selection().point1().unwrap();
    let p2 = session.selection().point2().unwrap();
    assert_eq!(p1, DVec3::new(2.0, 0.0, 0.0));
    assert!(is_on_circle(p1, p2, 2.0, 1e-9));
}

#[test]
fn complete_selection_produces_solid() {
    let session = complete_session();
    let p1 = session.selection().point1().unwrap();
    let p2 = session.selection().point2().unwrap();
    match session.frame() {
        Frame::Solid {
            vertices,
            coordinates,
        } => {
            assert!(vertices.points()[0].abs_diff_eq(p1, 1e-9));
            assert!(vertices.points()[3].abs_diff_eq(p2, 1e-9));
            assert!(coordinates[0].latitude.abs() < 1e-6);
            assert!(coordinates[0].longitude.abs() < 1e-6);
        }
        other => panic!("expected solid, got {other:?}"),
    }
}

#[test]
fn rotation_persists_until_new_first_point() {
    let mut session = complete_session();
    session.set_rotation(0.5, -0.5);
    let rotated = session.frame();
    assert_eq!(session.rotation(), RotationState::new(0.5, -0.5));
    assert_ne!(rotated, complete_session().frame());

    // Third click restarts the cycle and clears the sliders.
    session.click(DVec3::new(0.0, 0.0, -3.0)).unwrap();
    assert_eq!(session.selection(), EdgeSelection::First(DVec3::new(0.0, 0.0, -2.0)));
    assert!(session.rotation().is_zero());
}

#[test]
fn rejected_clicks_leave_state_untouched() {
    let mut session = complete_session();
    let before = session.clone();
    assert_eq!(session.click(DVec3::ZERO), Err(GeometryError::DegenerateClick));
    assert_eq!(
        session.click(DVec3::new(f64::INFINITY, 0.0, 0.0)),
        Err(GeometryError::NonFinitePoint { label: "click" })
    );
    assert_eq!(session, before);
}

#[test]
fn reset_clears_everything() {
    let mut session = complete_session();
    session.set_rotation(1.0, 1.0);
    session.reset();
    assert_eq!(session.selection(), EdgeSelection::Empty);
    assert!(session.rotation().is_zero());
}

#[test]
fn selection_accessors() {
    assert_eq!(EdgeSelection::Empty.point1(), None);
    assert_eq!(EdgeSelection::First(DVec3::X).point1(), Some(DVec3::X));
    assert_eq!(EdgeSelection::First(DVec3::X).point2(), None);
    assert_eq!(EdgeSelection::Complete(DVec3::X, DVec3::Y).point2(), Some(DVec3::Y));
}

#[test]
fn click_near_center_is_rejected_relative_to_radius() {
    let mut session = Session::new(1e6).unwrap();
    assert_eq!(
        session.click(DVec3::new(1e-5, 0.0, 0.0)),
        Err(GeometryError::DegenerateClick)
    );
    assert_eq!(session.selection(), EdgeSelection::Empty);

    session.click(DVec3::new(1e-3, 0.0, 0.0)).unwrap();
    assert_eq!(session.selection(), EdgeSelection::First(DVec3::new(1e6, 0.0, 0.0)));
}
