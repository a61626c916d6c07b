//! User-driven rotation about the aligned solid's own axes.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::Orientation;

/// Two free rotation angles in radians, applied about the solid's local Y
/// then local X axis.
///
/// Angles are unbounded; UIs conventionally restrict them to `[-π, π]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    /// Rotation about the solid's local Y axis.
    pub rotation_y: f64,
    /// Rotation about the solid's local X axis.
    pub rotation_x: f64,
}

impl RotationState {
    /// Creates a rotation state from the two angles.
    pub fn new(rotation_y: f64, rotation_x: f64) -> Self {
        Self {
            rotation_y,
            rotation_x,
        }
    }

    /// Sets both angles back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when both angles are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.rotation_y == 0.0 && self.rotation_x == 0.0
    }

    /// Composes this rotation on top of a base alignment.
    ///
    /// See [`apply_user_rotation`].
    pub fn apply(&self, q_initial: Orientation) -> Orientation {
        apply_user_rotation(q_initial, self.rotation_y, self.rotation_x)
    }
}

/// Rotates the aligned solid about its own Y axis, then its own X axis.
///
/// The local axes are the world axes carried by `q_initial`, so the
/// adjustment follows the solid wherever the alignment placed it. The
/// result is `qRotationX * qRotationY * q_initial`.
///
/// # Examples
/// ```
/// use glam::{DQuat, DVec3};
/// use merkaba_core::apply_user_rotation;
///
/// let base = DQuat::from_rotation_z(0.4);
/// assert_eq!(apply_user_rotation(base, 0.0, 0.0), base);
///
/// // A half turn about the local Y axis keeps that axis fixed.
/// let turned = apply_user_rotation(base, std::f64::consts::PI, 0.0);
/// assert!((turned * DVec3::Y).abs_diff_eq(base * DVec3::Y, 1e-12));
/// ```
pub fn apply_user_rotation(q_initial: Orientation, rotation_y: f64, rotation_x: f64) -> Orientation {
    let local_y_axis = (q_initial * DVec3::Y).normalize();
    let local_x_axis = (q_initial * DVec3::X).normalize();

    let q_rotation_y = DQuat::from_axis_angle(local_y_axis, rotation_y);
    let q_rotation_x = DQuat::from_axis_angle(local_x_axis, rotation_x);

    q_rotation_x * q_rotation_y * q_initial
}
