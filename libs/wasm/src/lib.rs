//! WASM-facing entry points for the merkaba alignment core.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Points cross the boundary as flat `[x, y, z]` buffers.
//! Native tests use the `_internal` helpers, which return Rust error types
//! instead of `JsValue`.
//!
//! ```
//! let circle = merkaba_wasm::constraint_circle_internal(&[0.0, 5.0, 0.0], 5.0, 16).unwrap();
//! assert_eq!(circle.len(), 17 * 3);
//! ```

pub mod buffers;
mod merkaba_handle;

pub use merkaba_handle::MerkabaHandle;

use config::constants::{approx_zero, DEFAULT_CIRCLE_SEGMENTS, DEFAULT_SPHERE_RADIUS};
use merkaba_core::alignment::ensure_radius;
use merkaba_core::{
    constraint, materialize, try_align, GeometryError, GeometryResult, MerkabaVertices,
    RotationState,
};
use wasm_bindgen::prelude::*;

use buffers::{flatten_f64, point_from_slice};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "merkaba_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the globe radius used when the host has no preference.
#[wasm_bindgen]
pub fn default_radius() -> f64 {
    DEFAULT_SPHERE_RADIUS
}

/// Returns the default constraint-circle segment count.
///
/// # Examples
/// ```
/// assert_eq!(merkaba_wasm::default_segments(), 64);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_CIRCLE_SEGMENTS
}

/// Returns the angle (radians) one solid edge subtends at the globe center.
#[wasm_bindgen]
pub fn edge_angular_radius() -> f64 {
    config::constants::edge_angular_radius()
}

/// Converts a geometry error into a JavaScript `Error`, logging it to the
/// browser console.
fn to_js_error(err: GeometryError) -> JsValue {
    js_error(&err.to_string())
}

/// Builds a JavaScript `Error` from a message and logs it to the console.
pub(crate) fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    js_sys::Error::new(message).into()
}

// =============================================================================
// CONSTRAINT CIRCLE
// =============================================================================

/// Returns the constraint-circle polyline around `point1` as a flat
/// Float64Array of `segments + 1` points.
///
/// # Errors
/// Returns a JavaScript error when `point1` is not a finite 3-vector or the
/// radius is invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const circle = constraint_circle(new Float64Array([0, 5, 0]), 5, 64);
/// // line.geometry.setAttribute('position', new THREE.BufferAttribute(new Float32Array(circle), 3));
/// ```
#[wasm_bindgen]
pub fn constraint_circle(point1: &[f64], radius: f64, segments: u32) -> Result<Vec<f64>, JsValue> {
    constraint_circle_internal(point1, radius, segments).map_err(to_js_error)
}

/// Host-side twin of [`constraint_circle`].
pub fn constraint_circle_internal(
    point1: &[f64],
    radius: f64,
    segments: u32,
) -> GeometryResult<Vec<f64>> {
    ensure_radius(radius)?;
    let point1 = point_from_slice("point1", point1)?;
    if approx_zero(point1.length() / radius) {
        return Err(GeometryError::DegenerateClick);
    }
    let circle = constraint::constraint_circle_with_segments(point1, radius, segments);
    Ok(flatten_f64(&circle))
}

/// Snaps a clicked point onto the constraint circle of `point1`.
///
/// # Errors
/// Returns a JavaScript error for malformed buffers or an invalid radius.
#[wasm_bindgen]
pub fn snap_to_circle(point1: &[f64], clicked: &[f64], radius: f64) -> Result<Vec<f64>, JsValue> {
    snap_to_circle_internal(point1, clicked, radius).map_err(to_js_error)
}

/// Host-side twin of [`snap_to_circle`].
pub fn snap_to_circle_internal(
    point1: &[f64],
    clicked: &[f64],
    radius: f64,
) -> GeometryResult<Vec<f64>> {
    ensure_radius(radius)?;
    let point1 = point_from_slice("point1", point1)?;
    let clicked = point_from_slice("clicked", clicked)?;
    if approx_zero(point1.length() / radius) {
        return Err(GeometryError::DegenerateClick);
    }
    Ok(constraint::snap_to_circle(point1, clicked, radius)
        .to_array()
        .to_vec())
}

// =============================================================================
// SOLID
// =============================================================================

/// Places the merkaba through `point1` and `point2`, applies the slider
/// rotation and returns the handle for rendering.
///
/// # Errors
/// Returns a JavaScript error when either point is malformed, off the
/// sphere, or the two coincide.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const merkaba = compute_merkaba(p1, p2, 5, sliderY.value, sliderX.value);
/// //   console.log(merkaba.coordinates_json());
/// // } catch (error) {
/// //   console.error("Alignment failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn compute_merkaba(
    point1: &[f64],
    point2: &[f64],
    radius: f64,
    rotation_y: f64,
    rotation_x: f64,
) -> Result<MerkabaHandle, JsValue> {
    compute_merkaba_internal(point1, point2, radius, rotation_y, rotation_x).map_err(to_js_error)
}

/// Host-side twin of [`compute_merkaba`].
pub fn compute_merkaba_internal(
    point1: &[f64],
    point2: &[f64],
    radius: f64,
    rotation_y: f64,
    rotation_x: f64,
) -> GeometryResult<MerkabaHandle> {
    let point1 = point_from_slice("point1", point1)?;
    let point2 = point_from_slice("point2", point2)?;
    let alignment = try_align(point1, point2, radius)?;
    let orientation = RotationState::new(rotation_y, rotation_x).apply(alignment);

    let vertices = MerkabaVertices::new(materialize(orientation, radius));
    Ok(MerkabaHandle::from_vertices(&vertices, radius))
}
