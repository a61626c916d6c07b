//! # Flat Buffers
//!
//! Conversions between JavaScript-friendly flat `f64` buffers and `DVec3`.

use glam::DVec3;
use merkaba_core::{GeometryError, GeometryResult};

/// Number of values per packed point.
pub const POINT_STRIDE: usize = 3;

/// Reads an `[x, y, z]` buffer into a finite point.
///
/// # Errors
/// Returns [`GeometryError::InvalidBuffer`] for the wrong length and
/// [`GeometryError::NonFinitePoint`] for NaN or infinite components.
///
/// # Examples
/// ```
/// use merkaba_wasm::buffers::point_from_slice;
///
/// let p = point_from_slice("point1", &[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(p.z, 3.0);
/// assert!(point_from_slice("point1", &[1.0, 2.0]).is_err());
/// ```
pub fn point_from_slice(label: &'static str, values: &[f64]) -> GeometryResult<DVec3> {
    let [x, y, z]: [f64; POINT_STRIDE] =
        values.try_into().map_err(|_| GeometryError::InvalidBuffer {
            expected: POINT_STRIDE,
            actual: values.len(),
        })?;
    let point = DVec3::new(x, y, z);
    if !point.is_finite() {
        return Err(GeometryError::NonFinitePoint { label });
    }
    Ok(point)
}

/// Packs points into `[x0, y0, z0, x1, ...]`.
pub fn flatten_f64<'a>(points: impl IntoIterator<Item = &'a DVec3>) -> Vec<f64> {
    points.into_iter().flat_map(|p| p.to_array()).collect()
}

/// Packs points into a single-precision GPU vertex buffer.
pub fn flatten_f32<'a>(points: impl IntoIterator<Item = &'a DVec3>) -> Vec<f32> {
    points
        .into_iter()
        .flat_map(|p| p.as_vec3().to_array())
        .collect()
}
