//! Conversion between world-space points and latitude/longitude.
//!
//! Latitude is measured from the XZ plane toward +Y. Longitude 0° lies on
//! +X and +90° on +Z. The renderer's globe texture is oriented to match, so
//! the `atan2(z, x)` pairing must not change on its own.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Point3;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Degrees north of the equator, `[-90, 90]` for on-sphere points.
    pub latitude: f64,
    /// Degrees from +X toward +Z, `(-180, 180]`.
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Projects a vertex on the sphere of `radius` to latitude/longitude.
///
/// The vertex must lie on the sphere. Off-sphere input is not corrected:
/// `|y / radius| > 1` yields a NaN latitude.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::to_geographic;
///
/// let north = to_geographic(DVec3::new(0.0, 2.0, 0.0), 2.0);
/// assert_eq!(north.latitude, 90.0);
/// assert_eq!(north.longitude, 0.0);
/// ```
pub fn to_geographic(vertex: Point3, radius: f64) -> GeoCoordinate {
    GeoCoordinate {
        latitude: (vertex.y / radius).asin().to_degrees(),
        longitude: vertex.z.atan2(vertex.x).to_degrees(),
    }
}

/// Places a latitude/longitude on the sphere of `radius`, inverting
/// [`to_geographic`].
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use merkaba_core::{from_geographic, GeoCoordinate};
///
/// let p = from_geographic(GeoCoordinate::new(0.0, 90.0), 3.0);
/// assert!(p.abs_diff_eq(DVec3::new(0.0, 0.0, 3.0), 1e-12));
/// ```
pub fn from_geographic(coordinate: GeoCoordinate, radius: f64) -> Point3 {
    let (sin_lat, cos_lat) = coordinate.latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = coordinate.longitude.to_radians().sin_cos();
    DVec3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon) * radius
}
