//! # Merkaba Handle
//!
//! WASM-friendly wrapper for a placed solid that can be transferred to
//! JavaScript.

use merkaba_core::{canonical::merkaba_edges, GeoCoordinate, MerkabaVertices};
use wasm_bindgen::prelude::*;

use crate::buffers::flatten_f32;
use crate::js_error;

/// A placed merkaba, ready for line rendering and coordinate display.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const merkaba = compute_merkaba(point1, point2, radius, rotY, rotX);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(merkaba.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(merkaba.edges(), 1));
/// const lines = new THREE.LineSegments(geometry, material);
///
/// const coords = merkaba.coordinates(); // [lat0, lon0, lat1, lon1, ...]
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MerkabaHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Edge endpoints as [a0, b0, a1, b1, ...]
    edges: Vec<u32>,
    /// Per-vertex latitude/longitude in degrees
    coordinates: Vec<GeoCoordinate>,
}

#[wasm_bindgen]
impl MerkabaHandle {
    /// Returns the number of vertices (always 8).
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.coordinates.len() as u32
    }

    /// Returns the number of edges (always 12).
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> u32 {
        (self.edges.len() / 2) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the edge index pairs as a Uint32Array, first tetrahedron
    /// then second.
    pub fn edges(&self) -> Vec<u32> {
        self.edges.clone()
    }

    /// Returns the coordinates as a Float64Array.
    ///
    /// Format: [lat, lon, lat, lon, ...]
    pub fn coordinates(&self) -> Vec<f64> {
        self.coordinates
            .iter()
            .flat_map(|c| [c.latitude, c.longitude])
            .collect()
    }

    /// Returns the coordinates as a JSON array of
    /// `{"latitude": .., "longitude": ..}` objects.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn coordinates_json(&self) -> Result<String, JsValue> {
        self.coordinates_json_internal()
            .map_err(|err| js_error(&err.to_string()))
    }
}

impl MerkabaHandle {
    /// Creates a handle from placed vertices.
    pub fn from_vertices(vertices: &MerkabaVertices, radius: f64) -> Self {
        let edges = merkaba_edges()
            .iter()
            .flat_map(|&[a, b]| [a as u32, b as u32])
            .collect();

        Self {
            vertices: flatten_f32(vertices.points()),
            edges,
            coordinates: vertices.geographic(radius).to_vec(),
        }
    }

    /// Host-side twin of [`MerkabaHandle::coordinates_json`].
    pub fn coordinates_json_internal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.coordinates)
    }

    /// Borrowed access to the typed coordinates.
    pub fn geo_coordinates(&self) -> &[GeoCoordinate] {
        &self.coordinates
    }
}
