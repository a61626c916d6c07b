//! Canonical, axis-aligned merkaba used as the reference frame for alignment.
//!
//! The eight vertices are the corners of a cube pushed onto the unit sphere.
//! Corners whose sign product is positive form the first tetrahedron, the
//! remaining four form the second.

use glam::DVec3;

/// `1 / sqrt(3)`, the coordinate magnitude of a unit-sphere cube corner.
const C: f64 = 0.577_350_269_189_625_8;

/// Cube corners on the unit sphere, ordered `(+,+,+) (+,+,-) (+,-,+) (+,-,-)
/// (-,+,+) (-,+,-) (-,-,+) (-,-,-)`.
pub const CANONICAL_VERTICES: [DVec3; 8] = [
    DVec3::new(C, C, C),
    DVec3::new(C, C, -C),
    DVec3::new(C, -C, C),
    DVec3::new(C, -C, -C),
    DVec3::new(-C, C, C),
    DVec3::new(-C, C, -C),
    DVec3::new(-C, -C, C),
    DVec3::new(-C, -C, -C),
];

/// Vertex indices of the first tetrahedron. The first two define the
/// reference edge that alignment maps onto the user's two points.
pub const TETRA1_INDICES: [usize; 4] = [0, 3, 5, 6];

/// Vertex indices of the second tetrahedron.
pub const TETRA2_INDICES: [usize; 4] = [1, 2, 4, 7];

/// Number of edges in one tetrahedron (complete graph on four vertices).
pub const TETRA_EDGE_COUNT: usize = 6;

static CANONICAL_SOLID: CanonicalSolid = CanonicalSolid {
    vertices: CANONICAL_VERTICES,
    tetra1: TETRA1_INDICES,
    tetra2: TETRA2_INDICES,
};

/// Immutable reference geometry shared by every alignment computation.
///
/// # Examples
/// ```
/// use merkaba_core::canonical::CanonicalSolid;
///
/// let solid = CanonicalSolid::get();
/// assert!(solid.vertices().iter().all(|v| (v.length() - 1.0).abs() < 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSolid {
    vertices: [DVec3; 8],
    tetra1: [usize; 4],
    tetra2: [usize; 4],
}

impl CanonicalSolid {
    /// Returns the process-wide canonical solid.
    pub fn get() -> &'static CanonicalSolid {
        &CANONICAL_SOLID
    }

    /// The eight unit vertices in canonical order.
    pub fn vertices(&self) -> &[DVec3; 8] {
        &self.vertices
    }

    /// Indices of the first tetrahedron.
    pub fn tetra1(&self) -> [usize; 4] {
        self.tetra1
    }

    /// Indices of the second tetrahedron.
    pub fn tetra2(&self) -> [usize; 4] {
        self.tetra2
    }

    /// The two canonical vertices whose edge is aligned with the user's
    /// selection: the first two entries of [`TETRA1_INDICES`].
    ///
    /// # Examples
    /// ```
    /// use merkaba_core::canonical::{CanonicalSolid, CANONICAL_VERTICES};
    ///
    /// let (p1, p2) = CanonicalSolid::get().reference_edge();
    /// assert_eq!(p1, CANONICAL_VERTICES[0]);
    /// assert_eq!(p2, CANONICAL_VERTICES[3]);
    /// ```
    pub fn reference_edge(&self) -> (DVec3, DVec3) {
        (self.vertices[self.tetra1[0]], self.vertices[self.tetra1[1]])
    }

    /// All twelve edges of the solid as vertex index pairs, first
    /// tetrahedron then second.
    pub fn edges(&self) -> [[usize; 2]; 2 * TETRA_EDGE_COUNT] {
        let mut edges = [[0; 2]; 2 * TETRA_EDGE_COUNT];
        edges[..TETRA_EDGE_COUNT].copy_from_slice(&tetrahedron_edges(self.tetra1));
        edges[TETRA_EDGE_COUNT..].copy_from_slice(&tetrahedron_edges(self.tetra2));
        edges
    }
}

/// Every pair among four tetrahedron vertices.
///
/// # Examples
/// ```
/// use merkaba_core::canonical::tetrahedron_edges;
///
/// let edges = tetrahedron_edges([0, 3, 5, 6]);
/// assert_eq!(edges[0], [0, 3]);
/// assert_eq!(edges[5], [5, 6]);
/// ```
pub fn tetrahedron_edges(indices: [usize; 4]) -> [[usize; 2]; TETRA_EDGE_COUNT] {
    let [a, b, c, d] = indices;
    [[a, b], [a, c], [a, d], [b, c], [b, d], [c, d]]
}

/// Edges of both tetrahedra of the canonical solid.
pub fn merkaba_edges() -> [[usize; 2]; 2 * TETRA_EDGE_COUNT] {
    CanonicalSolid::get().edges()
}

#[cfg(test)]
mod tests;
