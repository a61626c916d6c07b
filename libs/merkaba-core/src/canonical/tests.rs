//! Canonical solid tests.

use super::*;
use config::constants::{EDGE_ANGLE_COSINE, EPSILON};
use std::collections::HashSet;

#[test]
fn vertices_lie_on_unit_sphere() {
    for v in CANONICAL_VERTICES {
        assert!((v.length() - 1.0).abs() < EPSILON, "{v} is not unit length");
    }
}

#[test]
fn tetrahedra_partition_all_vertices() {
    let all: HashSet<usize> = TETRA1_INDICES
        .iter()
        .chain(TETRA2_INDICES.iter())
        .copied()
        .collect();
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|&i| i < 8));
}

#[test]
fn first_tetrahedron_has_positive_sign_product() {
    for i in TETRA1_INDICES {
        let v = CANONICAL_VERTICES[i];
        assert!(v.x * v.y * v.z > 0.0);
    }
    for i in TETRA2_INDICES {
        let v = CANONICAL_VERTICES[i];
        assert!(v.x * v.y * v.z < 0.0);
    }
}

/// Every tetrahedron edge subtends arccos(-1/3) at the center.
#[test]
fn every_edge_subtends_tetrahedral_angle() {
    let solid = CanonicalSolid::get();
    for [a, b] in solid.edges() {
        let cos = solid.vertices()[a].dot(solid.vertices()[b]);
        assert!(
            (cos - EDGE_ANGLE_COSINE).abs() < EPSILON,
            "edge {a}-{b} has cosine {cos}"
        );
    }
}

#[test]
fn edges_are_unique_pairs() {
    let edges = merkaba_edges();
    let unique: HashSet<(usize, usize)> = edges
        .iter()
        .map(|[a, b]| ((*a).min(*b), (*a).max(*b)))
        .collect();
    assert_eq!(unique.len(), 12);
}

#[test]
fn static_instance_is_shared() {
    assert!(std::ptr::eq(CanonicalSolid::get(), CanonicalSolid::get()));
    assert_eq!(CanonicalSolid::get().tetra1(), TETRA1_INDICES);
    assert_eq!(CanonicalSolid::get().tetra2(), TETRA2_INDICES);
}
