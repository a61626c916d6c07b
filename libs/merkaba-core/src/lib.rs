//! Merkaba alignment core
//!
//! Inscribes a stellated octahedron (two tetrahedra on the corners of one
//! cube) in a globe so that a chosen edge runs through two user-picked
//! surface points, then lets the user spin it about its own axes.
//!
//! Every function here is pure and deterministic. Rendering, camera control
//! and input handling belong to the caller, which supplies surface points
//! and rotation angles and receives vertices and coordinates back.
//!
//! ```
//! use glam::DVec3;
//! use merkaba_core::{align, apply_user_rotation, constraint, materialize, to_geographic};
//!
//! let radius = 2.0;
//! let point1 = DVec3::new(2.0, 0.0, 0.0);
//! let point2 = constraint::snap_to_circle(point1, DVec3::new(0.0, 2.0, 0.0), radius);
//!
//! let orientation = apply_user_rotation(align(point1, point2, radius), 0.0, 0.0);
//! let vertices = materialize(orientation, radius);
//! let coordinates: Vec<_> = vertices.iter().map(|v| to_geographic(*v, radius)).collect();
//! assert_eq!(coordinates.len(), 8);
//! ```

pub mod alignment;
pub mod canonical;
pub mod constraint;
pub mod error;
pub mod geographic;
pub mod materialize;
pub mod rotation;
pub mod session;

pub use alignment::{align, try_align};
pub use canonical::{CanonicalSolid, TETRA1_INDICES, TETRA2_INDICES};
pub use constraint::{constraint_circle, snap_to_circle};
pub use error::{GeometryError, GeometryResult};
pub use geographic::{from_geographic, to_geographic, GeoCoordinate};
pub use materialize::{materialize, solve, MerkabaVertices};
pub use rotation::{apply_user_rotation, RotationState};
pub use session::{EdgeSelection, Frame, Session};

/// A point or direction in world space.
pub type Point3 = glam::DVec3;

/// A unit quaternion describing a pure rotation.
pub type Orientation = glam::DQuat;
