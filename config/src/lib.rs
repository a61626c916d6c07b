//! # Config Crate
//!
//! Centralized configuration constants for the merkaba alignment core.
//! Every tolerance, default radius and tessellation parameter used by the
//! geometry and WASM crates is defined here.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{edge_angular_radius, DEFAULT_CIRCLE_SEGMENTS, EDGE_ANGLE_COSINE};
//!
//! // One edge of the solid subtends arccos(-1/3) at the sphere center.
//! assert!((edge_angular_radius().cos() - EDGE_ANGLE_COSINE).abs() < 1e-12);
//! assert_eq!(DEFAULT_CIRCLE_SEGMENTS, 64);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Radius-Independent Angles**: Angular quantities never depend on the sphere size

pub mod constants;
