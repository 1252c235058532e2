//! Camera system for interactive 3D view control.
//!
//! Provides an arcball camera with quaternion-based orbit rotation,
//! distance-clamped zoom, and pivot panning.

/// Arcball camera with orbit, zoom, and pan operations.
pub mod arcball;

pub use arcball::{screen_to_arcball, ArcballCamera};
