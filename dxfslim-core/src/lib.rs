//! Core data structures for dxfslim
//!
//! This crate provides the fundamental types for 2D polyline processing:
//! points, the order-significant `Polyline` container, and the shared
//! error type used across the workspace.

pub mod error;
pub mod point;
pub mod polyline;

pub use error::*;
pub use point::*;
pub use polyline::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Vector2};

// Type alias for easier imports; DXF stores double-precision coordinates.
pub type Point = Point2d;
