//! Point types and related functionality

use nalgebra::{Point2, Vector2};

/// A 2D point with floating point coordinates
pub type Point2f = Point2<f32>;

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 2D vector with floating point components
pub type Vector2f = Vector2<f32>;

/// A 2D vector with double precision components
pub type Vector2d = Vector2<f64>;
