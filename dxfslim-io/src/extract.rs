//! Polyline extraction from drawing entities
//!
//! A drawing stores polylines in two entity variants: the lightweight kind
//! with an inline vertex list, and the vertex-chain kind whose vertices are
//! full 3D entities. Both reduce to the same capability here: yield an
//! ordered (x, y) sequence.

use dxf::entities::{self, EntityType};
use dxf::Drawing;
use dxfslim_core::{Point2d, Polyline};

/// Capability shared by the polyline entity variants: produce the ordered
/// (x, y) vertex sequence, discarding every other attribute.
pub trait VertexSource {
    fn xy_points(&self) -> Polyline;
}

impl VertexSource for entities::LwPolyline {
    // Bulge and width attributes are dropped; only the coordinates survive.
    fn xy_points(&self) -> Polyline {
        self.vertices
            .iter()
            .map(|v| Point2d::new(v.x, v.y))
            .collect()
    }
}

impl VertexSource for entities::Polyline {
    // Vertex locations are 3D; z is dropped.
    fn xy_points(&self) -> Polyline {
        self.vertices()
            .map(|v| Point2d::new(v.location.x, v.location.y))
            .collect()
    }
}

/// Collect the polylines of a drawing, in encounter order.
///
/// Lightweight and vertex-chain polylines each contribute exactly one
/// `Polyline`; every other entity variant is skipped. Entities are never
/// merged or split, and the drawing is not mutated.
pub fn extract_polylines(drawing: &Drawing) -> Vec<Polyline> {
    drawing
        .entities()
        .filter_map(|e| match &e.specific {
            EntityType::LwPolyline(lw) => Some(lw.xy_points()),
            EntityType::Polyline(pl) => Some(pl.xy_points()),
            _ => None,
        })
        .collect()
}
