//! Output drawing reconstruction

use dxf::entities::{self, Entity, EntityType};
use dxf::{Drawing, LwPolylineVertex};
use dxfslim_core::Polyline;

/// Build a fresh drawing containing one lightweight polyline entity per
/// input polyline with at least two points, in input order.
///
/// Polylines too short to describe a line segment are omitted. No layers,
/// units, or header variables are set beyond what the codec's
/// normalization pass fills in, and nothing is copied from any source
/// drawing.
pub fn rebuild_drawing(polylines: &[Polyline]) -> Drawing {
    let mut drawing = Drawing::new();

    for polyline in polylines {
        if polyline.len() < 2 {
            continue;
        }
        let lw = entities::LwPolyline {
            vertices: polyline
                .iter()
                .map(|p| LwPolylineVertex {
                    x: p.x,
                    y: p.y,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        drawing.add_entity(Entity::new(EntityType::LwPolyline(lw)));
    }

    drawing.normalize();
    drawing
}
