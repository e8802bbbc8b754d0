//! End-to-end tests for the simplification service
//!
//! Drawings are built with the codec, written into an upload directory,
//! pushed through the full read -> extract -> decimate -> rebuild -> write
//! pipeline, and the emitted files are reloaded and verified.

use dxf::entities::{Entity, EntityType, LwPolyline, Vertex};
use dxf::{Drawing, LwPolylineVertex, Point};
use dxfslim_core::Error;
use dxfslim_io::{extract_polylines, read_drawing};
use dxfslim_service::{simplify_file, store_upload, ServiceConfig};
use std::fs;

/// Per-test directory pair, cleaned up on drop.
struct TestDirs {
    config: ServiceConfig,
}

impl TestDirs {
    fn new(tag: &str) -> Self {
        let config = ServiceConfig::new(
            format!("test_uploads_{tag}"),
            format!("test_downloads_{tag}"),
        );
        config.ensure_dirs().unwrap();
        Self { config }
    }
}

impl Drop for TestDirs {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.config.upload_dir);
        let _ = fs::remove_dir_all(&self.config.download_dir);
    }
}

fn lw_entity(points: &[(f64, f64)]) -> Entity {
    let lw = LwPolyline {
        vertices: points
            .iter()
            .map(|&(x, y)| LwPolylineVertex {
                x,
                y,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };
    Entity::new(EntityType::LwPolyline(lw))
}

fn drawing_bytes(drawing: &mut Drawing) -> Vec<u8> {
    drawing.normalize();
    let mut buf = Vec::new();
    drawing.save(&mut buf).unwrap();
    buf
}

#[test]
fn test_half_reduction_round_trip() {
    let dirs = TestDirs::new("half");

    let mut drawing = Drawing::new();
    drawing.add_entity(lw_entity(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (4.0, 0.0),
        (5.0, 0.0),
    ]));
    store_upload(&dirs.config, "line.dxf", &drawing_bytes(&mut drawing)).unwrap();

    let output_path = simplify_file(&dirs.config, "line.dxf", 50.0).unwrap();
    assert_eq!(
        output_path,
        dirs.config.download_dir.join("simplified_line.dxf")
    );

    let output = read_drawing(&output_path).unwrap();
    let polylines = extract_polylines(&output);
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].len(), 3);
    assert_eq!(polylines[0].first().unwrap().x, 0.0);
    assert_eq!(polylines[0].last().unwrap().x, 5.0);
}

#[test]
fn test_zero_percent_leaves_counts_unchanged() {
    let dirs = TestDirs::new("zero");

    let mut drawing = Drawing::new();
    drawing.add_entity(lw_entity(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]));
    store_upload(&dirs.config, "zigzag.dxf", &drawing_bytes(&mut drawing)).unwrap();

    let output_path = simplify_file(&dirs.config, "zigzag.dxf", 0.0).unwrap();
    let polylines = extract_polylines(&read_drawing(&output_path).unwrap());
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].len(), 4);
}

#[test]
fn test_degenerate_polyline_is_dropped_entirely() {
    let dirs = TestDirs::new("degenerate");

    let mut drawing = Drawing::new();
    drawing.add_entity(lw_entity(&[(7.0, 7.0)]));
    store_upload(&dirs.config, "dot.dxf", &drawing_bytes(&mut drawing)).unwrap();

    let output_path = simplify_file(&dirs.config, "dot.dxf", 90.0).unwrap();
    let polylines = extract_polylines(&read_drawing(&output_path).unwrap());
    assert!(polylines.is_empty());
}

#[test]
fn test_two_point_polyline_survives_heavy_reduction() {
    let dirs = TestDirs::new("twopoint");

    let mut drawing = Drawing::new();
    drawing.add_entity(lw_entity(&[(0.0, 0.0), (9.0, 9.0)]));
    store_upload(&dirs.config, "segment.dxf", &drawing_bytes(&mut drawing)).unwrap();

    let output_path = simplify_file(&dirs.config, "segment.dxf", 90.0).unwrap();
    let polylines = extract_polylines(&read_drawing(&output_path).unwrap());
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].len(), 2);
}

#[test]
fn test_relative_order_survives_full_reduction() {
    let dirs = TestDirs::new("order");

    let mut drawing = Drawing::new();
    drawing.add_entity(lw_entity(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
    ]));
    // Vertex-chain polyline in the middle; z must not leak through.
    let mut chain = dxf::entities::Polyline::default();
    for &(x, y, z) in &[(10.0, 0.0, 4.0), (11.0, 0.0, 4.0), (12.0, 0.0, 4.0)] {
        chain.add_vertex(&mut drawing, Vertex::new(Point::new(x, y, z)));
    }
    drawing.add_entity(Entity::new(EntityType::Polyline(chain)));
    drawing.add_entity(lw_entity(&[(20.0, 0.0), (21.0, 0.0), (22.0, 0.0)]));

    store_upload(&dirs.config, "three.dxf", &drawing_bytes(&mut drawing)).unwrap();

    let output_path = simplify_file(&dirs.config, "three.dxf", 100.0).unwrap();
    let polylines = extract_polylines(&read_drawing(&output_path).unwrap());
    assert_eq!(polylines.len(), 3);
    for polyline in &polylines {
        assert_eq!(polyline.len(), 2);
    }
    assert_eq!(polylines[0][0].x, 0.0);
    assert_eq!(polylines[0][1].x, 3.0);
    assert_eq!(polylines[1][0].x, 10.0);
    assert_eq!(polylines[1][1].x, 12.0);
    assert_eq!(polylines[2][0].x, 20.0);
    assert_eq!(polylines[2][1].x, 22.0);
}

#[test]
fn test_missing_input_is_not_found() {
    let dirs = TestDirs::new("missing");

    let result = simplify_file(&dirs.config, "absent.dxf", 25.0);
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
    // Nothing may be persisted for a failed request.
    assert!(!dirs.config.download_path("absent.dxf").exists());
}

#[test]
fn test_store_upload_rejects_other_extensions() {
    let dirs = TestDirs::new("reject");

    let result = store_upload(&dirs.config, "drawing.svg", b"<svg/>");
    assert!(matches!(result, Err(Error::UnsupportedFilename(_))));
    assert!(!dirs.config.upload_path("drawing.svg").exists());
}

#[test]
fn test_non_polyline_entities_are_not_carried_over() {
    let dirs = TestDirs::new("filter");

    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Line(dxf::entities::Line::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(5.0, 5.0, 0.0),
    ))));
    drawing.add_entity(lw_entity(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));

    store_upload(&dirs.config, "mixed.dxf", &drawing_bytes(&mut drawing)).unwrap();

    let output_path = simplify_file(&dirs.config, "mixed.dxf", 0.0).unwrap();
    let output = read_drawing(&output_path).unwrap();
    // Only the polyline survives; the line entity is gone.
    assert_eq!(output.entities().count(), 1);
    let polylines = extract_polylines(&output);
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].len(), 3);
}
