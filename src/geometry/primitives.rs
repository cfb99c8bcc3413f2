//! Built-in part meshes, used by the demo app and as test fixtures.

use glam::{Mat4, Vec3, Vec4};

use super::assembly::{Assembly, Component, Part};
use super::bounds::BoundingBox;

/// An axis-aligned box part centered on its local origin.
///
/// The combined index stream carries the triangle-list section first and the
/// line-list (edge) section after it, with the start/count offsets a host
/// would normally precompute.
#[must_use]
pub fn box_part(width: f32, height: f32, depth: f32) -> Part {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    // 8 corner vertices, homogeneous w = 1
    let vertices = vec![
        Vec4::new(-w, -h, -d, 1.0), // 0
        Vec4::new(w, -h, -d, 1.0),  // 1
        Vec4::new(w, h, -d, 1.0),   // 2
        Vec4::new(-w, h, -d, 1.0),  // 3
        Vec4::new(-w, -h, d, 1.0),  // 4
        Vec4::new(w, -h, d, 1.0),   // 5
        Vec4::new(w, h, d, 1.0),    // 6
        Vec4::new(-w, h, d, 1.0),   // 7
    ];

    // 12 triangles, CCW as seen from outside
    #[rustfmt::skip]
    let faces: [u32; 36] = [
        4, 5, 6, 4, 6, 7, // front  (+Z)
        1, 0, 3, 1, 3, 2, // back   (-Z)
        3, 7, 6, 3, 6, 2, // top    (+Y)
        0, 1, 5, 0, 5, 4, // bottom (-Y)
        1, 2, 6, 1, 6, 5, // right  (+X)
        0, 4, 7, 0, 7, 3, // left   (-X)
    ];

    // 12 edges as line-list pairs
    #[rustfmt::skip]
    let edges: [u32; 24] = [
        0, 1, 1, 2, 2, 3, 3, 0, // back ring
        4, 5, 5, 6, 6, 7, 7, 4, // front ring
        0, 4, 1, 5, 2, 6, 3, 7, // connectors
    ];

    let mut indices = Vec::with_capacity(faces.len() + edges.len());
    indices.extend_from_slice(&faces);
    indices.extend_from_slice(&edges);

    Part {
        vertices,
        indices,
        face_start: 0,
        face_count: faces.len() as u32,
        edge_start: faces.len() as u32,
        edge_count: edges.len() as u32,
        // raw host arrays hold one entry per face/edge plus the sentinel
        face_index_len: 12 + 1,
        edge_index_len: 12 + 1,
        bounds: BoundingBox::new(Vec3::new(-w, -h, -d), Vec3::new(w, h, d)),
    }
}

/// A small demo assembly: a flat base plate with two posts instancing the
/// same part. Thin in y, so the fit solver picks y as the view axis.
#[must_use]
pub fn sample_assembly() -> Assembly {
    let plate = box_part(8.0, 0.5, 6.0);
    let post = box_part(1.0, 3.0, 1.0);

    let components = vec![
        Component {
            part_index: 0,
            placement: Mat4::IDENTITY,
        },
        Component {
            part_index: 1,
            placement: Mat4::from_translation(Vec3::new(-2.5, 1.75, 0.0)),
        },
        Component {
            part_index: 1,
            placement: Mat4::from_translation(Vec3::new(2.5, 1.75, 0.0)),
        },
    ];

    Assembly {
        parts: vec![plate, post],
        components,
    }
}
