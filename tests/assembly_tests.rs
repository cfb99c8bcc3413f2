//! Assembly Model Tests
//!
//! Tests for:
//! - Validation at the geometry update boundary (from_sources)
//! - Copy semantics: the assembly owns everything it keeps
//! - Face/edge draw ranges of the built-in box part
//! - Pick-id offsets across instanced components

use glam::{Mat4, Vec3, Vec4};

use asmview::ViewerError;
use asmview::geometry::{
    Assembly, BoundingBox, ComponentSource, PartSource, box_part, sample_assembly,
};

/// A minimal valid part: one triangle face plus one edge in a combined
/// stream, with raw host arrays of one entry plus the sentinel.
struct TriData {
    vertices: Vec<Vec4>,
    indices: Vec<u32>,
    face_indices: Vec<u32>,
    edge_indices: Vec<u32>,
}

impl TriData {
    fn new() -> Self {
        Self {
            vertices: vec![
                Vec4::new(0.0, 0.0, 0.0, 1.0),
                Vec4::new(1.0, 0.0, 0.0, 1.0),
                Vec4::new(0.0, 1.0, 0.0, 1.0),
            ],
            indices: vec![0, 1, 2, 0, 1],
            face_indices: vec![0, 0],
            edge_indices: vec![0, 0],
        }
    }

    fn source(&self) -> PartSource<'_> {
        PartSource {
            vertices: &self.vertices,
            indices: &self.indices,
            face_indices: &self.face_indices,
            edge_indices: &self.edge_indices,
            face_start: 0,
            face_count: 3,
            edge_start: 3,
            edge_count: 2,
            bounds: BoundingBox::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn empty_component_list_is_rejected() {
    let tri = TriData::new();
    let parts = [tri.source()];
    let err = Assembly::from_sources(&parts, &[]).unwrap_err();
    assert!(matches!(err, ViewerError::EmptyAssembly));
}

#[test]
fn dangling_part_index_is_rejected() {
    let tri = TriData::new();
    let parts = [tri.source()];
    let placement = Mat4::IDENTITY;
    let components = [ComponentSource {
        part_index: 3,
        placement: &placement,
    }];
    let err = Assembly::from_sources(&parts, &components).unwrap_err();
    match err {
        ViewerError::PartIndexOutOfBounds {
            component,
            part_index,
            part_count,
        } => {
            assert_eq!(component, 0);
            assert_eq!(part_index, 3);
            assert_eq!(part_count, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn vertex_index_out_of_range_is_rejected() {
    let mut tri = TriData::new();
    tri.indices[1] = 9;
    let parts = [tri.source()];
    let placement = Mat4::IDENTITY;
    let components = [ComponentSource {
        part_index: 0,
        placement: &placement,
    }];
    let err = Assembly::from_sources(&parts, &components).unwrap_err();
    match err {
        ViewerError::VertexIndexOutOfBounds {
            part,
            index,
            vertex_count,
        } => {
            assert_eq!(part, 0);
            assert_eq!(index, 9);
            assert_eq!(vertex_count, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn face_range_overrunning_the_stream_is_rejected() {
    let tri = TriData::new();
    let mut source = tri.source();
    source.face_count = 6;
    let parts = [source];
    let placement = Mat4::IDENTITY;
    let components = [ComponentSource {
        part_index: 0,
        placement: &placement,
    }];
    let err = Assembly::from_sources(&parts, &components).unwrap_err();
    match err {
        ViewerError::IndexRangeOutOfBounds { kind, end, len, .. } => {
            assert_eq!(kind, "face");
            assert_eq!(end, 6);
            assert_eq!(len, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn edge_range_overrunning_the_stream_is_rejected() {
    let tri = TriData::new();
    let mut source = tri.source();
    source.edge_start = 4;
    let parts = [source];
    let placement = Mat4::IDENTITY;
    let components = [ComponentSource {
        part_index: 0,
        placement: &placement,
    }];
    let err = Assembly::from_sources(&parts, &components).unwrap_err();
    assert!(matches!(
        err,
        ViewerError::IndexRangeOutOfBounds { kind: "edge", .. }
    ));
}

// ============================================================================
// Copy semantics
// ============================================================================

#[test]
fn assembly_owns_copies_of_the_source_data() {
    let tri = TriData::new();
    let placement = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let assembly = {
        let parts = [tri.source()];
        let components = [
            ComponentSource {
                part_index: 0,
                placement: &placement,
            },
            ComponentSource {
                part_index: 0,
                placement: &placement,
            },
        ];
        Assembly::from_sources(&parts, &components).unwrap()
    };
    // The borrows have ended; the assembly must still carry everything.
    assert_eq!(assembly.parts.len(), 1);
    assert_eq!(assembly.components.len(), 2);
    assert_eq!(assembly.parts[0].vertices, tri.vertices);
    assert_eq!(assembly.parts[0].indices, tri.indices);
    assert_eq!(assembly.components[1].placement, placement);
    assert_eq!(assembly.parts[0].face_index_len, 2);
    assert_eq!(assembly.parts[0].edge_index_len, 2);
}

// ============================================================================
// Built-in box part
// ============================================================================

#[test]
fn box_part_draw_ranges() {
    let part = box_part(2.0, 2.0, 2.0);
    assert_eq!(part.vertices.len(), 8);
    assert_eq!(part.face_range(), 0..36);
    assert_eq!(part.edge_range(), 36..60);
    assert_eq!(part.indices.len(), 60);
    // every index resolves
    assert!(part.indices.iter().all(|&i| (i as usize) < 8));
}

#[test]
fn box_part_bounds_match_dimensions() {
    let part = box_part(4.0, 6.0, 2.0);
    assert_eq!(part.bounds.min, Vec3::new(-2.0, -3.0, -1.0));
    assert_eq!(part.bounds.max, Vec3::new(2.0, 3.0, 1.0));
}

#[test]
fn sample_assembly_instances_the_post() {
    let asm = sample_assembly();
    assert_eq!(asm.parts.len(), 2);
    assert_eq!(asm.components.len(), 3);
    assert_eq!(asm.components[1].part_index, 1);
    assert_eq!(asm.components[2].part_index, 1);
}

// ============================================================================
// Pick-id offsets
// ============================================================================

#[test]
fn pick_ids_accumulate_over_preceding_components() {
    let asm = sample_assembly();
    // box part: 13 face entries + 13 edge entries, minus the two sentinels
    assert_eq!(asm.component_first_pick_id(0).unwrap(), 0);
    assert_eq!(asm.component_first_pick_id(1).unwrap(), 24);
    assert_eq!(asm.component_first_pick_id(2).unwrap(), 48);
    // one-past-the-end yields the total id count
    assert_eq!(asm.component_first_pick_id(3).unwrap(), 72);
}

#[test]
fn pick_id_out_of_range_is_an_error() {
    let asm = sample_assembly();
    let err = asm.component_first_pick_id(4).unwrap_err();
    assert!(matches!(
        err,
        ViewerError::ComponentIndexOutOfBounds { index: 4, count: 3 }
    ));
}
