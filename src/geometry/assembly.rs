use glam::{Mat4, Vec4};
use log::debug;

use super::bounds::BoundingBox;
use crate::errors::{Result, ViewerError};

// ============================================================================
// Owned model (one geometry generation)
// ============================================================================

/// One reusable mesh: vertices plus a combined face+edge index stream.
///
/// `face_count` / `edge_count` are *drawable* element counts. The raw face
/// and edge index arrays the host produces each carry one trailing sentinel
/// element that does not describe a primitive; only their lengths are kept
/// here (`face_index_len` / `edge_index_len`), for pick-id bookkeeping.
#[derive(Debug, Clone)]
pub struct Part {
    /// Vertex positions (xyz + homogeneous w).
    pub vertices: Vec<Vec4>,
    /// Combined index stream: face (triangle-list) and edge (line-list) sections.
    pub indices: Vec<u32>,
    /// First face index within `indices`.
    pub face_start: u32,
    /// Drawable triangle-list element count.
    pub face_count: u32,
    /// First edge index within `indices`.
    pub edge_start: u32,
    /// Drawable line-list element count.
    pub edge_count: u32,
    /// Raw face index array length, including the sentinel.
    pub face_index_len: u32,
    /// Raw edge index array length, including the sentinel.
    pub edge_index_len: u32,
    /// Part-local axis-aligned bounding box.
    pub bounds: BoundingBox,
}

impl Part {
    #[must_use]
    pub fn face_range(&self) -> std::ops::Range<u32> {
        self.face_start..self.face_start + self.face_count
    }

    #[must_use]
    pub fn edge_range(&self) -> std::ops::Range<u32> {
        self.edge_start..self.edge_start + self.edge_count
    }
}

/// One placed instance of a part.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub part_index: u32,
    /// Placement matrix: part-local space into assembly space.
    pub placement: Mat4,
}

/// The full drawable scene for one geometry generation.
///
/// An `Assembly` exclusively owns its parts and components. Construction via
/// [`Assembly::from_sources`] validates every cross-reference, so the render
/// path can index parts without further checks. An assembly always has at
/// least one component.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub parts: Vec<Part>,
    pub components: Vec<Component>,
}

// ============================================================================
// Borrowed source views (update-call boundary)
// ============================================================================

/// Borrowed flat view of one part, valid only for the duration of the
/// geometry update call. Everything the viewer keeps is copied out.
#[derive(Debug, Clone, Copy)]
pub struct PartSource<'a> {
    pub vertices: &'a [Vec4],
    pub indices: &'a [u32],
    /// Raw per-face index array, including the trailing sentinel.
    pub face_indices: &'a [u32],
    /// Raw per-edge index array, including the trailing sentinel.
    pub edge_indices: &'a [u32],
    pub face_start: u32,
    pub face_count: u32,
    pub edge_start: u32,
    pub edge_count: u32,
    pub bounds: BoundingBox,
}

/// Borrowed view of one component instance.
#[derive(Debug, Clone, Copy)]
pub struct ComponentSource<'a> {
    pub part_index: u32,
    pub placement: &'a Mat4,
}

impl Assembly {
    /// Copies and validates a host-supplied assembly.
    ///
    /// Fails, without retaining anything, if the assembly is empty, a
    /// component references a missing part, a face/edge range does not fit
    /// inside its part's index stream, or any index references a missing
    /// vertex. The caller's previous generation stays intact on error.
    pub fn from_sources(parts: &[PartSource<'_>], components: &[ComponentSource<'_>]) -> Result<Self> {
        if components.is_empty() {
            return Err(ViewerError::EmptyAssembly);
        }

        for (i, comp) in components.iter().enumerate() {
            if comp.part_index as usize >= parts.len() {
                return Err(ViewerError::PartIndexOutOfBounds {
                    component: i,
                    part_index: comp.part_index,
                    part_count: parts.len(),
                });
            }
        }

        let mut owned_parts = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            validate_range(i, "face", part.face_start, part.face_count, part.indices.len())?;
            validate_range(i, "edge", part.edge_start, part.edge_count, part.indices.len())?;

            for &index in part.indices {
                if index as usize >= part.vertices.len() {
                    return Err(ViewerError::VertexIndexOutOfBounds {
                        part: i,
                        index,
                        vertex_count: part.vertices.len(),
                    });
                }
            }

            owned_parts.push(Part {
                vertices: part.vertices.to_vec(),
                indices: part.indices.to_vec(),
                face_start: part.face_start,
                face_count: part.face_count,
                edge_start: part.edge_start,
                edge_count: part.edge_count,
                face_index_len: part.face_indices.len() as u32,
                edge_index_len: part.edge_indices.len() as u32,
                bounds: part.bounds,
            });
        }

        let owned_components = components
            .iter()
            .map(|c| Component {
                part_index: c.part_index,
                placement: *c.placement,
            })
            .collect::<Vec<_>>();

        debug!(
            "assembly copied: {} parts, {} components",
            owned_parts.len(),
            owned_components.len()
        );

        Ok(Self {
            parts: owned_parts,
            components: owned_components,
        })
    }

    /// First pick id of a component: the sum of drawable face+edge element
    /// array entries of all preceding components. The raw arrays each carry
    /// one non-drawable sentinel, hence the `- 2` per component.
    ///
    /// Picking itself is resolved by an external collaborator; this only
    /// supplies the id offsets it needs.
    pub fn component_first_pick_id(&self, comp_index: usize) -> Result<u32> {
        if comp_index > self.components.len() {
            return Err(ViewerError::ComponentIndexOutOfBounds {
                index: comp_index,
                count: self.components.len(),
            });
        }
        let mut id = 0u32;
        for comp in &self.components[..comp_index] {
            let part = &self.parts[comp.part_index as usize];
            id += part.face_index_len + part.edge_index_len - 2;
        }
        Ok(id)
    }
}

fn validate_range(
    part: usize,
    kind: &'static str,
    start: u32,
    count: u32,
    len: usize,
) -> Result<()> {
    let start = start as usize;
    let end = start + count as usize;
    if end > len {
        return Err(ViewerError::IndexRangeOutOfBounds {
            part,
            kind,
            start,
            end,
            len,
        });
    }
    Ok(())
}
