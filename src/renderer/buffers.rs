//! Per-part GPU geometry buffers.

use wgpu::util::DeviceExt;

use crate::geometry::Assembly;

/// Vertex and index buffers for one part. Components referencing the same
/// part share a single set; instancing happens at draw time via the
/// placement uniform and index sub-ranges.
pub struct PartBufferSet {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
}

/// All part buffer sets for the installed assembly, indexed by part index.
pub struct PartBuffers {
    sets: Vec<PartBufferSet>,
}

impl PartBuffers {
    pub fn build(device: &wgpu::Device, assembly: &Assembly) -> Self {
        let sets = assembly
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("Part {i} Vertices")),
                    contents: bytemuck::cast_slice(&part.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("Part {i} Indices")),
                    contents: bytemuck::cast_slice(&part.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                PartBufferSet { vertex, index }
            })
            .collect();
        Self { sets }
    }

    #[must_use]
    pub fn get(&self, part_index: u32) -> Option<&PartBufferSet> {
        self.sets.get(part_index as usize)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl Drop for PartBuffers {
    fn drop(&mut self) {
        for set in &self.sets {
            set.vertex.destroy();
            set.index.destroy();
        }
    }
}
