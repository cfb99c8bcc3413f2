//! Uniform data layouts and the buffers that carry them.
//!
//! Two bind groups: group 0 is the per-frame block (view/projection/world/
//! normal-matrix/pan/tint), written once per frame per pass; group 1 is the
//! per-component placement, packed into one dynamic-offset uniform buffer so
//! each draw call binds its slice without rebinding the group.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3A, Mat4, Vec2, Vec3, Vec4};

// ============================================================================
// Pod layouts (must match the WGSL structs field for field)
// ============================================================================

/// Per-frame uniforms. `normal_matrix` is the upper 3x3 of the inverse
/// transpose of `world`; `Mat3A` matches WGSL's 16-byte column stride for
/// `mat3x3<f32>`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub proj: Mat4,
    pub world: Mat4,
    pub normal_matrix: Mat3A,
    pub tint: Vec4,
    /// Pan offset in normalized clip units, applied post-projection.
    pub pan: Vec2,
    pub _pad: Vec2,
}

/// Per-component uniforms: the placement matrix only.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ModelUniforms {
    pub placement: Mat4,
}

/// Fixed eye position at (0, 0, -20) looking at the origin, +Y up. The fit
/// transform normalizes every assembly into this camera's frame.
#[must_use]
pub fn view_matrix() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, -20.0), Vec3::ZERO, Vec3::Y)
}

/// Perspective projection from the zoom accumulator (vertical fov degrees).
/// glam's `perspective_rh` targets wgpu's [0, 1] NDC depth range.
#[must_use]
pub fn projection_matrix(zoom_degrees: f32, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(zoom_degrees.to_radians(), aspect, 0.1, 100.0)
}

// ============================================================================
// Bind group layouts
// ============================================================================

pub fn frame_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Frame Uniforms Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

pub fn model_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Model Uniforms Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<ModelUniforms>() as u64
                ),
            },
            count: None,
        }],
    })
}

// ============================================================================
// Frame slot: one uniform buffer + bind group per pass
// ============================================================================

/// One per-frame uniform buffer with its bind group. The face and edge
/// passes each own a slot, differing only in tint.
pub struct FrameSlot {
    buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl FrameSlot {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    pub fn write(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

// ============================================================================
// Model buffer: dynamic-offset slices, one per component
// ============================================================================

/// Per-component placement matrices packed at the device's dynamic-offset
/// alignment. Grows geometrically; growth recreates buffer and bind group.
pub struct ModelBuffer {
    buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    layout: wgpu::BindGroupLayout,
    stride: u32,
    capacity: u32,
}

impl ModelBuffer {
    const INITIAL_CAPACITY: u32 = 128;

    pub fn new(device: &wgpu::Device) -> Self {
        let align = device.limits().min_uniform_buffer_offset_alignment as u64;
        let size = std::mem::size_of::<ModelUniforms>() as u64;
        let stride = size.div_ceil(align) * align;

        let layout = model_bind_group_layout(device);
        let (buffer, bind_group) =
            Self::create(device, &layout, stride, u64::from(Self::INITIAL_CAPACITY));

        Self {
            buffer,
            bind_group,
            layout,
            stride: stride as u32,
            capacity: Self::INITIAL_CAPACITY,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Dynamic offset for component slot `index`.
    #[must_use]
    pub fn offset(&self, index: u32) -> u32 {
        index * self.stride
    }

    /// Uploads all placements for the frame, growing the buffer if the
    /// component count exceeds the current capacity.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, placements: &[Mat4]) {
        let count = placements.len() as u32;
        if count > self.capacity {
            let new_capacity = (count * 2).max(Self::INITIAL_CAPACITY);
            log::info!(
                "model buffer expanding capacity: {} -> {}",
                self.capacity,
                new_capacity
            );
            self.buffer.destroy();
            let (buffer, bind_group) = Self::create(
                device,
                &self.layout,
                u64::from(self.stride),
                u64::from(new_capacity),
            );
            self.buffer = buffer;
            self.bind_group = bind_group;
            self.capacity = new_capacity;
        }

        let mut bytes = vec![0u8; placements.len() * self.stride as usize];
        for (i, placement) in placements.iter().enumerate() {
            let start = i * self.stride as usize;
            let uniforms = ModelUniforms { placement: *placement };
            bytes[start..start + std::mem::size_of::<ModelUniforms>()]
                .copy_from_slice(bytemuck::bytes_of(&uniforms));
        }
        queue.write_buffer(&self.buffer, 0, &bytes);
    }

    fn create(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        stride: u64,
        capacity: u64,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniforms"),
            size: stride * capacity,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model Uniforms"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ModelUniforms>() as u64),
                }),
            }],
        });
        (buffer, bind_group)
    }
}
