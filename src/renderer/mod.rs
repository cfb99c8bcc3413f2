//! GPU backend: context, per-generation part buffers, pipelines, uniforms.

pub mod buffers;
pub mod context;
pub mod pipeline;
pub mod settings;
pub mod uniforms;

pub use buffers::{PartBufferSet, PartBuffers};
pub use context::GpuContext;
pub use pipeline::{Pipelines, load_shader_source};
pub use settings::ViewerSettings;
pub use uniforms::{
    FrameSlot, FrameUniforms, ModelBuffer, ModelUniforms, frame_bind_group_layout,
    model_bind_group_layout, projection_matrix, view_matrix,
};
