//! Error Types
//!
//! The main error type [`ViewerError`] covers all failure modes:
//! - GPU initialization failures (fatal setup errors)
//! - Shader source resolution
//! - Geometry validation at the update boundary
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, ViewerError>`.

use thiserror::Error;

/// The main error type for the viewer.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // GPU & Window Errors (fatal setup failures)
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    /// A required shader source could not be resolved, neither from the
    /// configured shader root nor from the embedded sources.
    #[error("Shader source not found: {0}")]
    ShaderNotFound(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ========================================================================
    // Geometry Validation Errors (reject the update, keep the old generation)
    // ========================================================================
    /// The supplied assembly contains no components.
    #[error("Assembly has no components")]
    EmptyAssembly,

    /// A component references a part index outside the supplied part list.
    #[error("Component {component} references part {part_index}, but only {part_count} parts were supplied")]
    PartIndexOutOfBounds {
        /// Index of the offending component
        component: usize,
        /// The invalid part index it carries
        part_index: u32,
        /// Number of parts actually supplied
        part_count: usize,
    },

    /// A part's index stream references a vertex outside its vertex list.
    #[error("Part {part}: index {index} is out of range for {vertex_count} vertices")]
    VertexIndexOutOfBounds {
        /// Index of the offending part
        part: usize,
        /// The invalid vertex index
        index: u32,
        /// Number of vertices in the part
        vertex_count: usize,
    },

    /// A part's face or edge draw range does not fit inside its index stream.
    #[error("Part {part}: {kind} range {start}..{end} exceeds index stream length {len}")]
    IndexRangeOutOfBounds {
        /// Index of the offending part
        part: usize,
        /// Which range was invalid ("face" or "edge")
        kind: &'static str,
        /// Range start
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// Length of the combined index stream
        len: usize,
    },

    /// A component index passed to pick-id bookkeeping is out of range.
    #[error("Component index {index} is out of range ({count} components)")]
    ComponentIndexOutOfBounds {
        /// The invalid component index
        index: usize,
        /// Number of components in the assembly
        count: usize,
    },
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
