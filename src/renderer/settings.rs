use std::path::PathBuf;

/// Viewer construction settings.
///
/// `shader_root` points at an optional directory of WGSL overrides; sources
/// not found there fall back to the embedded defaults.
#[derive(Debug, Clone)]
pub struct ViewerSettings {
    pub power_preference: wgpu::PowerPreference,
    pub vsync: bool,
    pub clear_color: wgpu::Color,
    pub shader_root: Option<PathBuf>,
    /// Draw the edge/line pass on top of faces.
    pub draw_edges: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            vsync: true,
            clear_color: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            shader_root: None,
            draw_edges: false,
        }
    }
}
