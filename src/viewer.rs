//! The viewer: owns the GPU context, pipelines, uniform buffers and the
//! installed assembly, and drives per-frame rendering from the camera state.

use glam::{Mat3A, Mat4};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use wgpu::CurrentSurfaceTexture;

use crate::errors::Result;
use crate::geometry::{
    Assembly, ComponentSource, PartSource, FIT_TARGET, fit_world_transform,
};
use crate::interaction::{CameraState, ModifierMask, PickRequest};
use crate::renderer::{
    FrameSlot, FrameUniforms, GpuContext, ModelBuffer, PartBuffers, Pipelines,
    ViewerSettings, frame_bind_group_layout, projection_matrix, view_matrix,
};

/// Shaded face tint: the neutral CAD grey (150/255).
const FACE_TINT: [f32; 4] = [0.588_235_3, 0.588_235_3, 0.588_235_3, 1.0];
/// Edge line tint.
const LINE_TINT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub struct Viewer {
    context: GpuContext,
    pipelines: Pipelines,
    frame_face: FrameSlot,
    frame_line: FrameSlot,
    models: ModelBuffer,

    assembly: Option<Assembly>,
    part_buffers: Option<PartBuffers>,
    fit_world: Mat4,
    projection: Mat4,

    pub camera: CameraState,
    draw_edges: bool,
    first_frame: bool,
    clear_color: wgpu::Color,
}

impl Viewer {
    pub async fn new<W>(
        window: W,
        settings: &ViewerSettings,
        width: u32,
        height: u32,
    ) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let context = GpuContext::new(window, settings, width, height).await?;

        let frame_layout = frame_bind_group_layout(&context.device);
        let models = ModelBuffer::new(&context.device);
        let pipelines = Pipelines::build(
            &context.device,
            context.config.format,
            context.depth_format,
            &frame_layout,
            models.layout(),
            settings.shader_root.as_deref(),
        )?;

        let frame_face = FrameSlot::new(&context.device, &frame_layout, "Face Frame Uniforms");
        let frame_line = FrameSlot::new(&context.device, &frame_layout, "Line Frame Uniforms");

        let camera = CameraState::default();
        let projection = projection_matrix(camera.zoom, context.aspect_ratio());
        let clear_color = settings.clear_color;

        Ok(Self {
            context,
            pipelines,
            frame_face,
            frame_line,
            models,
            assembly: None,
            part_buffers: None,
            fit_world: Mat4::IDENTITY,
            projection,
            camera,
            draw_edges: settings.draw_edges,
            first_frame: true,
            clear_color,
        })
    }

    /// Resizing only changes the projection aspect; the fit transform stays
    /// pinned to the fixed fit window so the model does not rescale.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.projection = projection_matrix(self.camera.zoom, self.context.aspect_ratio());
    }

    /// Validates and installs a new assembly from borrowed source data,
    /// replacing whatever is currently shown.
    pub fn replace_geometry(
        &mut self,
        parts: &[PartSource<'_>],
        components: &[ComponentSource<'_>],
    ) -> Result<()> {
        let assembly = Assembly::from_sources(parts, components)?;
        self.install_assembly(assembly);
        Ok(())
    }

    pub fn install_assembly(&mut self, assembly: Assembly) {
        self.camera.reset();
        self.projection = projection_matrix(self.camera.zoom, self.context.aspect_ratio());
        self.fit_world = fit_world_transform(&assembly, FIT_TARGET);

        // Drop the old buffers before uploading the new set.
        self.part_buffers = None;
        self.part_buffers = Some(PartBuffers::build(&self.context.device, &assembly));
        self.assembly = Some(assembly);
    }

    pub fn clear_geometry(&mut self) {
        self.part_buffers = None;
        self.assembly = None;
        self.fit_world = Mat4::IDENTITY;
    }

    #[must_use]
    pub fn assembly(&self) -> Option<&Assembly> {
        self.assembly.as_ref()
    }

    pub fn set_draw_edges(&mut self, draw_edges: bool) {
        self.draw_edges = draw_edges;
    }

    // ------------------------------------------------------------------
    // Input forwarding
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, mask: ModifierMask, x: f32, y: f32) {
        self.camera.pointer_down(mask, x, y);
    }

    /// Returns a pick request when this release completes an undragged
    /// primary click.
    pub fn pointer_up(&mut self, mask: ModifierMask, x: f32, y: f32) -> Option<PickRequest> {
        self.camera.pointer_up(mask, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.camera.pointer_move(x, y);
    }

    pub fn scroll(&mut self, delta: f32) {
        self.camera.scroll(delta);
        self.projection = projection_matrix(self.camera.zoom, self.context.aspect_ratio());
    }

    pub fn key_down(&mut self, mask: ModifierMask) {
        self.camera.key_down(mask);
    }

    pub fn key_up(&mut self, mask: ModifierMask) {
        self.camera.key_up(mask);
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render_frame(&mut self) {
        // A startup frame with no geometry yet is dropped entirely (no
        // clear), avoiding an initial empty-state flash. With an assembly
        // already installed the first frame renders normally.
        if defer_startup_frame(self.first_frame, self.assembly.is_some()) {
            self.first_frame = false;
            return;
        }

        let world = Mat4::from_rotation_x(self.camera.pitch.to_radians())
            * Mat4::from_rotation_y(self.camera.yaw.to_radians())
            * self.fit_world;
        let normal_matrix = Mat3A::from_mat4(world.inverse().transpose());

        let base = FrameUniforms {
            view: view_matrix(),
            proj: self.projection,
            world,
            normal_matrix,
            tint: FACE_TINT.into(),
            pan: self.camera.pan,
            _pad: glam::Vec2::ZERO,
        };
        self.frame_face.write(&self.context.queue, &base);
        self.frame_line.write(
            &self.context.queue,
            &FrameUniforms {
                tint: LINE_TINT.into(),
                ..base
            },
        );

        if let Some(assembly) = &self.assembly {
            let placements: Vec<Mat4> =
                assembly.components.iter().map(|c| c.placement).collect();
            self.models
                .write(&self.context.device, &self.context.queue, &placements);
        }

        let frame = match self.context.surface.get_current_texture() {
            CurrentSurfaceTexture::Success(frame) | CurrentSurfaceTexture::Suboptimal(frame) => {
                frame
            }
            CurrentSurfaceTexture::Lost | CurrentSurfaceTexture::Outdated => {
                log::warn!("surface lost, reconfiguring");
                let (w, h) = (self.context.config.width, self.context.config.height);
                self.context.resize(w, h);
                return;
            }
            err => {
                log::error!("failed to acquire surface texture: {err:?}");
                return;
            }
        };
        let color_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewer Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Viewer Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &color_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.context.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let (Some(assembly), Some(buffers)) = (&self.assembly, &self.part_buffers) {
                pass.set_pipeline(&self.pipelines.face);
                pass.set_bind_group(0, &self.frame_face.bind_group, &[]);
                for (i, component) in assembly.components.iter().enumerate() {
                    let Some(set) = buffers.get(component.part_index) else {
                        log::warn!("no buffers for part {}, skipping draw", component.part_index);
                        continue;
                    };
                    let part = &assembly.parts[component.part_index as usize];
                    pass.set_bind_group(1, &self.models.bind_group, &[
                        self.models.offset(i as u32),
                    ]);
                    pass.set_vertex_buffer(0, set.vertex.slice(..));
                    pass.set_index_buffer(set.index.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(part.face_range(), 0, 0..1);
                }

                if self.draw_edges {
                    pass.set_pipeline(&self.pipelines.line);
                    pass.set_bind_group(0, &self.frame_line.bind_group, &[]);
                    for (i, component) in assembly.components.iter().enumerate() {
                        let part = &assembly.parts[component.part_index as usize];
                        if part.edge_count == 0 {
                            continue;
                        }
                        let Some(set) = buffers.get(component.part_index) else {
                            continue;
                        };
                        pass.set_bind_group(1, &self.models.bind_group, &[
                            self.models.offset(i as u32),
                        ]);
                        pass.set_vertex_buffer(0, set.vertex.slice(..));
                        pass.set_index_buffer(set.index.slice(..), wgpu::IndexFormat::Uint32);
                        pass.draw_indexed(part.edge_range(), 0, 0..1);
                    }
                }
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}

/// Whether a frame request should be dropped outright. Only the very first
/// frame qualifies, and only while no geometry has ever been supplied.
fn defer_startup_frame(first_frame: bool, has_assembly: bool) -> bool {
    first_frame && !has_assembly
}
