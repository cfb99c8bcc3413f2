//! Winit application shell: owns the window and the [`Viewer`], and maps
//! window-system input events onto the viewer's input surface.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::geometry::sample_assembly;
use crate::interaction::ModifierMask;
use crate::renderer::ViewerSettings;
use crate::viewer::Viewer;

/// One scroll line in wheel-delta units, matching the conventional mouse
/// wheel step.
const LINE_DELTA_UNITS: f32 = 120.0;

#[derive(Default)]
pub struct App {
    window: Option<Arc<Window>>,
    viewer: Option<Viewer>,
    settings: ViewerSettings,
    cursor: (f32, f32),
    ctrl_held: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Initializes logging, builds the event loop and runs until exit.
    pub fn run(mut self) -> Result<()> {
        env_logger::init();
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.is_some() {
            return;
        }

        let attributes = Window::default_attributes().with_title("asmview");
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let viewer = pollster::block_on(Viewer::new(
            window.clone(),
            &self.settings,
            size.width,
            size.height,
        ));
        let mut viewer = match viewer {
            Ok(viewer) => viewer,
            Err(err) => {
                log::error!("failed to initialize viewer: {err}");
                event_loop.exit();
                return;
            }
        };

        viewer.install_assembly(sample_assembly());
        window.request_redraw();

        self.window = Some(window);
        self.viewer = Some(viewer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                viewer.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                viewer.pointer_move(self.cursor.0, self.cursor.1);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let mask = match button {
                    MouseButton::Left => ModifierMask::PRIMARY,
                    MouseButton::Middle => ModifierMask::MIDDLE,
                    _ => return,
                };
                let (x, y) = self.cursor;
                match state {
                    ElementState::Pressed => viewer.pointer_down(mask, x, y),
                    ElementState::Released => {
                        if let Some(pick) = viewer.pointer_up(mask, x, y) {
                            log::info!("pick requested at ({}, {})", pick.x, pick.y);
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let units = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_DELTA_UNITS,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                viewer.scroll(units);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let ctrl = modifiers.state().control_key();
                if ctrl != self.ctrl_held {
                    if ctrl {
                        viewer.key_down(ModifierMask::SECONDARY);
                    } else {
                        viewer.key_up(ModifierMask::SECONDARY);
                    }
                    self.ctrl_held = ctrl;
                }
            }
            WindowEvent::RedrawRequested => {
                viewer.render_frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
