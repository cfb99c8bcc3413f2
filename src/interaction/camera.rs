use glam::Vec2;

use super::keys::{InteractionMode, ModifierMask};

/// Orbit accumulation per pixel of cursor travel, in degrees.
pub const ORBIT_SENSITIVITY: f32 = 0.8;
/// Pan accumulation per pixel, in normalized clip units.
pub const PAN_SENSITIVITY: f32 = 0.002;
/// Zoom change per scroll-delta unit, in degrees of vertical field of view.
pub const ZOOM_SENSITIVITY: f32 = 0.01;
/// Default vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 60.0;

// The projection degenerates (or inverts) at exactly 0 and 180 degrees, so
// the zoom is snapped just inside the open interval.
const ZOOM_FLOOR: f32 = 0.001;
const ZOOM_CEILING: f32 = 179.99;

/// A click-without-drag on the primary button; picking is resolved by an
/// external collaborator, this just carries the cursor position to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRequest {
    pub x: f32,
    pub y: f32,
}

/// Accumulated orbit/zoom/pan state plus the held-modifier mask.
///
/// Mutation never blocks and never allocates; the viewer folds the
/// accumulators into its matrices at the start of the next frame. The state
/// resets to defaults on every geometry replacement and otherwise persists
/// across frames.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// Orbit yaw accumulator, degrees.
    pub yaw: f32,
    /// Orbit pitch accumulator, degrees.
    pub pitch: f32,
    /// Vertical field of view, degrees, inside (0, 180).
    pub zoom: f32,
    /// Pan offset in normalized clip units.
    pub pan: Vec2,

    held: ModifierMask,
    anchor: Vec2,
    dragged: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: DEFAULT_ZOOM,
            pan: Vec2::ZERO,
            held: ModifierMask::empty(),
            anchor: Vec2::ZERO,
            dragged: false,
        }
    }

    /// Back to defaults; called on every geometry replacement.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn held(&self) -> ModifierMask {
        self.held
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        InteractionMode::from_mask(self.held)
    }

    pub fn pointer_down(&mut self, code: ModifierMask, x: f32, y: f32) {
        self.anchor = Vec2::new(x, y);
        self.dragged = false;
        self.held |= code;
    }

    /// Releases a button. A primary-button release with no other code held
    /// and no drag in between is a selection gesture and yields a
    /// [`PickRequest`] for the external picking collaborator.
    pub fn pointer_up(&mut self, code: ModifierMask, x: f32, y: f32) -> Option<PickRequest> {
        let pick = if code == ModifierMask::PRIMARY
            && self.held == ModifierMask::PRIMARY
            && !self.dragged
        {
            Some(PickRequest { x, y })
        } else {
            None
        };
        self.held &= !code;
        pick
    }

    /// Accumulates orbit or pan from the cursor delta, depending on the
    /// current mode. The vertical delta is inverted: screen y grows
    /// downward, pitch grows upward. The drag anchor always follows the
    /// cursor, even while idle.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        let dx = pos.x - self.anchor.x;
        let dy = self.anchor.y - pos.y;
        self.anchor = pos;

        if (dx != 0.0 || dy != 0.0) && !self.held.is_empty() {
            self.dragged = true;
        }

        match self.mode() {
            InteractionMode::Orbiting => {
                self.yaw += dx * ORBIT_SENSITIVITY;
                self.pitch += dy * ORBIT_SENSITIVITY;
            }
            InteractionMode::Panning => {
                self.pan += Vec2::new(dx, dy) * PAN_SENSITIVITY;
            }
            InteractionMode::Idle => {}
        }
    }

    /// More scroll zooms out (widens the field of view proxy). The result
    /// is snapped just inside (0, 180) degrees.
    pub fn scroll(&mut self, delta: f32) {
        self.zoom -= delta * ZOOM_SENSITIVITY;
        if self.zoom <= 0.0 {
            self.zoom = ZOOM_FLOOR;
        }
        if self.zoom >= 180.0 {
            self.zoom = ZOOM_CEILING;
        }
    }

    pub fn key_down(&mut self, code: ModifierMask) {
        self.held |= code;
    }

    pub fn key_up(&mut self, code: ModifierMask) {
        self.held &= !code;
    }
}
