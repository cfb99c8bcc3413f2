//! Camera / interaction state machine.
//!
//! The held-modifier bitmask is the machine's state; [`InteractionMode`]
//! makes the derived mode explicit without changing the externally observed
//! behavior of the mask.

pub mod camera;
pub mod keys;

pub use camera::{
    CameraState, DEFAULT_ZOOM, ORBIT_SENSITIVITY, PAN_SENSITIVITY, PickRequest,
    ZOOM_SENSITIVITY,
};
pub use keys::{InteractionMode, ModifierMask};
