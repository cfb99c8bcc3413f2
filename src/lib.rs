#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod errors;
pub mod geometry;
pub mod interaction;
pub mod renderer;
pub mod viewer;

#[cfg(feature = "winit")]
pub mod app;

pub use errors::{Result, ViewerError};
pub use geometry::{Assembly, BoundingBox, Component, ComponentSource, Part, PartSource};
pub use interaction::{CameraState, InteractionMode, ModifierMask, PickRequest};
pub use renderer::settings::ViewerSettings;
pub use viewer::Viewer;

#[cfg(feature = "winit")]
pub use app::App;
