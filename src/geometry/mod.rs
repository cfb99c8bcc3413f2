//! Assembly geometry model.
//!
//! An [`Assembly`] is the full drawable scene: a set of reusable [`Part`]
//! meshes plus placed instances ([`Component`]s). The host hands geometry in
//! as borrowed flat views ([`PartSource`] / [`ComponentSource`]); the model
//! copies and validates everything it keeps, so the borrows never outlive
//! the update call.

pub mod assembly;
pub mod bounds;
pub mod fit;
pub mod primitives;

pub use assembly::{Assembly, Component, ComponentSource, Part, PartSource};
pub use bounds::BoundingBox;
pub use fit::{FIT_TARGET, assembly_bounds, fit_world_transform};
pub use primitives::{box_part, sample_assembly};
