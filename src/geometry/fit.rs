//! Fit-Transform Solver.
//!
//! Computes a world transform that centers an assembly at the origin, maps
//! its flattest axis onto the view (depth) axis, and uniformly scales it so
//! the whole bounding box fits inside a target viewport window.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::assembly::Assembly;
use super::bounds::BoundingBox;

/// World-space window the fit transform targets. The view matrix and
/// projection near/far planes are tuned to this window.
pub const FIT_TARGET: Vec2 = Vec2::new(16.0, 12.0);

/// Union bounding box of the assembly: each referenced part's local box
/// corners transformed by the component placement, min/max-accumulated.
#[must_use]
pub fn assembly_bounds(assembly: &Assembly) -> BoundingBox {
    let mut bounds = BoundingBox::empty();
    for comp in &assembly.components {
        let part = &assembly.parts[comp.part_index as usize];
        bounds = bounds.union(&part.bounds.transformed_corners(&comp.placement));
    }
    bounds
}

/// Computes the fit transform for an assembly against a target extent.
///
/// The assembly must have at least one component; [`Assembly::from_sources`]
/// guarantees this for any assembly the viewer holds. Zero-volume extents on
/// an axis are expected (sheet-like assemblies) and simply win the
/// flattest-axis selection.
#[must_use]
pub fn fit_world_transform(assembly: &Assembly, target: Vec2) -> Mat4 {
    let bounds = assembly_bounds(assembly);
    let center = bounds.center();
    let size = bounds.size();

    // Flattest axis becomes "forward" (the view depth axis). Comparison
    // order is z, then y, then x, so exact ties prefer z over y over x.
    // The paired "up" axis is a static table: z->y, y->x, x->z.
    let t = size.z.min(size.x.min(size.y));
    let (forward, up) = if t == size.z {
        (Vec3::Z, Vec3::Y)
    } else if t == size.y {
        (Vec3::Y, Vec3::X)
    } else {
        (Vec3::X, Vec3::Z)
    };

    let mut world = centered_basis(center, forward, up);

    // Scale-to-fit: project the box corners through the partial transform,
    // take the smaller of the two axis-fit candidates (fit inside, never
    // crop), and fold the uniform scale into the linear columns *and* the
    // translation column so the centered origin stays put.
    let fitted = bounds.transformed_corners(&world);
    let extent = fitted.size();
    let scale = (target.x / extent.x).min(target.y / extent.y);

    world.x_axis *= scale;
    world.y_axis *= scale;
    world.z_axis *= scale;
    world.w_axis = (world.w_axis.truncate() * scale).extend(1.0);
    world
}

/// Row-orthonormal basis with the box center translated to the origin.
///
/// The basis vectors form the matrix *rows* (glam stores columns, so the
/// columns below are the transposed basis). Getting this transposition wrong
/// silently flips chirality, so it is spelled out explicitly rather than
/// assembled from a library look-at.
fn centered_basis(center: Vec3, forward: Vec3, up: Vec3) -> Mat4 {
    let z = forward.normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Mat4::from_cols(
        Vec4::new(x.x, y.x, z.x, 0.0),
        Vec4::new(x.y, y.y, z.y, 0.0),
        Vec4::new(x.z, y.z, z.z, 0.0),
        Vec4::new(-x.dot(center), -y.dot(center), -z.dot(center), 1.0),
    )
}
