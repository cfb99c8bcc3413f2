//! Fit-Transform Solver Tests
//!
//! Tests for:
//! - BoundingBox accumulation (union of transformed part boxes)
//! - Flattest-axis selection and the z > y > x tie order
//! - Centering of the assembly box at the origin
//! - Fit-inside scaling against the target window
//! - Degenerate (zero-thickness) assemblies

use glam::{Mat4, Vec2, Vec3};

use asmview::geometry::{
    Assembly, Component, FIT_TARGET, assembly_bounds, box_part, fit_world_transform,
    sample_assembly,
};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn single_box(width: f32, height: f32, depth: f32) -> Assembly {
    Assembly {
        parts: vec![box_part(width, height, depth)],
        components: vec![Component {
            part_index: 0,
            placement: Mat4::IDENTITY,
        }],
    }
}

// ============================================================================
// Bounds accumulation
// ============================================================================

#[test]
fn bounds_of_single_centered_box() {
    let asm = single_box(4.0, 2.0, 6.0);
    let bounds = assembly_bounds(&asm);
    assert!(vec3_approx(bounds.min, Vec3::new(-2.0, -1.0, -3.0)));
    assert!(vec3_approx(bounds.max, Vec3::new(2.0, 1.0, 3.0)));
}

#[test]
fn bounds_union_over_placed_components() {
    let asm = sample_assembly();
    let bounds = assembly_bounds(&asm);
    // plate 8 x 0.5 x 6 at origin, posts 1 x 3 x 1 at (+-2.5, 1.75, 0)
    assert!(vec3_approx(bounds.min, Vec3::new(-4.0, -0.25, -3.0)));
    assert!(vec3_approx(bounds.max, Vec3::new(4.0, 3.25, 3.0)));
}

#[test]
fn bounds_follow_component_translation() {
    let mut asm = single_box(2.0, 2.0, 2.0);
    asm.components[0].placement = Mat4::from_translation(Vec3::new(10.0, -5.0, 0.0));
    let bounds = assembly_bounds(&asm);
    assert!(vec3_approx(bounds.center(), Vec3::new(10.0, -5.0, 0.0)));
}

// ============================================================================
// Axis selection
// ============================================================================

#[test]
fn flattest_z_maps_to_view_axis_identity_basis() {
    // z thinnest: forward z, up y, so the basis is the identity.
    let asm = single_box(4.0, 3.0, 2.0);
    let world = fit_world_transform(&asm, FIT_TARGET);

    // scale = min(16/4, 12/3) = 4
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(1.0, 0.0, 0.0)),
        Vec3::new(4.0, 0.0, 0.0)
    ));
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.0, 1.0, 0.0)),
        Vec3::new(0.0, 4.0, 0.0)
    ));
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.0, 0.0, 1.0)),
        Vec3::new(0.0, 0.0, 4.0)
    ));
}

#[test]
fn flattest_y_swings_model_x_to_screen_y() {
    // y thinnest: forward y, up x. Model z lands on screen x, model x on
    // screen y, model y on the depth axis.
    let asm = single_box(2.0, 1.0, 5.0);
    let world = fit_world_transform(&asm, FIT_TARGET);

    // screen extents: x from model z (5), y from model x (2)
    // scale = min(16/5, 12/2) = 3.2
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.0, 0.0, 2.5)),
        Vec3::new(8.0, 0.0, 0.0)
    ));
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(1.0, 0.0, 0.0)),
        Vec3::new(0.0, 3.2, 0.0)
    ));
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.0, 0.5, 0.0)),
        Vec3::new(0.0, 0.0, 1.6)
    ));
}

#[test]
fn flattest_x_swings_model_y_to_screen_x() {
    // x thinnest: forward x, up z. Model y lands on screen x, model z on
    // screen y.
    let asm = single_box(1.0, 4.0, 6.0);
    let world = fit_world_transform(&asm, FIT_TARGET);

    // screen extents: x from model y (4), y from model z (6)
    // scale = min(16/4, 12/6) = 2
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.0, 2.0, 0.0)),
        Vec3::new(4.0, 0.0, 0.0)
    ));
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.0, 0.0, 3.0)),
        Vec3::new(0.0, 6.0, 0.0)
    ));
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(0.5, 0.0, 0.0)),
        Vec3::new(0.0, 0.0, 1.0)
    ));
}

#[test]
fn exact_tie_prefers_z_then_y() {
    // Cube: all three extents tie; z must win, giving the identity basis.
    let cube = single_box(2.0, 2.0, 2.0);
    let world = fit_world_transform(&cube, FIT_TARGET);
    let p = world.transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!(approx(p.x, 0.0) && approx(p.y, 0.0) && p.z > 0.0);

    // y and z tie while x is larger; z still wins over y.
    let slab = single_box(5.0, 2.0, 2.0);
    let world = fit_world_transform(&slab, FIT_TARGET);
    let p = world.transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!(approx(p.x, 0.0) && approx(p.y, 0.0) && p.z > 0.0);
}

// ============================================================================
// Centering and scaling
// ============================================================================

#[test]
fn off_origin_assembly_is_centered() {
    let mut asm = single_box(2.0, 2.0, 2.0);
    asm.components[0].placement = Mat4::from_translation(Vec3::new(10.0, 3.0, -7.0));
    let world = fit_world_transform(&asm, FIT_TARGET);
    let center = assembly_bounds(&asm).center();
    assert!(vec3_approx(world.transform_point3(center), Vec3::ZERO));
}

#[test]
fn fitted_extent_fills_the_tighter_window_axis() {
    let asm = sample_assembly();
    let world = fit_world_transform(&asm, FIT_TARGET);
    let fitted = assembly_bounds(&asm).transformed_corners(&world);
    let size = fitted.size();
    // y thinnest; screen extents 6 x 8 scale by min(16/6, 12/8) = 1.5
    assert!(approx(size.x, 9.0));
    assert!(approx(size.y, 12.0));
    assert!(size.x <= FIT_TARGET.x + EPSILON);
    assert!(size.y <= FIT_TARGET.y + EPSILON);
}

#[test]
fn scale_applies_to_translation_too() {
    // Centering must survive the fold-in of the scale factor.
    let mut asm = single_box(4.0, 3.0, 2.0);
    asm.components[0].placement = Mat4::from_translation(Vec3::new(100.0, 0.0, 0.0));
    let world = fit_world_transform(&asm, FIT_TARGET);
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(100.0, 0.0, 0.0)),
        Vec3::ZERO
    ));
}

#[test]
fn custom_target_window() {
    let asm = single_box(4.0, 3.0, 2.0);
    let world = fit_world_transform(&asm, Vec2::new(8.0, 6.0));
    // scale = min(8/4, 6/3) = 2
    assert!(vec3_approx(
        world.transform_point3(Vec3::new(2.0, 0.0, 0.0)),
        Vec3::new(4.0, 0.0, 0.0)
    ));
}

#[test]
fn zero_thickness_assembly_fits_without_nan() {
    // A sheet with zero depth: z wins flattest selection, and its zero
    // extent never enters the scale computation.
    let asm = single_box(4.0, 3.0, 0.0);
    let world = fit_world_transform(&asm, FIT_TARGET);
    let p = world.transform_point3(Vec3::new(2.0, 1.5, 0.0));
    assert!(p.is_finite());
    // scale = min(16/4, 12/3) = 4
    assert!(vec3_approx(p, Vec3::new(8.0, 6.0, 0.0)));
}
