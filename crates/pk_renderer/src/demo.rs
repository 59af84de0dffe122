//! The built-in demonstration scene: three spheres on a large ground sphere,
//! lit by two emissive spheres.

use crate::{Camera, Color, Material, Scene};
use pk_math::Vector3;

pub const CAMERA_VERTICAL_FOV: f64 = 45.0;
pub const CAMERA_POSITION: Vector3 = Vector3::new(-4.0, -3.5, 45.0);
pub const CAMERA_FORWARD: Vector3 = Vector3::new(-0.08, -0.0461, -0.998);
pub const CAMERA_NEAR_CLIP: f64 = 0.1;
pub const CAMERA_FAR_CLIP: f64 = 100.0;

/// Build the demo scene. Material `i` is used by sphere `i`.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    let lime = scene.add_material(Material::new(
        Color::new(0.1953125, 0.80078125, 0.1953125),
        0.0,
        0.0,
        Color::ZERO,
        0.0,
    ));
    let red = scene.add_material(Material::new(
        Color::new(0.85, 0.0, 0.0),
        0.1,
        0.1,
        Color::new(0.35, 0.0, 0.0),
        0.0,
    ));
    let blue = scene.add_material(Material::new(
        Color::new(0.0, 0.0, 0.85),
        0.1,
        0.1,
        Color::ZERO,
        0.0,
    ));
    let light0 = scene.add_material(Material::new(
        Color::splat(0.8),
        0.1,
        0.1,
        Color::splat(0.8),
        5.0,
    ));
    let light1 = scene.add_material(Material::new(
        Color::splat(0.4),
        0.1,
        0.1,
        Color::splat(0.4),
        3.0,
    ));

    scene.add_sphere(Vector3::new(-1.5, 0.0, 0.0), 2.0, lime);
    // Ground
    scene.add_sphere(Vector3::new(0.0, -101.0, 0.0), 100.0, red);
    scene.add_sphere(Vector3::new(2.0, 0.0, 0.0), 0.78, blue);
    scene.add_sphere(Vector3::new(3.3, 4.0, 4.0), 3.5, light0);
    scene.add_sphere(Vector3::new(-10.0, 5.0, -50.0), 1.5, light1);

    scene
}

/// Move `camera` to the demo pose. Matrices and ray directions are not
/// recalculated.
pub fn apply_demo_camera(camera: &mut Camera) {
    camera.set_vertical_fov(CAMERA_VERTICAL_FOV);
    camera.set_position(CAMERA_POSITION);
    camera.set_forward_direction(CAMERA_FORWARD);
    camera.set_near_clip(CAMERA_NEAR_CLIP);
    camera.set_far_clip(CAMERA_FAR_CLIP);
}
