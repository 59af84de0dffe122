//! Camera for ray generation.
//!
//! The camera caches one world-space direction per viewport pixel. The cache
//! is rebuilt by [`Camera::on_update`] and [`Camera::on_resize`]; the pose
//! setters only store values.

use crate::error::RenderResult;
use pk_math::{Matrix4x4, Vector2, Vector3};

/// World up axis used for the view matrix and yaw.
const WORLD_UP: Vector3 = Vector3::Y;

/// Radians of rotation per pixel of mouse movement.
pub const ROTATION_SPEED: f64 = 0.0006;
/// World units per second of held movement keys.
pub const MOVE_SPEED: f64 = 5.0;

/// Directional movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Backward,
    Left,
    Right,
}

impl Key {
    const COUNT: usize = 4;

    fn slot(self) -> usize {
        match self {
            Key::Forward => 0,
            Key::Backward => 1,
            Key::Left => 2,
            Key::Right => 3,
        }
    }
}

/// Input state consumed by [`Camera::on_update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraInput {
    held: [bool; Key::COUNT],
    look_active: bool,
    last_mouse_position: Vector2,
    current_mouse_position: Vector2,
}

impl CameraInput {
    /// Input with no keys held and the mouse resting at `center`.
    pub fn new(center: Vector2) -> Self {
        Self {
            held: [false; Key::COUNT],
            look_active: false,
            last_mouse_position: center,
            current_mouse_position: center,
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.held[key.slot()]
    }

    pub fn is_look_active(&self) -> bool {
        self.look_active
    }

    pub fn last_mouse_position(&self) -> Vector2 {
        self.last_mouse_position
    }

    pub fn current_mouse_position(&self) -> Vector2 {
        self.current_mouse_position
    }

    /// Mouse movement since the last update; the last position catches up.
    fn take_mouse_delta(&mut self) -> Vector2 {
        let delta = self.current_mouse_position - self.last_mouse_position;
        self.last_mouse_position = self.current_mouse_position;
        delta
    }
}

/// Perspective camera with cached per-pixel ray directions.
#[derive(Debug, Clone)]
pub struct Camera {
    projection: Matrix4x4,
    view: Matrix4x4,
    inverse_projection: Matrix4x4,
    inverse_view: Matrix4x4,

    position: Vector3,
    forward_direction: Vector3,

    viewport_width: u32,
    viewport_height: u32,
    vertical_fov: f64, // degrees
    near_clip: f64,
    far_clip: f64,

    input: CameraInput,
    ray_directions: Vec<Vector3>,
}

impl Camera {
    /// Create a camera with default pose for a `width` x `height` viewport.
    ///
    /// All matrices start as identity and the ray directions are zero until
    /// the first update or resize.
    pub fn new(width: u32, height: u32) -> Self {
        let center = Vector2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);

        Self {
            projection: Matrix4x4::IDENTITY,
            view: Matrix4x4::IDENTITY,
            inverse_projection: Matrix4x4::IDENTITY,
            inverse_view: Matrix4x4::IDENTITY,
            position: Vector3::new(0.0, 0.0, 2.0),
            forward_direction: Vector3::new(0.0, 0.0, -1.0),
            viewport_width: width,
            viewport_height: height,
            vertical_fov: 45.0,
            near_clip: 0.1,
            far_clip: 100.0,
            input: CameraInput::new(center),
            ray_directions: vec![Vector3::ZERO; width as usize * height as usize],
        }
    }

    /// Apply pending input and rebuild view and ray directions.
    ///
    /// `dt` is the elapsed time in seconds. Always reports that the camera
    /// changed.
    pub fn on_update(&mut self, dt: f64) -> bool {
        let delta = self.input.take_mouse_delta();
        let right = self.forward_direction.cross(WORLD_UP).normalize();

        if self.input.look_active && delta != Vector2::ZERO {
            let pitch = delta.y * ROTATION_SPEED;
            let yaw = delta.x * ROTATION_SPEED;
            self.forward_direction = self
                .forward_direction
                .rotate_about(right, -pitch)
                .rotate_about(WORLD_UP, -yaw)
                .normalize();
        }

        let step = MOVE_SPEED * dt;
        if self.input.is_pressed(Key::Forward) {
            self.position += self.forward_direction * step;
        }
        if self.input.is_pressed(Key::Backward) {
            self.position -= self.forward_direction * step;
        }
        if self.input.is_pressed(Key::Right) {
            self.position += right * step;
        }
        if self.input.is_pressed(Key::Left) {
            self.position -= right * step;
        }

        self.recalculate_view();
        self.recalculate_ray_directions();
        true
    }

    /// Resize the viewport, rebuilding projection and ray directions.
    ///
    /// On error the camera keeps its previous size, matrices and directions.
    pub fn on_resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        let projection = self.projection_for(width, height)?;

        self.viewport_width = width;
        self.viewport_height = height;
        self.set_projection(projection);
        self.recalculate_ray_directions();
        Ok(())
    }

    pub fn recalculate_projection(&mut self) -> RenderResult<()> {
        let projection = self.projection_for(self.viewport_width, self.viewport_height)?;
        self.set_projection(projection);
        Ok(())
    }

    fn projection_for(&self, width: u32, height: u32) -> RenderResult<Matrix4x4> {
        let aspect = f64::from(width) / f64::from(height);
        let projection = Matrix4x4::perspective_fov(
            self.vertical_fov.to_radians(),
            aspect,
            self.near_clip,
            self.far_clip,
        )?;
        Ok(projection)
    }

    fn set_projection(&mut self, projection: Matrix4x4) {
        self.projection = projection;
        self.inverse_projection = projection.inverse();
    }

    pub fn recalculate_view(&mut self) {
        self.view = Matrix4x4::look_at(
            self.position,
            self.position + self.forward_direction,
            WORLD_UP,
        );
        self.inverse_view = self.view.inverse();
    }

    /// Rebuild the direction cache, one entry per pixel at `x + y * width`.
    pub fn recalculate_ray_directions(&mut self) {
        let width = self.viewport_width as usize;
        let height = self.viewport_height as usize;

        let mut directions = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let coord = Vector2::new(x as f64 / width as f64, y as f64 / height as f64);
                let coord = coord * 2.0 - 1.0;

                let target = self.inverse_projection.mul_xyzw(coord.x, coord.y, 1.0, 1.0);
                let point = target.xyz() / target.w;
                let direction = (self.inverse_view * point.extend(0.0)).xyz().normalize();
                directions.push(direction);
            }
        }
        self.ray_directions = directions;
    }

    // Input hooks

    pub fn press(&mut self, key: Key) {
        self.input.held[key.slot()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.input.held[key.slot()] = false;
    }

    /// Record the cursor position in viewport pixels.
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        self.input.current_mouse_position = Vector2::new(x, y);
    }

    /// Enable or disable mouse look.
    pub fn set_look_active(&mut self, active: bool) {
        self.input.look_active = active;
    }

    pub fn input(&self) -> &CameraInput {
        &self.input
    }

    // Pose

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn set_forward_direction(&mut self, forward_direction: Vector3) {
        self.forward_direction = forward_direction;
    }

    /// Vertical field of view in degrees.
    pub fn set_vertical_fov(&mut self, vertical_fov: f64) {
        self.vertical_fov = vertical_fov;
    }

    pub fn set_near_clip(&mut self, near_clip: f64) {
        self.near_clip = near_clip;
    }

    pub fn set_far_clip(&mut self, far_clip: f64) {
        self.far_clip = far_clip;
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn forward_direction(&self) -> Vector3 {
        self.forward_direction
    }

    pub fn vertical_fov(&self) -> f64 {
        self.vertical_fov
    }

    pub fn near_clip(&self) -> f64 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f64 {
        self.far_clip
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn projection(&self) -> &Matrix4x4 {
        &self.projection
    }

    pub fn inverse_projection(&self) -> &Matrix4x4 {
        &self.inverse_projection
    }

    pub fn view(&self) -> &Matrix4x4 {
        &self.view
    }

    pub fn inverse_view(&self) -> &Matrix4x4 {
        &self.inverse_view
    }

    /// Cached world-space ray direction per pixel.
    pub fn ray_directions(&self) -> &[Vector3] {
        &self.ray_directions
    }
}
