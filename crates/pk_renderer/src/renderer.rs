//! Progressive path tracing renderer.
//!
//! Each call to [`Renderer::render`] traces one sample per pixel and blends it
//! into a running per-pixel average, so the image converges as frames
//! accumulate. The average restarts whenever the frame index is reset to 1.

use crate::error::{RenderError, RenderResult};
use crate::intersect::{closest_hit, nearest_hit};
use crate::sampling::{pixel_rng, random_in_unit_sphere};
use crate::{demo, Camera, Color, HitRecord, ImageBuffer, Ray, Scene};
use log::{debug, trace};
use pk_math::Vector4;
use rayon::prelude::*;
use std::time::Instant;

/// Offset along the surface normal for bounce ray origins.
pub const RENDER_EPSILON: f64 = 1e-6;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Number of ray segments traced per sample
    pub bounces: u32,
    /// Normal offset of bounce ray origins
    pub epsilon: f64,
    /// Base seed of the per-pixel sampling streams
    pub seed: u64,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bounces: 5,
            epsilon: RENDER_EPSILON,
            seed: 0,
            parallel: true,
        }
    }
}

/// Read-only state shared by every pixel of one frame.
struct FrameContext<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    config: &'a RenderConfig,
    frame_index: u32,
}

impl FrameContext<'_> {
    fn per_pixel(&self, pixel_index: usize) -> Vector4 {
        let mut rng = pixel_rng(self.config.seed, self.frame_index, pixel_index);
        let mut ray = Ray::new(
            self.camera.position(),
            self.camera.ray_directions()[pixel_index],
        );

        let mut contribution = Color::ONE;
        let mut light = Color::ZERO;

        for _ in 0..self.config.bounces {
            let rec = self.trace_ray(&ray);
            if !rec.is_hit() {
                break;
            }
            let Some(material) = self.scene.material(rec.material_index) else {
                break;
            };

            contribution *= material.albedo;
            light += material.emission() * contribution;

            let origin = rec.world_position + rec.world_normal * self.config.epsilon;
            let scatter = rec.world_normal + random_in_unit_sphere(&mut rng).normalize();
            ray = Ray::new(origin, scatter.normalize());
        }

        light.extend(1.0)
    }

    fn trace_ray(&self, ray: &Ray) -> HitRecord {
        let rec = nearest_hit(ray, self.scene.primitives());
        match self.scene.primitive(rec.object_index) {
            Some(primitive) => closest_hit(ray, primitive, rec),
            None => HitRecord::miss(),
        }
    }

    fn render_row(&self, y: usize, accumulation: &mut [Vector4], output: &mut [Vector4]) {
        let width = accumulation.len();
        let frames = f64::from(self.frame_index);

        for (x, (accumulated, pixel)) in accumulation.iter_mut().zip(output).enumerate() {
            *accumulated += self.per_pixel(x + y * width);
            // w only counts samples; the resolved image is opaque
            let color = (*accumulated / frames).clamp(Vector4::ZERO, Vector4::ONE);
            *pixel = color.xyz().extend(1.0);
        }
    }
}

/// Owns the camera, the active scene and the accumulation state.
pub struct Renderer {
    camera: Camera,
    scene: Scene,
    config: RenderConfig,
    accumulation: Vec<Vector4>,
    image: ImageBuffer,
    frame_index: u32,
}

impl Renderer {
    /// Create a renderer for a `width` x `height` viewport with an empty scene.
    ///
    /// Call [`Renderer::initialize`] or [`Renderer::on_resize`] before the
    /// first render so the camera has ray directions.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, RenderConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: RenderConfig) -> Self {
        Self {
            camera: Camera::new(width, height),
            scene: Scene::new(),
            config,
            accumulation: vec![Vector4::ZERO; width as usize * height as usize],
            image: ImageBuffer::new(width, height),
            frame_index: 1,
        }
    }

    /// Load the demo scene.
    pub fn initialize(&mut self) -> RenderResult<()> {
        self.load_scene()
    }

    /// Replace the scene with the demo scene and move the camera to its pose.
    pub fn load_scene(&mut self) -> RenderResult<()> {
        let scene = demo::demo_scene();
        scene.validate()?;

        let mut camera = self.camera.clone();
        demo::apply_demo_camera(&mut camera);
        camera.recalculate_projection()?;
        camera.recalculate_view();
        camera.recalculate_ray_directions();

        debug!(
            "Loaded demo scene: {} primitives, {} materials",
            scene.len(),
            scene.materials().len()
        );
        self.scene = scene;
        self.camera = camera;
        Ok(())
    }

    /// Replace the active scene. The current scene is kept if `scene` is invalid.
    pub fn set_scene(&mut self, scene: Scene) -> RenderResult<()> {
        scene.validate()?;
        debug!("Scene replaced: {} primitives", scene.len());
        self.scene = scene;
        Ok(())
    }

    /// Resize the viewport.
    ///
    /// The accumulation buffer is reallocated but the frame index is kept, so
    /// until [`Renderer::reset_frame_index`] is called the new frames are
    /// averaged over the old frame count. A failed resize changes nothing.
    pub fn on_resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        debug!("Resizing viewport to {width}x{height}");

        self.camera.on_resize(width, height)?;
        self.camera.on_update(0.0);

        self.accumulation = vec![Vector4::ZERO; width as usize * height as usize];
        self.image = ImageBuffer::new(width, height);
        Ok(())
    }

    /// Forward elapsed time to the camera. Returns true if it moved.
    pub fn on_update(&mut self, dt: f64) -> bool {
        self.camera.on_update(dt)
    }

    /// Trace one sample per pixel and return the resolved image.
    ///
    /// Fails without touching any state if the scene is inconsistent or the
    /// camera directions don't match the viewport.
    pub fn render(&mut self) -> RenderResult<&ImageBuffer> {
        self.scene.validate()?;

        let expected = self.accumulation.len();
        let actual = self.camera.ray_directions().len();
        if actual != expected {
            return Err(RenderError::ViewportMismatch { expected, actual });
        }

        if self.frame_index == 1 {
            self.accumulation.fill(Vector4::ZERO);
        }

        let start = Instant::now();
        let context = FrameContext {
            scene: &self.scene,
            camera: &self.camera,
            config: &self.config,
            frame_index: self.frame_index,
        };

        // Zero-sized viewports still advance the frame
        let row_len = (self.image.width as usize).max(1);

        if self.config.parallel {
            self.accumulation
                .par_chunks_mut(row_len)
                .zip(self.image.pixels.par_chunks_mut(row_len))
                .enumerate()
                .for_each(|(y, (acc_row, out_row))| context.render_row(y, acc_row, out_row));
        } else {
            self.accumulation
                .chunks_mut(row_len)
                .zip(self.image.pixels.chunks_mut(row_len))
                .enumerate()
                .for_each(|(y, (acc_row, out_row))| context.render_row(y, acc_row, out_row));
        }

        trace!(
            "Frame {} rendered in {:.2?} ({} pixels)",
            self.frame_index,
            start.elapsed(),
            expected
        );
        self.frame_index += 1;

        Ok(&self.image)
    }

    /// Trace the sample of one pixel for the current frame without
    /// accumulating it.
    ///
    /// # Panics
    ///
    /// Panics if `pixel_index` is outside the camera's ray directions.
    pub fn per_pixel(&self, pixel_index: usize) -> Vector4 {
        self.context().per_pixel(pixel_index)
    }

    /// Nearest hit along `ray` in the active scene, with position and normal
    /// resolved. Returns a miss record if nothing is hit.
    pub fn trace_ray(&self, ray: &Ray) -> HitRecord {
        self.context().trace_ray(ray)
    }

    fn context(&self) -> FrameContext<'_> {
        FrameContext {
            scene: &self.scene,
            camera: &self.camera,
            config: &self.config,
            frame_index: self.frame_index,
        }
    }

    /// Restart accumulation on the next render.
    pub fn reset_frame_index(&mut self) {
        self.frame_index = 1;
    }

    /// Reseed the sampling streams.
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for input hooks and pose changes.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn image(&self) -> &ImageBuffer {
        &self.image
    }

    pub fn viewport_width(&self) -> u32 {
        self.image.width
    }

    pub fn viewport_height(&self) -> u32 {
        self.image.height
    }
}
