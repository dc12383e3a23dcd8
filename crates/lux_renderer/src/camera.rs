//! Camera for ray generation.

use lux_core::CameraConfig;
use lux_math::{Ray, UVec2, Vec2, Vec3};

/// Perspective pinhole camera.
#[derive(Clone, Debug)]
pub struct Camera {
    // Image settings
    resolution: UVec2,

    // Camera positioning
    position: Vec3,
    direction: Vec3,
    up: Vec3,

    // Lens settings
    fov: f32,        // Vertical field of view in degrees
    near_plane: f32, // Distance from eye to the image plane

    // Cached computed values (set by initialize())
    viewport: Vec2,
    plane_midpoint: Vec3,
    right: Vec3,
    pixel_span: Vec2,
}

impl Camera {
    /// Create a new camera with default settings looking down +Z.
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            resolution: UVec2::new(width, height),
            position: Vec3::ZERO,
            direction: Vec3::Z,
            up: Vec3::Y,
            fov: 60.0,
            near_plane: 1.0,
            // Cached values (initialized below)
            viewport: Vec2::ZERO,
            plane_midpoint: Vec3::ZERO,
            right: Vec3::X,
            pixel_span: Vec2::ONE,
        };
        camera.initialize();
        camera
    }

    /// Create a camera from its config section.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.resolution.x, config.resolution.y)
            .with_position(config.position, config.direction, config.up)
            .with_lens(config.fov, config.near_plane)
    }

    /// Set eye position, viewing direction and up vector.
    pub fn with_position(mut self, position: Vec3, direction: Vec3, up: Vec3) -> Self {
        self.position = position;
        self.direction = direction;
        self.up = up;
        self.initialize();
        self
    }

    /// Set field of view (degrees) and near-plane distance.
    pub fn with_lens(mut self, fov: f32, near_plane: f32) -> Self {
        self.fov = fov;
        self.near_plane = near_plane;
        self.initialize();
        self
    }

    /// Recompute the cached viewport values.
    fn initialize(&mut self) {
        self.direction = self.direction.normalize();
        self.up = self.up.normalize();

        // Calculate viewport dimensions
        let half_height = self.near_plane * (self.fov.to_radians() / 2.0).tan();
        let aspect = self.resolution.x as f32 / self.resolution.y as f32;
        self.viewport = Vec2::new(2.0 * half_height * aspect, 2.0 * half_height);

        self.plane_midpoint = self.position + self.direction * self.near_plane;
        self.right = self.up.cross(self.direction);

        // A single row or column maps onto the viewport's edge
        let last_pixel = self.resolution.as_vec2() - Vec2::ONE;
        self.pixel_span = last_pixel.max(Vec2::ONE);
    }

    /// Generate a ray through a (possibly fractional) pixel coordinate.
    ///
    /// `(0, 0)` is the top-left pixel, `(width - 1, height - 1)` the bottom-right.
    pub fn create_ray(&self, x: f32, y: f32) -> Ray {
        let on_viewport = Vec2::new(x, y) / self.pixel_span * self.viewport - self.viewport / 2.0;
        let on_plane = self.plane_midpoint + on_viewport.x * self.right - on_viewport.y * self.up;

        Ray::new(self.position, (on_plane - self.position).normalize())
    }

    /// Eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.resolution.x
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.resolution.y
    }
}
