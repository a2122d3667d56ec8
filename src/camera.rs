use glam::{Mat4, Vec3};

use crate::viewport::Viewport;

pub const FOV_Y_DEGREES: f32 = 70.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
pub const INITIAL_Z: f32 = 1.5;

/// Perspective camera looking down -Z with +Y up.
///
/// The debug panel writes position components directly; the only clamp is
/// the panel's own slider range.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, INITIAL_Z),
            fov_y_degrees: FOV_Y_DEGREES,
            aspect,
            near: NEAR,
            far: FAR,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Recomputes the projection from the current parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.set_aspect(viewport.aspect_ratio());
    }

    /// Combined view-projection for the renderer's global uniform.
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y);
        self.projection * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_position() {
        let camera = Camera::new(16.0 / 9.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn resize_syncs_aspect_and_updates_projection() {
        let mut camera = Camera::new(1.0);
        let before = camera.projection();
        camera.on_resize(Viewport::new(1920, 1080));
        assert_eq!(camera.aspect(), 1920.0 / 1080.0);
        assert_ne!(camera.projection(), before);
        let expected = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            1920.0 / 1080.0,
            NEAR,
            FAR,
        );
        assert_eq!(camera.projection(), expected);
    }

    #[test]
    fn duplicate_resize_does_not_drift() {
        let mut camera = Camera::new(1.0);
        camera.on_resize(Viewport::new(1280, 720));
        let first = camera.clone();
        camera.on_resize(Viewport::new(1280, 720));
        assert_eq!(camera, first);
    }
}
