use glam::Vec2;

use crate::viewport::Viewport;

/// Fixed time increment applied once per rendered frame.
pub const TIME_STEP: f32 = 0.05;

/// Aspect ratio of the reference content the cover correction fits against.
pub const REFERENCE_ASPECT: f32 = 1.0;

/// State of the shader-driven unit quad: its world offset plus the two
/// custom uniforms the shader consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadedQuad {
    /// World-space offset, moved only by the pointer tracker.
    pub position: Vec2,
    time: f32,
    resolution: [f32; 4],
}

impl ShadedQuad {
    pub fn new(viewport: Viewport) -> Self {
        let mut quad = Self {
            position: Vec2::ZERO,
            time: 0.0,
            resolution: [0.0; 4],
        };
        quad.update_resolution(viewport);
        quad
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// `[width, height, coverX, coverY]` as pushed into the shader.
    pub fn resolution(&self) -> [f32; 4] {
        self.resolution
    }

    /// Advances the animation clock by the fixed per-frame step. The value
    /// grows without bound; precision loss over very long sessions is an
    /// accepted trade-off.
    pub fn advance_time(&mut self) {
        self.time += TIME_STEP;
    }

    /// Recomputes the resolution uniform for the current viewport.
    pub fn update_resolution(&mut self, viewport: Viewport) {
        let (a1, a2) = cover_correction(viewport.aspect_ratio(), REFERENCE_ASPECT);
        self.resolution = [viewport.width as f32, viewport.height as f32, a1, a2];
    }
}

/// Cover-fit correction pair so shader-sampled content is never stretched:
/// the wider axis is scaled up instead of squashing the narrower one.
pub fn cover_correction(container_aspect: f32, reference_aspect: f32) -> (f32, f32) {
    if container_aspect > reference_aspect {
        (container_aspect / reference_aspect, 1.0)
    } else {
        (1.0, container_aspect / reference_aspect)
    }
}

/// Unit-square plane (1x1, single segment), interleaved position + uv.
pub const QUAD_VERTICES: &[f32] = &[
    // positions      // uv
    -0.5, -0.5, 0.0, 0.0, 0.0, //
    0.5, -0.5, 0.0, 1.0, 0.0, //
    0.5, 0.5, 0.0, 1.0, 1.0, //
    -0.5, 0.5, 0.0, 0.0, 1.0,
];

pub const QUAD_INDICES: &[u32] = &[0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_container_scales_x_only() {
        let (a1, a2) = cover_correction(1920.0 / 1080.0, 1.0);
        assert_eq!(a1, 1920.0 / 1080.0);
        assert_eq!(a2, 1.0);
    }

    #[test]
    fn tall_container_scales_y_only() {
        let (a1, a2) = cover_correction(600.0 / 800.0, 1.0);
        assert_eq!(a1, 1.0);
        assert_eq!(a2, 600.0 / 800.0);
    }

    #[test]
    fn time_advances_by_fixed_step() {
        let mut quad = ShadedQuad::new(Viewport::new(800, 600));
        for _ in 0..10 {
            quad.advance_time();
        }
        assert!((quad.time() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn resolution_tracks_viewport() {
        let mut quad = ShadedQuad::new(Viewport::new(800, 600));
        quad.update_resolution(Viewport::new(1000, 500));
        assert_eq!(quad.resolution(), [1000.0, 500.0, 2.0, 1.0]);
    }

    #[test]
    fn duplicate_resolution_update_is_idempotent() {
        let mut quad = ShadedQuad::new(Viewport::new(800, 600));
        let first = quad.resolution();
        quad.update_resolution(Viewport::new(800, 600));
        assert_eq!(quad.resolution(), first);
    }

    #[test]
    fn quad_is_a_single_segment_square() {
        assert_eq!(QUAD_VERTICES.len(), 4 * 5);
        assert_eq!(QUAD_INDICES.len(), 6);
    }
}
