use glam::Vec2;

use crate::viewport::Viewport;

/// Fraction of the remaining distance to the target closed per step.
pub const LERP_FACTOR: f32 = 0.1;

/// Normalizes a pointer position in device pixels into [-1, 1], with the
/// vertical axis inverted to match NDC orientation (screen Y grows down).
pub fn normalize(client: Vec2, viewport: Viewport) -> Vec2 {
    let nx = (client.x / viewport.width as f32) * 2.0 - 1.0;
    let ny = (client.y / viewport.height as f32) * 2.0 - 1.0;
    Vec2::new(nx, -ny)
}

/// Tracks the pointer-derived target for the quad position.
///
/// One interpolation step is applied per pointer event, not per frame, so
/// smoothing cadence follows event frequency. That matches the behavior
/// being reproduced; switching to per-frame smoothing would change motion
/// feel and is deliberately not done here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    target: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Records a pointer move and applies a single lerp step to `position`.
    pub fn pointer_moved(&mut self, client: Vec2, viewport: Viewport, position: &mut Vec2) {
        self.target = normalize(client, viewport);
        *position = step(*position, self.target);
    }
}

fn step(position: Vec2, target: Vec2) -> Vec2 {
    position + (target - position) * LERP_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_normalizes_to_origin() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(normalize(Vec2::new(400.0, 300.0), viewport), Vec2::ZERO);
    }

    #[test]
    fn bottom_right_inverts_y() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(
            normalize(Vec2::new(800.0, 600.0), viewport),
            Vec2::new(1.0, -1.0)
        );
    }

    #[test]
    fn steps_strictly_shrink_the_error_and_converge() {
        let mut position = 0.0f64;
        let target = 1.0f64;
        let mut error = (target - position).abs();
        let mut steps = 0;
        while (target - position).abs() > 1e-6 {
            position += (target - position) * LERP_FACTOR as f64;
            let next = (target - position).abs();
            assert!(next < error, "error must shrink every step");
            error = next;
            steps += 1;
            assert!(steps < 200, "geometric decay should converge quickly");
        }
        // position_n = 1 - 0.9^n
        assert!((position - (1.0 - 0.9f64.powi(steps))).abs() < 1e-9);
    }

    #[test]
    fn tracker_moves_position_one_step_per_event() {
        let viewport = Viewport::new(800, 600);
        let mut tracker = PointerTracker::new();
        let mut position = Vec2::ZERO;
        tracker.pointer_moved(Vec2::new(800.0, 300.0), viewport, &mut position);
        assert_eq!(tracker.target(), Vec2::new(1.0, 0.0));
        assert_eq!(position, Vec2::new(0.1, 0.0));
        // No event, no movement.
        assert_eq!(position, Vec2::new(0.1, 0.0));
    }
}
