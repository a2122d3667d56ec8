use crate::camera::Camera;

/// Camera position axis exposed to the debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A single numeric binding with the panel's slider range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
}

impl Slider {
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Debug panel boundary: a "camera" folder with three sliders bound live to
/// the camera position components. Writing through a binding clamps to the
/// slider range and stores straight into the component, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPanel {
    pub folder: &'static str,
    pub open: bool,
    sliders: [Slider; 3],
}

impl Default for CameraPanel {
    fn default() -> Self {
        let slider = |label| Slider {
            label,
            min: -5.0,
            max: 5.0,
        };
        Self {
            folder: "camera",
            open: true,
            sliders: [slider("x"), slider("y"), slider("z")],
        }
    }
}

impl CameraPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slider(&self, axis: Axis) -> Slider {
        self.sliders[axis as usize]
    }

    /// Writes a slider value into the camera, returning the clamped value.
    pub fn set(&self, camera: &mut Camera, axis: Axis, value: f32) -> f32 {
        let value = self.slider(axis).clamp(value);
        match axis {
            Axis::X => camera.position.x = value,
            Axis::Y => camera.position.y = value,
            Axis::Z => camera.position.z = value,
        }
        value
    }

    /// Moves one axis by a delta, clamped like any other slider write.
    pub fn nudge(&self, camera: &mut Camera, axis: Axis, delta: f32) -> f32 {
        let current = match axis {
            Axis::X => camera.position.x,
            Axis::Y => camera.position.y,
            Axis::Z => camera.position.z,
        };
        self.set(camera, axis, current + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_is_camera_and_open() {
        let panel = CameraPanel::new();
        assert_eq!(panel.folder, "camera");
        assert!(panel.open);
    }

    #[test]
    fn set_clamps_to_slider_range() {
        let panel = CameraPanel::new();
        let mut camera = Camera::new(1.0);
        assert_eq!(panel.set(&mut camera, Axis::X, 7.0), 5.0);
        assert_eq!(camera.position.x, 5.0);
        assert_eq!(panel.set(&mut camera, Axis::Y, -9.0), -5.0);
        assert_eq!(camera.position.y, -5.0);
    }

    #[test]
    fn nudge_moves_from_current_value() {
        let panel = CameraPanel::new();
        let mut camera = Camera::new(1.0);
        panel.nudge(&mut camera, Axis::Z, 0.5);
        assert_eq!(camera.position.z, 2.0);
        panel.nudge(&mut camera, Axis::Z, 100.0);
        assert_eq!(camera.position.z, 5.0);
    }

    #[test]
    fn axes_write_independently() {
        let panel = CameraPanel::new();
        let mut camera = Camera::new(1.0);
        panel.set(&mut camera, Axis::X, 1.0);
        panel.set(&mut camera, Axis::Y, 2.0);
        assert_eq!(camera.position.x, 1.0);
        assert_eq!(camera.position.y, 2.0);
        assert_eq!(camera.position.z, 1.5);
    }
}
