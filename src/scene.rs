use glam::Vec3;

/// Directional light carried by the scene.
///
/// The quad's shader does not sample it, but the scene keeps exactly one
/// light for its lifetime, matching the behavior being reproduced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

/// Fixed scene contents: a background color and one light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub background: Vec3,
    pub light: DirectionalLight,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            background: Vec3::ONE,
            light: DirectionalLight {
                position: Vec3::new(-100.0, 0.0, -100.0),
                color: Vec3::ONE,
                intensity: 0.08,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_white_background_and_one_dim_light() {
        let scene = Scene::default();
        assert_eq!(scene.background, Vec3::ONE);
        assert!((scene.light.intensity - 0.08).abs() < f32::EPSILON);
    }
}
