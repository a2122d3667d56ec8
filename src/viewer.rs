use glam::Vec2;
use log::debug;

use crate::camera::Camera;
use crate::panel::CameraPanel;
use crate::pointer::PointerTracker;
use crate::quad::ShadedQuad;
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Boundary events delivered to the viewer's single update function.
///
/// Event capture (the window layer) is decoupled from state mutation so the
/// transition logic tests without a live window or GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    Resized { width: u32, height: u32 },
    PointerMoved { x: f32, y: f32 },
    Tick,
}

/// The one live viewer context: scene, camera, shaded quad, pointer tracker
/// and debug-panel bindings. Exactly one camera, one mesh, one light exist
/// for its lifetime; dropping the viewer is the only teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub viewport: Viewport,
    pub scene: Scene,
    pub camera: Camera,
    pub quad: ShadedQuad,
    pub tracker: PointerTracker,
    pub panel: CameraPanel,
}

impl Viewer {
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = Viewport::new(width, height);
        Self {
            viewport,
            scene: Scene::default(),
            camera: Camera::new(viewport.aspect_ratio()),
            quad: ShadedQuad::new(viewport),
            tracker: PointerTracker::new(),
            panel: CameraPanel::new(),
        }
    }

    /// Applies one boundary event. All state mutation funnels through here.
    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Resized { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.camera.on_resize(self.viewport);
                self.quad.update_resolution(self.viewport);
                debug!("resized to {width}x{height}");
            }
            ViewerEvent::PointerMoved { x, y } => {
                self.tracker.pointer_moved(
                    Vec2::new(x, y),
                    self.viewport,
                    &mut self.quad.position,
                );
            }
            ViewerEvent::Tick => {
                self.quad.advance_time();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_camera_and_resolution() {
        let mut viewer = Viewer::new(800, 600);
        viewer.handle(ViewerEvent::Resized {
            width: 1920,
            height: 1080,
        });
        assert_eq!(viewer.viewport, Viewport::new(1920, 1080));
        assert_eq!(viewer.camera.aspect(), 1920.0 / 1080.0);
        let [w, h, a1, a2] = viewer.quad.resolution();
        assert_eq!((w, h), (1920.0, 1080.0));
        assert_eq!(a1, 1920.0 / 1080.0);
        assert_eq!(a2, 1.0);
    }

    #[test]
    fn duplicate_resize_leaves_state_identical() {
        let mut viewer = Viewer::new(800, 600);
        viewer.handle(ViewerEvent::Resized {
            width: 1024,
            height: 768,
        });
        let snapshot = viewer.clone();
        viewer.handle(ViewerEvent::Resized {
            width: 1024,
            height: 768,
        });
        assert_eq!(viewer, snapshot);
    }

    #[test]
    fn ticks_only_advance_time() {
        let mut viewer = Viewer::new(800, 600);
        let position = viewer.quad.position;
        for _ in 0..40 {
            viewer.handle(ViewerEvent::Tick);
        }
        assert!((viewer.quad.time() - 2.0).abs() < 1e-5);
        assert_eq!(viewer.quad.position, position);
    }

    #[test]
    fn pointer_moves_step_the_quad_toward_the_target() {
        let mut viewer = Viewer::new(800, 600);
        viewer.handle(ViewerEvent::PointerMoved { x: 800.0, y: 600.0 });
        assert_eq!(viewer.tracker.target(), Vec2::new(1.0, -1.0));
        assert_eq!(viewer.quad.position, Vec2::new(0.1, -0.1));
    }
}
