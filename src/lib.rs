//! Core modules for the shaderplane viewer.
//!
//! The crate exposes the viewer's state machine — viewport, camera, shaded
//! quad, pointer tracking and debug-panel bindings — separately from the
//! window and GPU layers so the state-transition logic stays testable
//! without a display.

pub mod camera;
pub mod panel;
pub mod pointer;
pub mod quad;
pub mod render;
pub mod scene;
pub mod viewer;
pub mod viewport;

pub use camera::Camera;
pub use panel::{Axis, CameraPanel, Slider};
pub use pointer::{normalize, PointerTracker, LERP_FACTOR};
pub use quad::{cover_correction, ShadedQuad, REFERENCE_ASPECT, TIME_STEP};
pub use render::{Renderer, PIXEL_RATIO};
pub use scene::{DirectionalLight, Scene};
pub use viewer::{Viewer, ViewerEvent};
pub use viewport::{SharedViewport, Viewport};
