use parking_lot::RwLock;

/// Current drawable size of the window.
///
/// Recomputed from scratch on every resize event; nothing keeps a history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero height propagates inf into downstream
    /// math rather than being rejected here.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Thread-safe handle to the live viewport, written by the resize handler
/// and read wherever the current size is needed.
#[derive(Debug)]
pub struct SharedViewport {
    size: RwLock<Viewport>,
}

impl SharedViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: RwLock::new(Viewport::new(width, height)),
        }
    }

    pub fn update(&self, width: u32, height: u32) {
        *self.size.write() = Viewport::new(width.max(1), height.max(1));
    }

    pub fn get(&self) -> Viewport {
        *self.size.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let viewport = Viewport::new(1920, 1080);
        assert_eq!(viewport.aspect_ratio(), 1920.0 / 1080.0);
    }

    #[test]
    fn shared_viewport_clamps_to_one_pixel() {
        let shared = SharedViewport::new(800, 600);
        shared.update(0, 0);
        assert_eq!(shared.get(), Viewport::new(1, 1));
    }
}
