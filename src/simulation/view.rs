//! World-to-screen mapping and viewport culling.
//!
//! The camera root is the world point mapped to the screen origin; the
//! embedding application derives it from its pan offset and window size
//! and passes it into the render iteration together with the viewport.

use super::states::NVec2;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub root: NVec2, // world point mapped to the screen origin
    pub zoom: f64,
}

impl Camera {
    /// Camera root for a pan offset centered in a `width` x `height`
    /// viewport at the given zoom.
    pub fn rooted(pan: NVec2, width: f64, height: f64, zoom: f64) -> Self {
        Self {
            root: NVec2::new(
                pan.x + (width * 0.5) / zoom,
                pan.y + (height * 0.5) / zoom,
            ),
            zoom,
        }
    }

    /// Screen position of a world point: `(root - world) * zoom`.
    pub fn world_to_screen(&self, world: NVec2) -> NVec2 {
        (self.root - world) * self.zoom
    }

    /// Inverse of [`Camera::world_to_screen`].
    pub fn screen_to_world(&self, screen: NVec2) -> NVec2 {
        self.root - screen / self.zoom
    }
}

/// Screen-space rectangle everything is culled against, origin top-left.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Whether a primitive at screen position `pos` with the given margin
    /// per axis still touches the viewport.
    pub fn is_visible(&self, pos: NVec2, margin: NVec2) -> bool {
        !(pos.x + margin.x < 0.0
            || pos.x - margin.x > self.width
            || pos.y + margin.y < 0.0
            || pos.y - margin.y > self.height)
    }
}
