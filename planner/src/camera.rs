#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN};

/// A point in either screen space (CSS pixels) or canvas percentage space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The canvas container's bounding rectangle on screen, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { left: 0.0, top: 0.0, width: 1.0, height: 1.0 }
    }
}

/// Camera state for pan/zoom over the plan.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to canvas percent.
    ///
    /// `percent = (screen - container_origin - pan) / (container_size * zoom) * 100`
    #[must_use]
    pub fn screen_to_percent(&self, screen: Point, viewport: &Viewport) -> Point {
        Point {
            x: (screen.x - viewport.left - self.pan_x) / (viewport.width * self.zoom) * 100.0,
            y: (screen.y - viewport.top - self.pan_y) / (viewport.height * self.zoom) * 100.0,
        }
    }

    /// Convert a canvas-percent point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn percent_to_screen(&self, percent: Point, viewport: &Viewport) -> Point {
        Point {
            x: percent.x / 100.0 * viewport.width * self.zoom + self.pan_x + viewport.left,
            y: percent.y / 100.0 * viewport.height * self.zoom + self.pan_y + viewport.top,
        }
    }

    /// Set a new zoom (clamped) while keeping the canvas point under `screen` fixed.
    pub fn zoom_about(&mut self, screen: Point, zoom: f64, viewport: &Viewport) {
        let anchor = self.screen_to_percent(screen, viewport);
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.pan_x = screen.x - viewport.left - anchor.x / 100.0 * viewport.width * self.zoom;
        self.pan_y = screen.y - viewport.top - anchor.y / 100.0 * viewport.height * self.zoom;
    }
}
