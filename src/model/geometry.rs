//! Geometry primitives shared by layout computation and hit-testing

use serde::Serialize;

/// A point in window coordinates (logical pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True if either axis moved strictly more than `threshold` from `origin`
    pub fn exceeds(&self, origin: Point, threshold: f32) -> bool {
        (self.x - origin.x).abs() > threshold || (self.y - origin.y).abs() > threshold
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Position of `point` as fractions of this rect's width and height.
    ///
    /// Returns `None` for degenerate (zero-area) rects.
    pub fn fractions(&self, point: Point) -> Option<(f32, f32)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some((
            (point.x - self.x) / self.width,
            (point.y - self.y) / self.height,
        ))
    }

    /// Split along the x axis at `ratio` (0.0..=1.0)
    pub fn split_columns(&self, ratio: f32) -> (Rect, Rect) {
        let left = self.width * ratio;
        (
            Rect::new(self.x, self.y, left, self.height),
            Rect::new(self.x + left, self.y, self.width - left, self.height),
        )
    }

    /// Split along the y axis at `ratio` (0.0..=1.0)
    pub fn split_rows(&self, ratio: f32) -> (Rect, Rect) {
        let top = self.height * ratio;
        (
            Rect::new(self.x, self.y, self.width, top),
            Rect::new(self.x, self.y + top, self.width, self.height - top),
        )
    }
}
