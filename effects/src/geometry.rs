//! Page-coordinate geometry for spawned effects.

use serde::{Deserialize, Serialize};

/// A point in page coordinates (viewport offset plus scroll).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The on-page box of the element an effect was spawned from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Geometric center, where particle bursts usually start.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shift a viewport-relative rect into page coordinates.
    #[must_use]
    pub fn scrolled_by(&self, scroll_x: f64, scroll_y: f64) -> Self {
        Self { x: self.x + scroll_x, y: self.y + scroll_y, ..*self }
    }
}
