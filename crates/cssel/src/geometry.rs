//! Simple geometry value objects.

use serde::{Deserialize, Serialize};

/// A rectangle described by its width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of the rectangle (width times height).
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
