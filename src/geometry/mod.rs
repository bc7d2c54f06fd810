//! Geometric primitives for layout analysis.
//!
//! Transcript fragments arrive in document coordinate space: the origin is
//! the bottom-left page corner, with y increasing upward. A bounding box is
//! therefore stored as its four edges rather than as origin plus extent.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in document space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Distance from the left page edge to the left edge of the box.
    pub left: f32,
    /// Distance from the bottom page edge to the lower edge of the box.
    pub bottom: f32,
    /// Distance from the left page edge to the right edge of the box.
    pub right: f32,
    /// Distance from the bottom page edge to the upper edge of the box.
    pub top: f32,
}

impl BoundingBox {
    /// Create a new bounding box from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use transcript_oxide::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(135.0, 700.0, 480.0, 712.0);
    /// assert_eq!(bbox.left, 135.0);
    /// assert_eq!(bbox.top, 712.0);
    /// ```
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}
