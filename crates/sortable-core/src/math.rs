//! Math types for pointer and layout calculations.
//!
//! Vectors come straight from [`glam`]; [`Rect`] is the axis-aligned
//! rectangle reported by layout measurement and used for hit testing.
//!
//! # Examples
//!
//! ```
//! use sortable_core::math::{Rect, Vec2};
//!
//! let bounds = Rect::new(10.0, 20.0, 100.0, 40.0);
//! assert_eq!(bounds.center(), Vec2::new(60.0, 40.0));
//! assert!(bounds.contains(Vec2::new(15.0, 25.0)));
//!
//! let moved = bounds.translate(Vec2::new(5.0, -5.0));
//! assert_eq!(moved.position(), Vec2::new(15.0, 15.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};

/// Axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from a top-left position and a size.
    pub fn from_pos_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Check whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Top-left corner.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Return a copy moved by `delta`.
    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Return a copy with the top-left corner moved to `position`.
    pub fn with_position(&self, position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.1, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0).translate(Vec2::new(10.0, -2.0));
        assert_eq!(rect, Rect::new(11.0, 0.0, 3.0, 4.0));
        assert_eq!(rect.size(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_with_position() {
        let rect = Rect::from_pos_size(Vec2::ZERO, Vec2::new(50.0, 20.0));
        let moved = rect.with_position(Vec2::new(100.0, 200.0));
        assert_eq!(moved.center(), Vec2::new(125.0, 210.0));
    }
}
