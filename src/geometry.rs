//! Geometry primitives shared by controls, atlas and renderer
//!
//! All positions are in screen space: origin top-left, y grows downward.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive on all four edges: a point on `x + width` is inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Same rectangle with its position moved so `(x, y)` denotes the center
    pub fn centered_on(&self, x: f32, y: f32) -> Rect {
        Rect {
            x: x - self.width * 0.5,
            y: y - self.height * 0.5,
            width: self.width,
            height: self.height,
        }
    }
}

/// 2D vector used for joystick displacement and direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero
    pub fn normalize(&self) -> Vector2 {
        let len = self.length();
        if len > 0.0 {
            Vector2 { x: self.x / len, y: self.y / len }
        } else {
            Vector2::ZERO
        }
    }

    pub fn scale(&self, factor: f32) -> Vector2 {
        Vector2 { x: self.x * factor, y: self.y * factor }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2 { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2 { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f32) -> Vector2 {
        self.scale(scalar)
    }
}

/// Normalized texture coordinates of one atlas region
///
/// The atlas origin is bottom-left, so `v2 < v1` for any region with height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TexCoords {
    pub u1: f32,
    pub v1: f32,
    pub u2: f32,
    pub v2: f32,
}

impl TexCoords {
    pub const fn new(u1: f32, v1: f32, u2: f32, v2: f32) -> Self {
        Self { u1, v1, u2, v2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_edge_inclusive() {
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(50.0, 50.0));
        assert!(r.contains(50.0, 25.0));
        assert!(!r.contains(50.01, 25.0));
        assert!(!r.contains(-0.01, 25.0));
    }

    #[test]
    fn test_zero_rect_contains_only_its_origin() {
        let r = Rect::ZERO;
        assert!(r.contains(0.0, 0.0));
        assert!(!r.contains(1.0, 0.0));
    }

    #[test]
    fn test_centered_on() {
        let r = Rect::new(0.0, 0.0, 20.0, 10.0).centered_on(100.0, 100.0);
        assert_eq!(r, Rect::new(90.0, 95.0, 20.0, 10.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vector2::new(3.0, 4.0).normalize();
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn test_vector_ops() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(b - a, Vector2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    }
}
