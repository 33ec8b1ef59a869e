//! Flat geometry primitives for the rectangular playfield
//!
//! A paddle blade is a rotated line segment; its broad-phase shape is the
//! segment's axis-aligned bounding box padded by the ball radius.

use glam::Vec2;

use crate::heading_from_degrees;

/// Axis-aligned rectangle (min is the top-left corner in y-down coords)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rect spanning two arbitrary corners
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Grow the rect by `pad` on every side
    pub fn expand(&self, pad: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(pad),
            max: self.max + Vec2::splat(pad),
        }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Segment swept out from `anchor` at `angle_deg`, `length` long
    pub fn from_angle(anchor: Vec2, length: f32, angle_deg: f32) -> Self {
        Self {
            start: anchor,
            end: anchor + heading_from_degrees(angle_deg) * length,
        }
    }

    /// Axis-aligned bounding box of the endpoints, padded by `pad` on each axis
    pub fn aabb(&self, pad: f32) -> Rect {
        Rect::from_corners(self.start, self.end).expand(pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(30.0, 40.0)));
        assert!(r.contains(Vec2::new(20.0, 30.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert!(!r.contains(Vec2::new(20.0, 40.1)));
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let r = Rect::from_corners(Vec2::new(30.0, 20.0), Vec2::new(10.0, 40.0));
        assert_eq!(r.min, Vec2::new(10.0, 20.0));
        assert_eq!(r.max, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_rect_expand() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0)).expand(5.0);
        assert_eq!(r.min, Vec2::new(-5.0, -5.0));
        assert_eq!(r.max, Vec2::new(15.0, 15.0));
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn test_segment_from_angle() {
        let anchor = Vec2::new(100.0, 200.0);
        let seg = Segment::from_angle(anchor, 50.0, 0.0);
        assert!((seg.end - Vec2::new(150.0, 200.0)).length() < 1e-4);

        // 90° points straight down in y-down coords
        let seg = Segment::from_angle(anchor, 50.0, 90.0);
        assert!((seg.end - Vec2::new(100.0, 250.0)).length() < 1e-4);
    }

    #[test]
    fn test_segment_aabb_covers_both_endpoints() {
        // Negative angle sweeps upward, so the end sits above the anchor
        let seg = Segment::from_angle(Vec2::new(100.0, 100.0), 100.0, -30.0);
        let bb = seg.aabb(8.0);
        assert!(bb.contains(seg.start));
        assert!(bb.contains(seg.end));
        assert!(bb.min.y < seg.end.y);
        assert!(bb.max.y > seg.start.y);
    }
}
