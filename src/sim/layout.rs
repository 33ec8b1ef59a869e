//! Playfield layout derived from the current surface bounds
//!
//! The host re-supplies bounds every frame (they change on resize or
//! rotation), so everything here is recomputed on demand and never cached.

use glam::Vec2;

use super::geom::{Rect, Segment};
use crate::consts::*;

/// Playfield dimensions in pixels, reported by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the surface has reported a real size; the simulation
    /// step treats invalid bounds as "paused"
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Where the ball sits before launch and after a drain: 75% across,
/// resting just above the paddle pivot line
pub fn launch_position(bounds: Bounds) -> Vec2 {
    Vec2::new(
        bounds.width * LAUNCH_X_FRACTION,
        bounds.height - PADDLE_Y_OFFSET - BALL_RADIUS * 2.0,
    )
}

/// The plunger's hit region, flush with the bottom edge
pub fn plunger_rect(bounds: Bounds) -> Rect {
    let left = bounds.width * PLUNGER_X_FRACTION - PLUNGER_WIDTH / 2.0;
    let top = bounds.height - PLUNGER_HEIGHT;
    Rect::new(
        Vec2::new(left, top),
        Vec2::new(left + PLUNGER_WIDTH, bounds.height),
    )
}

/// A decorative bumper - drawn but never collided
#[derive(Debug, Clone, Copy)]
pub struct Bumper {
    pub center: Vec2,
    pub radius: f32,
}

/// Fixed bumper pair in the upper half of the table
pub fn bumpers(bounds: Bounds) -> [Bumper; 2] {
    [
        Bumper {
            center: Vec2::new(bounds.width * 0.3, bounds.height * 0.45),
            radius: BUMPER_RADIUS,
        },
        Bumper {
            center: Vec2::new(bounds.width * 0.7, bounds.height * 0.5),
            radius: BUMPER_RADIUS,
        },
    ]
}

/// Decorative lane divider across the upper table
pub fn lane(bounds: Bounds) -> Segment {
    Segment::new(
        Vec2::new(bounds.width * 0.1, bounds.height * 0.25),
        Vec2::new(bounds.width * 0.9, bounds.height * 0.25),
    )
}
