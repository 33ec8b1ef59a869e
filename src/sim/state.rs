//! Playfield state and core simulation types
//!
//! Everything the integrator advances lives here. Actuator geometry is
//! derived fresh from the current bounds on every query - paddles have no
//! stored rotation, only the `pressed` flag they were last commanded with.

use glam::Vec2;

use super::geom::{Rect, Segment};
use super::layout::{self, Bounds};
use crate::consts::*;
use crate::heading_from_degrees;

/// The single moving body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Place the ball at the launch position, at rest
    pub fn reset(&mut self, bounds: Bounds) {
        self.pos = layout::launch_position(bounds);
        self.vel = Vec2::ZERO;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    /// Blade angles are mirrored between sides
    #[inline]
    fn angle_sign(self) -> f32 {
        match self {
            PaddleSide::Left => 1.0,
            PaddleSide::Right => -1.0,
        }
    }

    #[inline]
    fn pivot_x_fraction(self) -> f32 {
        match self {
            PaddleSide::Left => LEFT_PADDLE_X_FRACTION,
            PaddleSide::Right => RIGHT_PADDLE_X_FRACTION,
        }
    }
}

/// A flipper paddle
///
/// The blade angle is a pure function of `pressed` - it snaps between the
/// rest and flipped angle with no intermediate animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: PaddleSide,
    pub pressed: bool,
}

impl Paddle {
    pub fn new(side: PaddleSide) -> Self {
        Self {
            side,
            pressed: false,
        }
    }

    /// Current signed blade angle in degrees
    #[inline]
    pub fn angle_deg(&self) -> f32 {
        let base = if self.pressed {
            PADDLE_FLIP_ANGLE_DEG
        } else {
            PADDLE_REST_ANGLE_DEG
        };
        base * self.side.angle_sign()
    }

    /// Unit vector along the blade at its current angle
    #[inline]
    pub fn heading(&self) -> Vec2 {
        heading_from_degrees(self.angle_deg())
    }

    /// Pivot point, derived from the current bounds
    pub fn anchor(&self, bounds: Bounds) -> Vec2 {
        Vec2::new(
            bounds.width * self.side.pivot_x_fraction(),
            bounds.height - PADDLE_Y_OFFSET,
        )
    }

    /// The blade as a swept segment from the pivot
    pub fn segment(&self, bounds: Bounds) -> Segment {
        Segment::from_angle(self.anchor(bounds), PADDLE_LENGTH, self.angle_deg())
    }

    /// Bounce speed multiplier for the current press state
    #[inline]
    pub fn bounce_strength(&self) -> f32 {
        if self.pressed {
            PADDLE_BOUNCE_HELD
        } else {
            PADDLE_BOUNCE_REST
        }
    }

    /// Sideways kick injected on a hit (outward for left, inward-right for right)
    #[inline]
    pub fn side_push(&self) -> f32 {
        match self.side {
            PaddleSide::Left => -PADDLE_SIDE_PUSH,
            PaddleSide::Right => PADDLE_SIDE_PUSH,
        }
    }
}

/// Opaque identity of the pointer driving the plunger
///
/// The simulation never interprets this beyond equality - the input
/// mapper owns all pointer tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerId(pub i32);

/// The spring plunger
///
/// One pointer at a time may own the plunger. The release is an
/// edge-triggered flag consumed by the simulation step at most once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plunger {
    pull: f32,
    owner: Option<PointerId>,
    released: bool,
}

impl Plunger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draw, normalized to [0, 1]
    #[inline]
    pub fn pull_fraction(&self) -> f32 {
        self.pull
    }

    #[inline]
    pub fn owner(&self) -> Option<PointerId> {
        self.owner
    }

    /// Hit region in playfield coordinates
    pub fn hit_rect(bounds: Bounds) -> Rect {
        layout::plunger_rect(bounds)
    }

    /// Claim ownership for `id`. Fails while another pointer holds it.
    pub fn try_acquire(&mut self, id: PointerId) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(id);
        true
    }

    /// Update the draw from the owning pointer; ignored for anyone else.
    /// Out-of-range fractions are clamped rather than rejected.
    pub fn drag_to(&mut self, id: PointerId, fraction: f32) {
        if self.owner == Some(id) {
            self.pull = fraction.clamp(0.0, 1.0);
        }
    }

    /// The owning pointer lifted: fire the release edge and free the
    /// plunger. Lifts from non-owners are ignored.
    pub fn lift(&mut self, id: PointerId) {
        if self.owner == Some(id) {
            self.owner = None;
            self.mark_released();
        }
    }

    /// The owning pointer was cancelled: free the plunger without a
    /// release edge
    pub fn abort(&mut self, id: PointerId) {
        if self.owner == Some(id) {
            self.owner = None;
            self.pull = 0.0;
        }
    }

    /// Set the edge-triggered release flag
    pub fn mark_released(&mut self) {
        self.released = true;
    }

    /// Consume the release edge, if any: returns the pull fraction the
    /// spring was released at, clears the flag, and resets the pull.
    /// Calling this at most once per frame is what guarantees the launch
    /// impulse is applied at most once.
    pub fn take_release(&mut self) -> Option<f32> {
        if !self.released {
            return None;
        }
        self.released = false;
        let pull = self.pull;
        self.pull = 0.0;
        Some(pull)
    }
}

/// Complete playfield state advanced by the simulation step
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub plunger: Plunger,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            left_paddle: Paddle::new(PaddleSide::Left),
            right_paddle: Paddle::new(PaddleSide::Right),
            plunger: Plunger::new(),
        }
    }

    /// Re-seat the ball once the surface size is first known
    pub fn reset(&mut self, bounds: Bounds) {
        self.ball.reset(bounds);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 1000.0,
        height: 2000.0,
    };

    #[test]
    fn test_paddle_angle_mirrors_by_side() {
        let mut left = Paddle::new(PaddleSide::Left);
        let mut right = Paddle::new(PaddleSide::Right);

        assert_eq!(left.angle_deg(), 22.0);
        assert_eq!(right.angle_deg(), -22.0);

        left.pressed = true;
        right.pressed = true;
        assert_eq!(left.angle_deg(), -25.0);
        assert_eq!(right.angle_deg(), 25.0);
    }

    #[test]
    fn test_paddle_anchor_on_pivot_line() {
        let left = Paddle::new(PaddleSide::Left);
        let right = Paddle::new(PaddleSide::Right);
        assert!((left.anchor(BOUNDS) - Vec2::new(350.0, 1780.0)).length() < 1e-3);
        assert!((right.anchor(BOUNDS) - Vec2::new(650.0, 1780.0)).length() < 1e-3);
    }

    #[test]
    fn test_paddle_segment_length() {
        let paddle = Paddle::new(PaddleSide::Left);
        let seg = paddle.segment(BOUNDS);
        assert!(((seg.end - seg.start).length() - PADDLE_LENGTH).abs() < 1e-3);
        // Resting left blade slopes down-right
        assert!(seg.end.x > seg.start.x);
        assert!(seg.end.y > seg.start.y);
    }

    #[test]
    fn test_plunger_ownership_is_exclusive() {
        let mut plunger = Plunger::new();
        let first = PointerId(1);
        let second = PointerId(2);

        assert!(plunger.try_acquire(first));
        assert!(!plunger.try_acquire(second));

        plunger.drag_to(first, 0.6);
        assert_eq!(plunger.pull_fraction(), 0.6);

        // Second pointer cannot move the spring
        plunger.drag_to(second, 0.1);
        assert_eq!(plunger.pull_fraction(), 0.6);

        // Nor release it
        plunger.lift(second);
        assert!(plunger.take_release().is_none());
        assert_eq!(plunger.owner(), Some(first));

        plunger.lift(first);
        assert_eq!(plunger.owner(), None);
        assert!(plunger.take_release().is_some());
        assert!(plunger.try_acquire(second));
    }

    #[test]
    fn test_plunger_release_consumed_once() {
        let mut plunger = Plunger::new();
        let id = PointerId(7);
        assert!(plunger.try_acquire(id));
        plunger.drag_to(id, 0.8);
        plunger.lift(id);

        assert_eq!(plunger.take_release(), Some(0.8));
        // Flag and pull are both gone
        assert_eq!(plunger.take_release(), None);
        assert_eq!(plunger.pull_fraction(), 0.0);
    }

    #[test]
    fn test_plunger_drag_clamps_out_of_range() {
        let mut plunger = Plunger::new();
        let id = PointerId(3);
        plunger.try_acquire(id);
        plunger.drag_to(id, 1.7);
        assert_eq!(plunger.pull_fraction(), 1.0);
        plunger.drag_to(id, -0.4);
        assert_eq!(plunger.pull_fraction(), 0.0);
    }

    #[test]
    fn test_plunger_abort_drops_without_release() {
        let mut plunger = Plunger::new();
        let id = PointerId(5);
        plunger.try_acquire(id);
        plunger.drag_to(id, 0.9);
        plunger.abort(id);
        assert_eq!(plunger.owner(), None);
        assert_eq!(plunger.pull_fraction(), 0.0);
        assert!(plunger.take_release().is_none());
    }

    #[test]
    fn test_ball_reset_at_launch_position() {
        let mut state = GameState::new();
        state.ball.vel = Vec2::new(123.0, -456.0);
        state.reset(BOUNDS);
        assert_eq!(state.ball.pos, Vec2::new(750.0, 1736.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }
}
