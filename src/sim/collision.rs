//! Collision detection and response for the walls and paddle blades
//!
//! Walls are clamp-and-reflect with a fixed restitution, handled per axis.
//! Paddles use a cheap broad-phase box around the blade segment and an
//! impulse response along the blade heading rather than an exact segment
//! reflection - the blade snaps between two angles, so a physically exact
//! reflection would mostly amplify the discontinuity.

use glam::Vec2;

use super::layout::Bounds;
use super::state::{Ball, Paddle};
use crate::consts::*;

/// Which walls clamped the ball during a constraint pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Clamp the ball inside the left/right/top walls, reflecting the
/// crossed axis with energy loss
///
/// The sign of the reflected component is forced to point back into the
/// field, so a ball that spawns past a wall cannot tunnel out. The floor
/// is deliberately absent - draining is handled by the step's reset rule.
pub fn clamp_to_walls(ball: &mut Ball, bounds: Bounds) -> WallContacts {
    let mut contacts = WallContacts::default();

    if ball.pos.x < ball.radius {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs() * WALL_RESTITUTION;
        contacts.left = true;
    }
    if ball.pos.x > bounds.width - ball.radius {
        ball.pos.x = bounds.width - ball.radius;
        ball.vel.x = -ball.vel.x.abs() * WALL_RESTITUTION;
        contacts.right = true;
    }
    if ball.pos.y < ball.radius {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs() * WALL_RESTITUTION;
        contacts.top = true;
    }

    contacts
}

/// Strike the ball with one paddle blade, if it is in contact
///
/// Broad phase: ball center inside the blade's AABB padded by the ball
/// radius. Directional gate: only a descending ball is struck - this is
/// what stops the blade from re-triggering every frame while the ball
/// rests on it or climbs away. Returns whether the blade connected.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle, bounds: Bounds) -> bool {
    let blade = paddle.segment(bounds);
    if !blade.aabb(ball.radius).contains(ball.pos) {
        return false;
    }
    if ball.vel.y <= 0.0 {
        return false;
    }

    let normal = paddle.heading();
    let speed = ball.vel.length();
    let strength = paddle.bounce_strength();

    ball.vel = Vec2::new(
        normal.x * speed * strength + paddle.side_push(),
        -normal.y * speed * strength - PADDLE_LIFT,
    );
    // Seat the ball on the pivot line so successive frames can't sink it
    // into the blade
    ball.pos.y = paddle.anchor(bounds).y - ball.radius;

    true
}
