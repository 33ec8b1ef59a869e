//! Per-frame simulation step
//!
//! Advances the ball by one variable-length frame: semi-implicit Euler
//! under gravity, then a constraint pass in a fixed order - walls (left,
//! right, top), paddles (left, right), plunger impulse, floor. There is
//! no substepping; a very large dt can tunnel the ball through a blade,
//! which the hosts mitigate by clamping dt before calling in.

use super::collision::{clamp_to_walls, paddle_bounce};
use super::layout::{self, Bounds};
use super::state::GameState;
use crate::consts::*;
use glam::Vec2;

/// Advance the playfield by `dt` seconds
///
/// A non-positive `dt` or degenerate bounds leave the state completely
/// untouched - the latter means "surface not ready yet", not an error.
pub fn step(state: &mut GameState, bounds: Bounds, dt: f32) {
    if dt <= 0.0 || !bounds.is_valid() {
        return;
    }

    let ball = &mut state.ball;

    // Gravity integration: velocity first, then position
    ball.vel.y += GRAVITY * dt;
    ball.pos += ball.vel * dt;

    // Constraint pass. Wall clamps bound the position before any blade
    // test sees it.
    clamp_to_walls(ball, bounds);
    paddle_bounce(ball, &state.left_paddle, bounds);
    paddle_bounce(ball, &state.right_paddle, bounds);

    // Spring launch, at most once per release. Stacks on top of whatever
    // the paddles just did.
    if let Some(pull) = state.plunger.take_release() {
        ball.vel.y -= PLUNGER_LAUNCH_SPEED * (PLUNGER_MIN_CHARGE + pull);
    }

    // Drain: past the bottom edge the ball is relaunched, not bounced
    if ball.pos.y > bounds.height - ball.radius {
        ball.pos = layout::launch_position(bounds);
        ball.vel = Vec2::new(0.0, -DRAIN_RELAUNCH_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PointerId;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds {
        width: 1000.0,
        height: 2000.0,
    };

    /// A spot far from every wall, blade, and the floor
    fn mid_air(state: &mut GameState) {
        state.ball.pos = Vec2::new(500.0, 600.0);
        state.ball.vel = Vec2::ZERO;
    }

    #[test]
    fn test_free_fall_matches_closed_form() {
        let mut state = GameState::new();
        mid_air(&mut state);
        let start_y = state.ball.pos.y;

        let dt = 1.0 / 120.0;
        let n = 20;
        for _ in 0..n {
            step(&mut state, BOUNDS, dt);
        }

        let expected_vy = GRAVITY * n as f32 * dt;
        assert!((state.ball.vel.y - expected_vy).abs() < 1e-2);

        // Semi-implicit Euler: y_n = y_0 + g dt^2 (1 + 2 + ... + n)
        let expected_y = start_y + GRAVITY * dt * dt * (n * (n + 1) / 2) as f32;
        assert!((state.ball.pos.y - expected_y).abs() < 1e-2);
        assert_eq!(state.ball.pos.x, 500.0);
    }

    #[test]
    fn test_single_step_scenario() {
        // One 100ms step from rest: vel (0, 160), pos advances 16 px
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(750.0, 1550.0);
        step(&mut state, BOUNDS, 0.1);
        assert!((state.ball.vel - Vec2::new(0.0, 160.0)).length() < 1e-3);
        assert!((state.ball.pos - Vec2::new(750.0, 1566.0)).length() < 1e-3);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut state = GameState::new();
        mid_air(&mut state);
        state.ball.vel = Vec2::new(40.0, -80.0);
        state.plunger.mark_released();

        let before = state.clone();
        step(&mut state, BOUNDS, 0.0);
        assert_eq!(state, before);

        // Including the pending release edge - it survives for a real step
        step(&mut state, BOUNDS, 1.0 / 120.0);
        assert!(state.ball.vel.y < -80.0);
    }

    #[test]
    fn test_degenerate_bounds_pause_the_sim() {
        let mut state = GameState::new();
        mid_air(&mut state);
        let before = state.clone();
        step(&mut state, Bounds::new(0.0, 0.0), 1.0 / 60.0);
        assert_eq!(state, before);
        step(&mut state, Bounds::new(1000.0, 0.0), 1.0 / 60.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_drain_relaunches_the_ball() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(550.0, 1990.0);
        state.ball.vel = Vec2::new(333.0, 900.0);

        step(&mut state, BOUNDS, 0.01);

        assert_eq!(state.ball.pos, layout::launch_position(BOUNDS));
        assert_eq!(state.ball.vel, Vec2::new(0.0, -600.0));
    }

    #[test]
    fn test_plunger_impulse_applies_exactly_once() {
        let mut state = GameState::new();
        mid_air(&mut state);

        let id = PointerId(1);
        assert!(state.plunger.try_acquire(id));
        state.plunger.drag_to(id, 0.5);
        state.plunger.lift(id);

        let dt = 1.0 / 120.0;
        step(&mut state, BOUNDS, dt);
        let expected = GRAVITY * dt - PLUNGER_LAUNCH_SPEED * (PLUNGER_MIN_CHARGE + 0.5);
        assert!((state.ball.vel.y - expected).abs() < 1e-2);
        assert_eq!(state.plunger.pull_fraction(), 0.0);

        // Next frame only gravity acts
        let vy = state.ball.vel.y;
        step(&mut state, BOUNDS, dt);
        assert!((state.ball.vel.y - (vy + GRAVITY * dt)).abs() < 1e-2);
    }

    #[test]
    fn test_paddle_gate_holds_through_the_step() {
        // Ball inside the left blade's broad-phase box, moving up fast
        // enough that gravity doesn't flip it downward within the frame
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(400.0, 1800.0);
        state.ball.vel = Vec2::new(0.0, -400.0);

        let dt = 1.0 / 120.0;
        step(&mut state, BOUNDS, dt);

        // Untouched by the blade: pure gravity on velocity
        assert!((state.ball.vel.y - (-400.0 + GRAVITY * dt)).abs() < 1e-3);
        assert_eq!(state.ball.vel.x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_ball_stays_inside_the_field(
            x in 22.0f32..978.0,
            y in 22.0f32..1978.0,
            vx in -3000.0f32..3000.0,
            vy in -3000.0f32..3000.0,
            dt in 0.0f32..0.05,
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let mut state = GameState::new();
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            state.left_paddle.pressed = left;
            state.right_paddle.pressed = right;

            step(&mut state, BOUNDS, dt);

            prop_assert!(state.ball.pos.is_finite());
            prop_assert!(state.ball.vel.is_finite());
            prop_assert!(state.ball.pos.x >= state.ball.radius);
            prop_assert!(state.ball.pos.x <= BOUNDS.width - state.ball.radius);
            prop_assert!(state.ball.pos.y >= state.ball.radius);
            prop_assert!(state.ball.pos.y <= BOUNDS.height - state.ball.radius);
        }

        #[test]
        fn prop_wall_bounce_never_gains_speed(
            x in -200.0f32..1200.0,
            y in -200.0f32..1800.0,
            vx in -3000.0f32..3000.0,
            vy in -3000.0f32..3000.0,
        ) {
            use crate::sim::state::Ball;

            let mut ball = Ball::new();
            ball.pos = Vec2::new(x, y);
            ball.vel = Vec2::new(vx, vy);
            clamp_to_walls(&mut ball, BOUNDS);

            prop_assert!(ball.vel.x.abs() <= vx.abs() + 1e-3);
            prop_assert!(ball.vel.y.abs() <= vy.abs() + 1e-3);
        }
    }
}
