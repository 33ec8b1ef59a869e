//! Pinfield - a single-ball pinball playfield
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, playfield state)
//! - `input`: Pointer-to-actuator mapping (paddle zones, plunger ownership)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Presentation preferences

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Playfield tuning constants
pub mod consts {
    /// Gravity (pixels/s², y-down)
    pub const GRAVITY: f32 = 1600.0;
    /// Fraction of speed kept on a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.9;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 22.0;

    /// Paddle defaults - both paddles pivot on the same horizontal line
    pub const PADDLE_LENGTH: f32 = 170.0;
    pub const PADDLE_THICKNESS: f32 = 20.0;
    /// Resting blade angle (degrees; sign flips for the right side)
    pub const PADDLE_REST_ANGLE_DEG: f32 = 22.0;
    /// Blade angle while the paddle is held (degrees)
    pub const PADDLE_FLIP_ANGLE_DEG: f32 = -25.0;
    /// Pivot line height above the bottom edge
    pub const PADDLE_Y_OFFSET: f32 = 220.0;
    /// Pivot x positions as width fractions
    pub const LEFT_PADDLE_X_FRACTION: f32 = 0.35;
    pub const RIGHT_PADDLE_X_FRACTION: f32 = 0.65;
    /// Bounce speed multiplier while held / at rest
    pub const PADDLE_BOUNCE_HELD: f32 = 1.3;
    pub const PADDLE_BOUNCE_REST: f32 = 0.9;
    /// Sideways kick injected on every paddle hit (pixels/s)
    pub const PADDLE_SIDE_PUSH: f32 = 220.0;
    /// Upward kick added on top of the reflected speed (pixels/s)
    pub const PADDLE_LIFT: f32 = 150.0;

    /// Plunger hit region (pixels), flush with the bottom edge
    pub const PLUNGER_WIDTH: f32 = 120.0;
    pub const PLUNGER_HEIGHT: f32 = 220.0;
    /// Plunger region center as a width fraction
    pub const PLUNGER_X_FRACTION: f32 = 0.85;
    /// Launch speed scale: vy -= PLUNGER_LAUNCH_SPEED * (PLUNGER_MIN_CHARGE + pull)
    pub const PLUNGER_LAUNCH_SPEED: f32 = 1400.0;
    /// Charge applied even on a zero-pull release
    pub const PLUNGER_MIN_CHARGE: f32 = 0.35;

    /// Relaunch position (width fraction) and speed after a drain
    pub const LAUNCH_X_FRACTION: f32 = 0.75;
    pub const DRAIN_RELAUNCH_SPEED: f32 = 600.0;

    /// Touch zones for the paddles, as width fractions
    pub const LEFT_ZONE_FRACTION: f32 = 0.35;
    pub const RIGHT_ZONE_FRACTION: f32 = 0.65;

    /// Decorative bumper radius
    pub const BUMPER_RADIUS: f32 = 26.0;
}

/// Unit direction vector for an angle given in degrees
///
/// Screen coordinates: +x right, +y down, so positive angles sweep
/// below the horizontal.
#[inline]
pub fn heading_from_degrees(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
