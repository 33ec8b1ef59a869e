//! Deterministic playfield simulation
//!
//! All physics lives here. This module must stay pure:
//! - One step per frame, driven by elapsed time from the host
//! - Geometry derived fresh from the current bounds, never cached
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod layout;
pub mod state;
pub mod step;

pub use collision::{WallContacts, clamp_to_walls, paddle_bounce};
pub use geom::{Rect, Segment};
pub use layout::{Bounds, Bumper, bumpers, lane, launch_position, plunger_rect};
pub use state::{Ball, GameState, Paddle, PaddleSide, Plunger, PointerId};
pub use step::step;
