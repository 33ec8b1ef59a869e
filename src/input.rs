//! Pointer-to-actuator mapping
//!
//! Turns raw pointer press/move/lift events into actuator command state:
//! the paddle pressed flags and the plunger's ownership, pull, and release
//! edge. All pointer identity tracking lives here - the simulation core
//! only ever sees the opaque ownership token.
//!
//! Paddle flags are level-triggered and recomputed after every event from
//! the full set of tracked pointers, so two fingers can hold one side and
//! lifting either leaves the paddle held by the other.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Bounds, GameState, Plunger, PointerId};

/// A pointer currently pressed somewhere on the field
#[derive(Debug, Clone, Copy)]
struct TrackedPointer {
    id: PointerId,
    pos: Vec2,
}

/// Translates host pointer events into actuator commands
///
/// The host forwards `pointer_down`/`pointer_move`/`pointer_up` (and
/// `pointer_cancel` when the platform revokes a gesture) before each
/// simulation step; events never interleave with stepping.
#[derive(Debug, Default)]
pub struct InputMapper {
    pointers: Vec<TrackedPointer>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// A press began at `pos`
    pub fn pointer_down(&mut self, id: PointerId, pos: Vec2, bounds: Bounds, state: &mut GameState) {
        self.track(id, pos);

        // Plunger ownership is only ever acquired by a press that begins
        // inside the hit region, and only while nobody else holds it
        if Plunger::hit_rect(bounds).contains(pos) && state.plunger.try_acquire(id) {
            drag_plunger(&mut state.plunger, id, pos, bounds);
        }

        self.refresh_paddles(bounds, state);
    }

    /// A pressed pointer moved; unknown ids (hover traffic) are ignored
    pub fn pointer_move(&mut self, id: PointerId, pos: Vec2, bounds: Bounds, state: &mut GameState) {
        let Some(tracked) = self.pointers.iter_mut().find(|p| p.id == id) else {
            return;
        };
        tracked.pos = pos;

        // The owner keeps driving the spring wherever the pointer goes
        drag_plunger(&mut state.plunger, id, pos, bounds);

        self.refresh_paddles(bounds, state);
    }

    /// A pointer lifted; an owning pointer fires the plunger release
    /// regardless of where it lifted
    pub fn pointer_up(&mut self, id: PointerId, bounds: Bounds, state: &mut GameState) {
        self.untrack(id);
        state.plunger.lift(id);
        self.refresh_paddles(bounds, state);
    }

    /// The platform cancelled a pointer (e.g. the gesture was claimed by
    /// the system): drop it without firing a launch
    pub fn pointer_cancel(&mut self, id: PointerId, bounds: Bounds, state: &mut GameState) {
        self.untrack(id);
        state.plunger.abort(id);
        self.refresh_paddles(bounds, state);
    }

    fn track(&mut self, id: PointerId, pos: Vec2) {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(tracked) => tracked.pos = pos,
            None => self.pointers.push(TrackedPointer { id, pos }),
        }
    }

    fn untrack(&mut self, id: PointerId) {
        self.pointers.retain(|p| p.id != id);
    }

    /// Recompute both paddle flags from the tracked pointer set
    fn refresh_paddles(&self, bounds: Bounds, state: &mut GameState) {
        state.left_paddle.pressed = self
            .pointers
            .iter()
            .any(|p| p.pos.x < bounds.width * LEFT_ZONE_FRACTION);
        state.right_paddle.pressed = self
            .pointers
            .iter()
            .any(|p| p.pos.x > bounds.width * RIGHT_ZONE_FRACTION);
    }
}

/// Map the owning pointer's vertical offset into a pull fraction
fn drag_plunger(plunger: &mut Plunger, id: PointerId, pos: Vec2, bounds: Bounds) {
    let rect = Plunger::hit_rect(bounds);
    plunger.drag_to(id, (pos.y - rect.min.y) / PLUNGER_HEIGHT);
}
