//! Shape tessellation and per-frame scene assembly
//!
//! Everything is emitted as a flat triangle list in playfield pixel
//! coordinates; the pipeline maps pixels to NDC at draw time.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{self, Bounds, GameState, Plunger, Rect, Segment};

/// Generate vertices for a filled circle
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(out: &mut Vec<Vertex>, r: Rect, color: [f32; 4]) {
    out.push(Vertex::new(r.min.x, r.min.y, color));
    out.push(Vertex::new(r.max.x, r.min.y, color));
    out.push(Vertex::new(r.max.x, r.max.y, color));

    out.push(Vertex::new(r.min.x, r.min.y, color));
    out.push(Vertex::new(r.max.x, r.max.y, color));
    out.push(Vertex::new(r.min.x, r.max.y, color));
}

/// Generate vertices for a thick segment with round caps (the paddles'
/// drawn shape)
pub fn capsule(out: &mut Vec<Vertex>, seg: Segment, thickness: f32, color: [f32; 4]) {
    let half = thickness / 2.0;
    let dir = seg.end - seg.start;
    let len = dir.length();
    if len < f32::EPSILON {
        circle(out, seg.start, half, color, 16);
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x) / len;

    let a = seg.start + perp * half;
    let b = seg.start - perp * half;
    let c = seg.end + perp * half;
    let d = seg.end - perp * half;

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(d.x, d.y, color));

    circle(out, seg.start, half, color, 12);
    circle(out, seg.end, half, color, 12);
}

/// Generate vertices for a rectangle with rounded corners
pub fn rounded_rect(out: &mut Vec<Vertex>, r: Rect, corner: f32, color: [f32; 4]) {
    let corner = corner.min(r.width() / 2.0).min(r.height() / 2.0);

    // Center band plus two side bands, then corner disks
    rect(
        out,
        Rect::new(
            Vec2::new(r.min.x + corner, r.min.y),
            Vec2::new(r.max.x - corner, r.max.y),
        ),
        color,
    );
    rect(
        out,
        Rect::new(
            Vec2::new(r.min.x, r.min.y + corner),
            Vec2::new(r.min.x + corner, r.max.y - corner),
        ),
        color,
    );
    rect(
        out,
        Rect::new(
            Vec2::new(r.max.x - corner, r.min.y + corner),
            Vec2::new(r.max.x, r.max.y - corner),
        ),
        color,
    );

    for (cx, cy) in [
        (r.min.x + corner, r.min.y + corner),
        (r.max.x - corner, r.min.y + corner),
        (r.min.x + corner, r.max.y - corner),
        (r.max.x - corner, r.max.y - corner),
    ] {
        circle(out, Vec2::new(cx, cy), corner, color, 8);
    }
}

/// Spring handle inset inside the plunger housing (pixels)
const HANDLE_INSET: f32 = 20.0;
const HANDLE_HEIGHT: f32 = 60.0;
const HANDLE_CORNER: f32 = 12.0;

/// Assemble the whole table as one triangle list
pub fn scene_vertices(state: &GameState, bounds: Bounds) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(512);

    // Playfield background
    rect(
        &mut out,
        Rect::new(Vec2::ZERO, Vec2::new(bounds.width, bounds.height)),
        colors::PLAYFIELD,
    );

    // Decorative lane and bumpers
    capsule(&mut out, sim::lane(bounds), 6.0, colors::LANE);
    for bumper in sim::bumpers(bounds) {
        circle(&mut out, bumper.center, bumper.radius, colors::BUMPER, 24);
    }

    // Plunger housing and spring handle; the handle slides down with the pull
    let housing = Plunger::hit_rect(bounds);
    rect(&mut out, housing, colors::PLUNGER_HOUSING);

    let pull_distance = state.plunger.pull_fraction() * (PLUNGER_HEIGHT - 2.0 * HANDLE_INSET);
    let handle_top = housing.min.y + HANDLE_INSET + pull_distance;
    rounded_rect(
        &mut out,
        Rect::new(
            Vec2::new(housing.min.x + HANDLE_INSET, handle_top),
            Vec2::new(housing.max.x - HANDLE_INSET, handle_top + HANDLE_HEIGHT),
        ),
        HANDLE_CORNER,
        colors::PLUNGER_HANDLE,
    );

    // Paddles
    capsule(
        &mut out,
        state.left_paddle.segment(bounds),
        PADDLE_THICKNESS,
        colors::PADDLE,
    );
    capsule(
        &mut out,
        state.right_paddle.segment(bounds),
        PADDLE_THICKNESS,
        colors::PADDLE,
    );

    // Ball on top
    circle(
        &mut out,
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        32,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_triangle_count() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::ZERO, 10.0, colors::BALL, 16);
        assert_eq!(out.len(), 16 * 3);
    }

    #[test]
    fn test_capsule_degenerate_segment_is_a_dot() {
        let mut out = Vec::new();
        let p = Vec2::new(5.0, 5.0);
        capsule(&mut out, Segment::new(p, p), 10.0, colors::PADDLE);
        assert!(!out.is_empty());
        assert_eq!(out.len() % 3, 0);
    }

    #[test]
    fn test_scene_is_a_triangle_list() {
        let state = GameState::new();
        let bounds = Bounds::new(1000.0, 2000.0);
        let verts = scene_vertices(&state, bounds);
        assert!(!verts.is_empty());
        assert_eq!(verts.len() % 3, 0);
    }
}
