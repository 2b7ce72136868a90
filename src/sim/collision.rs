//! Collision detection between circular bodies

use glam::Vec2;

use super::body::Body;

/// Check two circles; touching counts as a hit
#[inline]
pub fn circle_circle(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance_squared(b_pos) <= (a_radius + b_radius) * (a_radius + b_radius)
}

/// Whether two bodies touch
#[inline]
pub fn bodies_touch(a: &Body, b: &Body) -> bool {
    circle_circle(a.pos, a.radius, b.pos, b.radius)
}
