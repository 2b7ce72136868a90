//! Shared physics component
//!
//! Every circular entity carries a `Body`: a center, a radius and, if it
//! moves, a velocity. Wall response lives here so shells and drifting
//! targets differ only in the coefficients they pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
    /// `None` for bodies that never move
    pub vel: Option<Vec2>,
}

impl Body {
    /// A body that never moves
    pub fn fixed(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            vel: None,
        }
    }

    pub fn moving(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            pos,
            radius,
            vel: Some(vel),
        }
    }

    /// Velocity, zero for fixed bodies
    pub fn velocity(&self) -> Vec2 {
        self.vel.unwrap_or(Vec2::ZERO)
    }

    /// Clamp the body inside `[0, bounds]` and rebound off any wall it crossed.
    ///
    /// Per axis: the normal velocity component is negated and scaled by
    /// `reflect_orthogonal`, the tangential one is scaled by
    /// `reflect_parallel`. X is resolved before Y, so a corner hit applies
    /// both. Returns true if any wall was hit. No-op for fixed or
    /// zero-radius bodies.
    pub fn check_corners(
        &mut self,
        bounds: Vec2,
        reflect_orthogonal: f32,
        reflect_parallel: f32,
    ) -> bool {
        let Some(vel) = self.vel.as_mut() else {
            return false;
        };
        if self.radius <= 0.0 {
            return false;
        }

        let mut bounced = false;
        for axis in 0..2 {
            let near = self.radius;
            let far = bounds[axis] - self.radius;
            let edge = if self.pos[axis] < near {
                near
            } else if self.pos[axis] > far {
                far
            } else {
                continue;
            };

            self.pos[axis] = edge;
            vel[axis] = -vel[axis] * reflect_orthogonal;
            vel[1 - axis] *= reflect_parallel;
            bounced = true;
        }
        bounced
    }
}
