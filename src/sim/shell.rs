//! Cannon shells

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;
use crate::render::{Color, Drawable, Renderer};

/// A fired projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub body: Body,
    pub color: Color,
    /// Cleared once the shell comes to rest on the floor
    pub alive: bool,
}

impl Shell {
    pub fn new(pos: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            body: Body::moving(pos, SHELL_RADIUS, vel),
            color,
            alive: true,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.body.velocity()
    }

    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Integrate one step: gravity, then position, then wall rebound.
    ///
    /// A shell that ends the step slow and within two diameters of the
    /// floor is marked dead.
    pub fn advance(&mut self, dt: f32, gravity: f32, bounds: Vec2) {
        let vel = self.body.vel.get_or_insert(Vec2::ZERO);
        vel.y += gravity;
        let step = *vel * dt;
        self.body.pos += step;

        self.body
            .check_corners(bounds, SHELL_REFLECT_ORTHOGONAL, SHELL_REFLECT_PARALLEL);

        let resting = self.vel().length_squared() < SHELL_REST_SPEED_SQ;
        let grounded = self.body.pos.y > bounds.y - 2.0 * self.body.radius;
        if resting && grounded {
            log::debug!("Shell spent at ({:.0}, {:.0})", self.body.pos.x, self.body.pos.y);
            self.alive = false;
        }
    }
}

impl Drawable for Shell {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_circle(self.body.pos, self.body.radius, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    #[test]
    fn test_free_flight() {
        let mut shell = Shell::new(Vec2::new(400.0, 300.0), Vec2::new(10.0, -10.0), Color::RED);
        shell.advance(TIME_STEP, GRAVITY, BOUNDS);
        assert_eq!(shell.vel(), Vec2::new(10.0, -8.0));
        assert_eq!(shell.pos(), Vec2::new(410.0, 292.0));
        assert!(shell.alive);
    }

    #[test]
    fn test_wall_bounce_is_lossy() {
        let mut shell = Shell::new(Vec2::new(25.0, 300.0), Vec2::new(-10.0, -2.0), Color::RED);
        shell.advance(TIME_STEP, GRAVITY, BOUNDS);
        // vy became 0 after gravity, so only the normal component is visible
        assert_eq!(shell.pos().x, SHELL_RADIUS);
        assert_eq!(shell.vel().x, 8.0);
        assert_eq!(shell.vel().y, 0.0);
    }

    #[test]
    fn test_slow_shell_on_floor_dies() {
        let floor = SCREEN_HEIGHT - SHELL_RADIUS;
        let mut shell = Shell::new(Vec2::new(400.0, floor), Vec2::new(0.0, 0.0), Color::RED);
        shell.advance(TIME_STEP, GRAVITY, BOUNDS);
        // Gravity pushed it into the floor, rebound -1.6 -> speed^2 2.56 < 4
        assert_eq!(shell.pos().y, floor);
        assert!(!shell.alive);
    }

    #[test]
    fn test_slow_shell_in_the_air_lives() {
        let mut shell = Shell::new(Vec2::new(400.0, 200.0), Vec2::new(0.0, -2.0), Color::RED);
        shell.advance(TIME_STEP, GRAVITY, BOUNDS);
        assert_eq!(shell.vel(), Vec2::ZERO);
        assert!(shell.alive);
    }

    #[test]
    fn test_fast_shell_on_floor_lives() {
        let floor = SCREEN_HEIGHT - SHELL_RADIUS;
        let mut shell = Shell::new(Vec2::new(400.0, floor), Vec2::new(20.0, 0.0), Color::RED);
        shell.advance(TIME_STEP, GRAVITY, BOUNDS);
        assert!(shell.alive);
    }

    #[test]
    fn test_dropped_shell_eventually_rests() {
        let mut shell = Shell::new(Vec2::new(400.0, 100.0), Vec2::new(15.0, 0.0), Color::RED);
        let mut frames = 0;
        while shell.alive && frames < 1000 {
            shell.advance(TIME_STEP, GRAVITY, BOUNDS);
            frames += 1;
        }
        assert!(!shell.alive, "shell still bouncing after {} frames", frames);
    }

    proptest! {
        #[test]
        fn prop_gravity_accumulates(
            x in 100.0f32..700.0,
            y in 100.0f32..500.0,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
        ) {
            // Keep clear of the walls for one step
            let mut shell = Shell::new(Vec2::new(x, y), Vec2::new(vx * 0.1, vy * 0.1), Color::RED);
            let before = shell.vel().y;
            shell.advance(TIME_STEP, GRAVITY, BOUNDS);
            prop_assert_eq!(shell.vel().y, before + GRAVITY);
        }
    }
}
