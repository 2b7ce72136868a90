//! Gun Game - a 2D artillery arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (cannon, shells, targets, scoring)
//! - `render`: Renderer abstraction plus a tessellating mesh backend
//! - `input`: Input events, input sources, demo autopilot
//! - `config`: Data-driven session configuration
//! - `app`: Host loop and frame pacing

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference window size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &str = "Gun Game 2";
    /// Host loop rate (frames per second)
    pub const FRAME_RATE: u32 = 15;
    /// Maximum frames run in one catch-up burst
    pub const MAX_CATCHUP_FRAMES: u32 = 4;

    /// One simulation step per frame
    pub const TIME_STEP: f32 = 1.0;
    /// Downward acceleration applied to shells each frame
    pub const GRAVITY: f32 = 2.0;

    /// Shell defaults
    pub const SHELL_RADIUS: f32 = 20.0;
    /// Wall bounce loses 20% of normal speed
    pub const SHELL_REFLECT_ORTHOGONAL: f32 = 0.8;
    /// ...and 10% of tangential speed (friction)
    pub const SHELL_REFLECT_PARALLEL: f32 = 0.9;
    /// Speed squared below which a grounded shell is spent
    pub const SHELL_REST_SPEED_SQ: f32 = 4.0;

    /// Moving targets bounce without losing energy
    pub const TARGET_REFLECT: f32 = 1.0;
    /// Moving target velocity components are drawn from [-N, N]
    pub const TARGET_MAX_DRIFT: i32 = 2;
    /// Target radius at score zero
    pub const TARGET_BASE_RADIUS: i64 = 30;
    /// Static + moving targets spawned per wave (each)
    pub const TARGETS_PER_WAVE: u32 = 3;

    /// Cannon defaults
    pub const CANNON_MIN_POWER: f32 = 10.0;
    pub const CANNON_MAX_POWER: f32 = 50.0;
    pub const CANNON_GAIN: f32 = 2.0;
    /// Half width of the barrel polygon
    pub const CANNON_BARREL_HALF_WIDTH: f32 = 5.0;
    /// Cannon keeps this far from the side walls
    pub const CANNON_EDGE_MARGIN: f32 = 30.0;
    /// Cannon sits this far above the floor
    pub const CANNON_FLOOR_OFFSET: f32 = 30.0;
    /// Horizontal step per arrow key press
    pub const CANNON_KEY_STEP: f32 = 5.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the direction from `from` toward `to`
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);

        let p = polar_to_cartesian(5.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_heading() {
        let from = Vec2::new(400.0, 570.0);
        assert!(heading(from, Vec2::new(500.0, 570.0)).abs() < 1e-6);
        // Screen y grows downward: a point above the cannon is at -pi/2
        let up = heading(from, Vec2::new(400.0, 100.0));
        assert!((up + PI / 2.0).abs() < 1e-6);
    }
}
