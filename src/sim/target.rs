//! Targets: static discs and drifting discs

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::bodies_touch;
use super::shell::Shell;
use crate::consts::*;
use crate::render::{Color, Drawable, Renderer};

/// Target behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetKind {
    /// Never moves
    #[default]
    Static,
    /// Drifts at constant speed, bouncing elastically off the walls
    Moving,
}

/// A target entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub kind: TargetKind,
    pub body: Body,
    pub color: Color,
}

impl Target {
    pub fn fixed(id: u32, pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            id,
            kind: TargetKind::Static,
            body: Body::fixed(pos, radius),
            color,
        }
    }

    pub fn moving(id: u32, pos: Vec2, radius: f32, vel: Vec2, color: Color) -> Self {
        Self {
            id,
            kind: TargetKind::Moving,
            body: Body::moving(pos, radius, vel),
            color,
        }
    }

    /// Spawn at a random on-screen spot with a random color.
    ///
    /// Centers are whole pixels chosen so the disc starts fully inside
    /// `bounds`; moving targets also get whole-number drift in
    /// `[-TARGET_MAX_DRIFT, TARGET_MAX_DRIFT]` per axis.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        id: u32,
        kind: TargetKind,
        radius: u32,
        bounds: Vec2,
    ) -> Self {
        let r = radius as i64;
        let mut coord = |extent: f32| {
            let hi = (extent as i64 - r).max(r);
            rng.random_range(r..=hi) as f32
        };
        let pos = Vec2::new(coord(bounds.x), coord(bounds.y));
        let color = Color::random(rng);

        match kind {
            TargetKind::Static => Self::fixed(id, pos, radius as f32, color),
            TargetKind::Moving => {
                let vel = Vec2::new(
                    rng.random_range(-TARGET_MAX_DRIFT..=TARGET_MAX_DRIFT) as f32,
                    rng.random_range(-TARGET_MAX_DRIFT..=TARGET_MAX_DRIFT) as f32,
                );
                Self::moving(id, pos, radius as f32, vel, color)
            }
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Whether `shell` touches this target
    pub fn check_collision(&self, shell: &Shell) -> bool {
        bodies_touch(&self.body, &shell.body)
    }

    /// One frame of motion
    pub fn advance(&mut self, bounds: Vec2) {
        match self.kind {
            TargetKind::Static => {}
            TargetKind::Moving => {
                if let Some(vel) = self.body.vel {
                    self.body.pos += vel;
                }
                self.body
                    .check_corners(bounds, TARGET_REFLECT, TARGET_REFLECT);
            }
        }
    }
}

impl Drawable for Target {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_circle(self.body.pos, self.body.radius, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    #[test]
    fn test_collision_overlap() {
        let target = Target::fixed(1, Vec2::new(100.0, 100.0), 30.0, Color::WHITE);
        let shell = Shell::new(Vec2::new(120.0, 100.0), Vec2::ZERO, Color::RED);
        assert!(target.check_collision(&shell));
    }

    #[test]
    fn test_collision_miss() {
        let target = Target::fixed(1, Vec2::new(100.0, 100.0), 30.0, Color::WHITE);
        let shell = Shell::new(Vec2::new(200.0, 100.0), Vec2::ZERO, Color::RED);
        assert!(!target.check_collision(&shell));
    }

    #[test]
    fn test_static_target_stays_put() {
        let mut target = Target::fixed(1, Vec2::new(10.0, 10.0), 30.0, Color::WHITE);
        target.advance(BOUNDS);
        assert_eq!(target.pos(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_moving_target_bounces_elastically() {
        let mut target = Target::moving(
            1,
            Vec2::new(769.0, 300.0),
            30.0,
            Vec2::new(2.0, -1.0),
            Color::WHITE,
        );
        target.advance(BOUNDS);
        assert_eq!(target.pos(), Vec2::new(770.0, 299.0));
        assert_eq!(target.body.velocity(), Vec2::new(-2.0, -1.0));
    }

    #[test]
    fn test_random_targets_fit_on_screen() {
        let mut rng = Pcg32::seed_from_u64(77);
        for id in 0..200 {
            let kind = if id % 2 == 0 {
                TargetKind::Static
            } else {
                TargetKind::Moving
            };
            let radius = 1 + id % 30;
            let target = Target::random(&mut rng, id, kind, radius, BOUNDS);
            let r = radius as f32;
            assert_eq!(target.radius(), r);
            assert!(target.pos().x >= r && target.pos().x <= BOUNDS.x - r);
            assert!(target.pos().y >= r && target.pos().y <= BOUNDS.y - r);
            assert_eq!(target.pos().x.fract(), 0.0);

            match kind {
                TargetKind::Static => assert!(target.body.vel.is_none()),
                TargetKind::Moving => {
                    let vel = target.body.velocity();
                    assert!(vel.x.abs() <= 2.0 && vel.y.abs() <= 2.0);
                    assert_eq!(vel.x.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_random_is_deterministic() {
        let mut a = Pcg32::seed_from_u64(5);
        let mut b = Pcg32::seed_from_u64(5);
        let ta = Target::random(&mut a, 1, TargetKind::Moving, 12, BOUNDS);
        let tb = Target::random(&mut b, 1, TargetKind::Moving, 12, BOUNDS);
        assert_eq!(ta, tb);
    }
}
