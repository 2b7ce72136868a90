//! The player's cannon
//!
//! Aims at the pointer, charges while the fire button is held and emits a
//! shell on release. It is the only place shells are created.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shell::Shell;
use crate::consts::*;
use crate::render::{Color, Drawable, Renderer};
use crate::{heading, polar_to_cartesian};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cannon {
    pub pos: Vec2,
    /// Barrel direction (radians, screen coordinates)
    pub angle: f32,
    /// Current charge, always within `[min_power, max_power]`
    pub power: f32,
    pub min_power: f32,
    pub max_power: f32,
    /// Charging (fire button held)
    pub active: bool,
    pub color: Color,
}

impl Cannon {
    /// Cannon resting near the floor, centered horizontally
    pub fn new(bounds: Vec2) -> Self {
        Self::at(Vec2::new(
            (bounds.x / 2.0).floor(),
            bounds.y - CANNON_FLOOR_OFFSET,
        ))
    }

    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            power: CANNON_MIN_POWER,
            min_power: CANNON_MIN_POWER,
            max_power: CANNON_MAX_POWER,
            active: false,
            color: Color::RED,
        }
    }

    /// Start charging
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// One frame of charge; no-op unless charging and below max
    pub fn gain(&mut self, increment: f32) {
        if self.active && self.power < self.max_power {
            self.power = (self.power + increment).min(self.max_power);
        }
    }

    /// Fire a shell along the barrel and reset the charge
    pub fn strike<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Shell {
        let vel = polar_to_cartesian(self.power, self.angle);
        let shell = Shell::new(self.pos, vel, Color::random(rng));
        log::debug!(
            "Fired shell: power {:.0}, angle {:.2} rad",
            self.power,
            self.angle
        );
        self.power = self.min_power;
        self.active = false;
        shell
    }

    /// Point the barrel at `target`
    pub fn set_angle(&mut self, target: Vec2) {
        self.angle = heading(self.pos, target);
    }

    /// Slide horizontally, refusing to move further into an edge margin.
    ///
    /// The margin is checked before the move, so the cannon may end up to
    /// one step inside it but never walks deeper.
    pub fn shift(&mut self, delta: f32, width: f32) {
        let clear_of_left = self.pos.x > CANNON_EDGE_MARGIN || delta > 0.0;
        let clear_of_right = self.pos.x < width - CANNON_EDGE_MARGIN || delta < 0.0;
        if clear_of_left && clear_of_right {
            self.pos.x += delta;
        }
    }

    /// Barrel outline: a quad `power` long and twice the half-width across
    pub fn barrel_polygon(&self) -> [Vec2; 4] {
        let perp = polar_to_cartesian(
            CANNON_BARREL_HALF_WIDTH,
            self.angle - std::f32::consts::FRAC_PI_2,
        );
        let barrel = polar_to_cartesian(self.power, self.angle);
        let base = self.pos;
        [
            base + perp,
            base + perp + barrel,
            base + barrel - perp,
            base - perp,
        ]
    }
}

impl Drawable for Cannon {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_polygon(&self.barrel_polygon(), self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_starting_position() {
        let cannon = Cannon::new(Vec2::new(800.0, 600.0));
        assert_eq!(cannon.pos, Vec2::new(400.0, 570.0));
        assert_eq!(cannon.power, CANNON_MIN_POWER);
        assert!(!cannon.active);
    }

    #[test]
    fn test_strike_straight_right() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut cannon = Cannon::at(Vec2::new(400.0, 570.0));
        let shell = cannon.strike(&mut rng);
        assert_eq!(shell.pos(), Vec2::new(400.0, 570.0));
        assert_eq!(shell.vel(), Vec2::new(10.0, 0.0));
        assert_eq!(shell.radius(), SHELL_RADIUS);
        assert!(shell.alive);
    }

    #[test]
    fn test_gain_only_while_active() {
        let mut cannon = Cannon::at(Vec2::new(400.0, 570.0));
        cannon.gain(CANNON_GAIN);
        assert_eq!(cannon.power, CANNON_MIN_POWER);

        cannon.activate();
        cannon.gain(CANNON_GAIN);
        assert_eq!(cannon.power, CANNON_MIN_POWER + CANNON_GAIN);

        for _ in 0..100 {
            cannon.gain(CANNON_GAIN);
        }
        assert_eq!(cannon.power, CANNON_MAX_POWER);
    }

    #[test]
    fn test_gain_never_overshoots() {
        let mut cannon = Cannon::at(Vec2::ZERO);
        cannon.activate();
        for _ in 0..20 {
            cannon.gain(7.0);
        }
        assert_eq!(cannon.power, CANNON_MAX_POWER);
    }

    #[test]
    fn test_set_angle_tracks_pointer() {
        let mut cannon = Cannon::at(Vec2::new(400.0, 570.0));
        cannon.set_angle(Vec2::new(400.0, 0.0));
        assert!((cannon.angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        cannon.set_angle(Vec2::new(0.0, 570.0));
        assert!((cannon.angle - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_shift_respects_margins() {
        let mut cannon = Cannon::at(Vec2::new(32.0, 570.0));
        cannon.shift(-5.0, 800.0);
        // Guard checked before moving: 32 > 30 so the step is taken
        assert_eq!(cannon.pos.x, 27.0);
        cannon.shift(-5.0, 800.0);
        assert_eq!(cannon.pos.x, 27.0);
        // Moving away from the wall is always allowed
        cannon.shift(5.0, 800.0);
        assert_eq!(cannon.pos.x, 32.0);

        let mut cannon = Cannon::at(Vec2::new(770.0, 570.0));
        cannon.shift(5.0, 800.0);
        assert_eq!(cannon.pos.x, 770.0);
        cannon.shift(-5.0, 800.0);
        assert_eq!(cannon.pos.x, 765.0);
    }

    #[test]
    fn test_barrel_polygon_along_x() {
        let mut cannon = Cannon::at(Vec2::new(100.0, 100.0));
        cannon.power = 20.0;
        let quad = cannon.barrel_polygon();
        let expect = [
            Vec2::new(100.0, 95.0),
            Vec2::new(120.0, 95.0),
            Vec2::new(120.0, 105.0),
            Vec2::new(100.0, 105.0),
        ];
        for (got, want) in quad.iter().zip(expect) {
            assert!((*got - want).length() < 1e-4, "{got} != {want}");
        }
    }

    proptest! {
        #[test]
        fn prop_power_stays_in_range(steps in proptest::collection::vec(0u8..4, 0..200)) {
            let mut rng = Pcg32::seed_from_u64(9);
            let mut cannon = Cannon::at(Vec2::new(400.0, 570.0));
            for step in steps {
                match step {
                    0 => cannon.activate(),
                    1 => cannon.gain(CANNON_GAIN),
                    2 => cannon.gain(3.5),
                    _ => {
                        let _ = cannon.strike(&mut rng);
                        prop_assert_eq!(cannon.power, CANNON_MIN_POWER);
                        prop_assert!(!cannon.active);
                    }
                }
                prop_assert!(cannon.power >= cannon.min_power);
                prop_assert!(cannon.power <= cannon.max_power);
            }
        }
    }
}
