//! Game state
//!
//! The whole session lives in one `GameState`, owned by the host and handed
//! to each frame function. Randomness comes only from its seeded RNG, so a
//! seed plus an input script replays a session exactly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cannon::Cannon;
use super::score::ScoreTable;
use super::shell::Shell;
use super::target::Target;
use super::tick::new_mission;
use crate::config::GameConfig;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (target placement, sizes, colors)
    pub rng: Pcg32,
    /// Play area size
    pub bounds: Vec2,
    /// Static targets per wave (the same number of moving ones is added)
    pub n_targets: u32,
    /// Player cannon
    pub cannon: Cannon,
    /// Shells in flight
    pub shells: Vec<Shell>,
    /// Live targets, in spawn order
    pub targets: Vec<Target>,
    pub score: ScoreTable,
    /// Frames processed
    pub frame: u64,
    /// Waves spawned so far (the first wave is 1)
    pub wave: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Start a session and spawn the first wave
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let bounds = config.bounds();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            n_targets: config.n_targets,
            cannon: Cannon::new(bounds),
            shells: Vec::new(),
            targets: Vec::new(),
            score: ScoreTable::default(),
            frame: 0,
            wave: 0,
            next_id: 1,
        };

        new_mission(&mut state);

        state
    }

    /// Reference-sized session with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&GameConfig::default(), seed)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Nothing left on the board and nothing in flight
    pub fn wave_cleared(&self) -> bool {
        self.targets.is_empty() && self.shells.is_empty()
    }
}
