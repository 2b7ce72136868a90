//! Session configuration
//!
//! Loaded from an optional JSON file; CLI flags override individual fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Largest window edge we agree to open
pub const MAX_DIMENSION: u32 = 8192;
/// Longest window title accepted
pub const MAX_TITLE_LEN: usize = 128;
/// Narrowest play area: a full-size target fits across it
pub const MIN_WIDTH: u32 = 2 * TARGET_BASE_RADIUS as u32;
/// Shortest play area: a full-size target fits, and a shell fired from the
/// cannon row clears the ceiling
pub const MIN_HEIGHT: u32 = {
    let target = 2 * TARGET_BASE_RADIUS as u32;
    let cannon = (CANNON_FLOOR_OFFSET + 2.0 * SHELL_RADIUS) as u32;
    if target > cannon { target } else { cannon }
};

/// Game session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Window ===
    /// Play area width in pixels
    pub width: u32,
    /// Play area height in pixels
    pub height: u32,
    /// Window title. The headless backend has no window, so it only shows
    /// up in the startup log.
    pub title: String,
    /// Host loop rate (frames per second)
    pub frame_rate: u32,

    // === Gameplay ===
    /// Static targets per wave (the same number of moving targets is added)
    pub n_targets: u32,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH as u32,
            height: SCREEN_HEIGHT as u32,
            title: WINDOW_TITLE.to_string(),
            frame_rate: FRAME_RATE,
            n_targets: TARGETS_PER_WAVE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse without validating (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        for (field, value, min) in [
            ("width", self.width, MIN_WIDTH),
            ("height", self.height, MIN_HEIGHT),
        ] {
            if !(min..=MAX_DIMENSION).contains(&value) {
                return Err(GameError::InvalidConfig {
                    field,
                    reason: format!("{} is outside {}..={}", value, min, MAX_DIMENSION),
                });
            }
        }
        // Cannon needs room to move between its edge margins
        if (self.width as f32) <= 2.0 * CANNON_EDGE_MARGIN {
            return Err(GameError::InvalidConfig {
                field: "width",
                reason: format!("must exceed {}", 2.0 * CANNON_EDGE_MARGIN),
            });
        }
        if self.frame_rate == 0 {
            return Err(GameError::InvalidConfig {
                field: "frame_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.n_targets == 0 {
            return Err(GameError::InvalidConfig {
                field: "n_targets",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(GameError::InvalidConfig {
                field: "title",
                reason: format!("longer than {} characters", MAX_TITLE_LEN),
            });
        }
        Ok(())
    }

    /// Play area size as a vector
    pub fn bounds(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32, self.height as f32)
    }
}
