//! Score bookkeeping

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::{Color, Drawable, Renderer};

/// Top-left corner of the score table
const TABLE_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
const LINE_SPACING: f32 = 30.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub targets_destroyed: u32,
    pub shells_used: u32,
}

impl ScoreTable {
    /// Destroyed minus fired; goes negative for wasteful play
    pub fn score(&self) -> i64 {
        self.targets_destroyed as i64 - self.shells_used as i64
    }

    pub fn record_shot(&mut self) {
        self.shells_used += 1;
    }

    pub fn record_destroyed(&mut self, count: u32) {
        self.targets_destroyed += count;
    }

    /// The three HUD lines with their colors
    pub fn lines(&self) -> [(String, Color); 3] {
        [
            (format!("Destroyed: {}", self.targets_destroyed), Color::WHITE),
            (format!("Shells used: {}", self.shells_used), Color::WHITE),
            (format!("Total: {}", self.score()), Color::RED),
        ]
    }
}

impl Drawable for ScoreTable {
    fn draw(&self, renderer: &mut dyn Renderer) {
        for (i, (text, color)) in self.lines().iter().enumerate() {
            let pos = TABLE_ORIGIN + Vec2::new(0.0, LINE_SPACING * i as f32);
            renderer.draw_text(text, pos, *color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_can_go_negative() {
        let mut table = ScoreTable::default();
        table.record_shot();
        table.record_shot();
        table.record_destroyed(1);
        assert_eq!(table.score(), -1);
        table.record_destroyed(3);
        assert_eq!(table.score(), 2);
    }

    #[test]
    fn test_lines() {
        let table = ScoreTable {
            targets_destroyed: 4,
            shells_used: 6,
        };
        let lines = table.lines();
        assert_eq!(lines[0].0, "Destroyed: 4");
        assert_eq!(lines[1].0, "Shells used: 6");
        assert_eq!(lines[2], ("Total: -2".to_string(), Color::RED));
    }
}
