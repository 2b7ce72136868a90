//! Input events and sources
//!
//! A source hands the simulation a batch of discrete events each frame and
//! answers where the pointer is. Two sources ship with the crate: a replayed
//! script and a demo autopilot.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Keyboard keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Any other key code (ignored)
    Other(u32),
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Any other button number (ignored)
    Other(u8),
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
}

/// Everything a source reports for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub pointer: Vec2,
    /// Pointer is over the play area
    pub focused: bool,
}

/// Per-frame input provider
pub trait InputSource {
    /// Look at the state before this frame's poll. Most sources ignore it.
    fn prepare(&mut self, _state: &GameState) {}
    /// Events since the previous frame, in arrival order
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn pointer_position(&self) -> Vec2;
    fn has_focus(&self) -> bool;
}

/// Replays a fixed list of frames, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
    pointer: Vec2,
    focused: bool,
    exhausted: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Parse a JSON array of frames
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let frames: Vec<FrameInput> = serde_json::from_str(json)?;
        Ok(Self::new(frames))
    }

    /// Frames still queued
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.frames.pop_front() {
            Some(frame) => {
                self.pointer = frame.pointer;
                self.focused = frame.focused;
                frame.events
            }
            None => {
                if !self.exhausted {
                    log::warn!("Input script ended without Quit; stopping");
                    self.exhausted = true;
                }
                vec![InputEvent::Quit]
            }
        }
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

/// Frames the autopilot waits between shots
const AUTOPILOT_COOLDOWN: u32 = 6;
/// How far ahead (in frames) it leads a drifting target
const AUTOPILOT_LEAD_FRAMES: f32 = 8.0;
/// Power per pixel of distance to the target
const AUTOPILOT_POWER_PER_PIXEL: f32 = 0.1;

/// Demo mode: aims at the nearest target and fires on its own
#[derive(Debug, Clone)]
pub struct Autopilot {
    pointer: Vec2,
    pending: Vec<InputEvent>,
    cooldown: u32,
    /// Release when the charge reaches this
    fire_power: Option<f32>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            pending: Vec::new(),
            cooldown: 0,
            fire_power: None,
        }
    }

    /// Target closest to the cannon, if any
    fn pick_target(state: &GameState) -> Option<&crate::sim::Target> {
        let origin = state.cannon.pos;
        state.targets.iter().min_by(|a, b| {
            a.pos()
                .distance_squared(origin)
                .partial_cmp(&b.pos().distance_squared(origin))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

impl InputSource for Autopilot {
    fn prepare(&mut self, state: &GameState) {
        let cannon = &state.cannon;
        let Some(target) = Self::pick_target(state) else {
            // Nothing to shoot: point straight up and let go of the trigger
            self.pointer = cannon.pos - Vec2::new(0.0, state.bounds.y);
            if cannon.active {
                self.pending.push(InputEvent::ButtonUp(MouseButton::Left));
                self.fire_power = None;
            }
            return;
        };

        // Lead drifting targets, then wobble a little so shots vary
        let lead = target.pos() + target.body.velocity() * AUTOPILOT_LEAD_FRAMES;
        let wobble = (state.frame as f32 * 0.3).sin() * target.radius() * 0.5;
        let distance = lead.distance(cannon.pos);
        // Aim above the target to offset the drop
        self.pointer = lead - Vec2::new(-wobble, distance * 0.35);

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return;
        }

        match self.fire_power {
            None => {
                let wanted = (distance * AUTOPILOT_POWER_PER_PIXEL)
                    .clamp(cannon.min_power + 2.0, cannon.max_power);
                self.fire_power = Some(wanted);
                self.pending.push(InputEvent::ButtonDown(MouseButton::Left));
            }
            Some(wanted) if cannon.power >= wanted => {
                self.pending.push(InputEvent::ButtonUp(MouseButton::Left));
                self.fire_power = None;
                self.cooldown = AUTOPILOT_COOLDOWN;
            }
            Some(_) => {}
        }
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn has_focus(&self) -> bool {
        true
    }
}
