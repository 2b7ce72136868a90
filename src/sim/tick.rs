//! Per-frame simulation step
//!
//! `process` is the single entry point the host calls once per frame:
//! input, aim, motion, collisions, drawing, then a fresh wave if the board
//! is clear.

use std::collections::HashSet;

use rand::Rng;

use super::state::GameState;
use super::target::{Target, TargetKind};
use crate::consts::*;
use crate::input::{InputEvent, InputSource, Key, MouseButton};
use crate::render::{Drawable, Renderer};

/// Target radius range for the current score.
///
/// Targets shrink as the score climbs, never below 1. The upper bound is
/// floored to the lower one so the range stays valid past score 30.
pub fn target_radius_range(score: i64) -> (u32, u32) {
    let s = score.max(0);
    let lo = (TARGET_BASE_RADIUS - 2 * s).max(1);
    let hi = (TARGET_BASE_RADIUS - s).max(lo);
    (lo as u32, hi as u32)
}

/// Spawn a wave: `n_targets` static targets, then as many moving ones
pub fn new_mission(state: &mut GameState) {
    let (lo, hi) = target_radius_range(state.score.score());
    let bounds = state.bounds;

    for kind in [TargetKind::Static, TargetKind::Moving] {
        for _ in 0..state.n_targets {
            let id = state.next_entity_id();
            let radius = state.rng.random_range(lo..=hi);
            let target = Target::random(&mut state.rng, id, kind, radius, bounds);
            state.targets.push(target);
        }
    }

    state.wave += 1;
    log::info!(
        "Wave {}: {} targets, radius {}..={} (score {})",
        state.wave,
        state.targets.len(),
        lo,
        hi,
        state.score.score()
    );
}

/// Apply this frame's events. Returns true if a quit was requested.
///
/// Events the game has no binding for are ignored.
pub fn handle_events(state: &mut GameState, events: &[InputEvent]) -> bool {
    let mut quit = false;
    for event in events {
        match *event {
            InputEvent::Quit => quit = true,
            InputEvent::KeyDown(Key::Left) => state.cannon.shift(-CANNON_KEY_STEP, state.bounds.x),
            InputEvent::KeyDown(Key::Right) => state.cannon.shift(CANNON_KEY_STEP, state.bounds.x),
            InputEvent::ButtonDown(MouseButton::Left) => state.cannon.activate(),
            InputEvent::ButtonUp(MouseButton::Left) => {
                let shell = state.cannon.strike(&mut state.rng);
                state.shells.push(shell);
                state.score.record_shot();
            }
            _ => {}
        }
    }
    quit
}

/// Move everything one frame and charge the cannon
pub fn advance(state: &mut GameState) {
    let bounds = state.bounds;

    for shell in &mut state.shells {
        shell.advance(TIME_STEP, GRAVITY, bounds);
    }
    state.shells.retain(|s| s.alive);

    for target in &mut state.targets {
        target.advance(bounds);
    }

    state.cannon.gain(CANNON_GAIN);
}

/// Remove every target touched by a shell. Returns how many were removed.
///
/// A target hit by several shells counts once. One shell may take out
/// several overlapping targets. Shells fly on after a hit.
pub fn collide(state: &mut GameState) -> usize {
    let hit: HashSet<u32> = state
        .targets
        .iter()
        .filter(|target| state.shells.iter().any(|shell| target.check_collision(shell)))
        .map(|target| target.id)
        .collect();

    if hit.is_empty() {
        return 0;
    }

    let before = state.targets.len();
    state.targets.retain(|t| !hit.contains(&t.id));
    let removed = before - state.targets.len();

    state.score.record_destroyed(removed as u32);
    log::debug!(
        "Destroyed {} target(s), {} left (score {})",
        removed,
        state.targets.len(),
        state.score.score()
    );
    removed
}

/// Draw shells, targets, cannon and score table, in that order
pub fn draw(state: &GameState, renderer: &mut dyn Renderer) {
    for shell in &state.shells {
        shell.draw(renderer);
    }
    for target in &state.targets {
        target.draw(renderer);
    }
    state.cannon.draw(renderer);
    state.score.draw(renderer);
}

/// Run one full frame. Returns true if the player asked to quit.
pub fn process<I>(state: &mut GameState, input: &mut I, renderer: &mut dyn Renderer) -> bool
where
    I: InputSource + ?Sized,
{
    input.prepare(state);
    let quit = handle_events(state, &input.poll_events());

    if input.has_focus() {
        state.cannon.set_angle(input.pointer_position());
    }

    advance(state);
    collide(state);
    draw(state, renderer);

    if state.wave_cleared() {
        new_mission(state);
    }

    state.frame += 1;
    quit
}
