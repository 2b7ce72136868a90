//! Host loop
//!
//! Drives `sim::process` at a fixed frame rate, wrapping each frame in
//! `clear`/`present` on the renderer.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::consts::MAX_CATCHUP_FRAMES;
use crate::input::InputSource;
use crate::render::{Color, Renderer};
use crate::sim::{GameState, process};

/// Longest wall-clock gap fed to the clock at once
const MAX_ELAPSED_SECS: f32 = 0.1;

/// Fixed-rate frame pacing
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_secs: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_secs: 1.0 / frame_rate.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Feed elapsed wall time; returns the number of frames now due
    pub fn tick(&mut self, elapsed_secs: f32) -> u32 {
        self.accumulator += elapsed_secs.clamp(0.0, MAX_ELAPSED_SECS);

        let mut due = 0;
        while self.accumulator >= self.frame_secs && due < MAX_CATCHUP_FRAMES {
            self.accumulator -= self.frame_secs;
            due += 1;
        }
        // Drop whatever could not be caught up
        if due == MAX_CATCHUP_FRAMES {
            self.accumulator = self.accumulator.min(self.frame_secs);
        }
        due
    }

    /// Wall time until the next frame is due
    pub fn time_until_next(&self) -> Duration {
        Duration::from_secs_f32((self.frame_secs - self.accumulator).max(0.0))
    }
}

/// How a session is run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many frames
    pub max_frames: Option<u64>,
    /// Pace frames in real time instead of running them back to back
    pub realtime: bool,
    /// Frame rate used when `realtime` is set
    pub frame_rate: u32,
}

/// What happened during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub frames: u64,
    pub waves: u32,
    pub targets_destroyed: u32,
    pub shells_used: u32,
    pub score: i64,
    /// Ended by a quit event (as opposed to the frame limit)
    pub quit: bool,
}

impl SessionSummary {
    pub fn from_state(state: &GameState, quit: bool) -> Self {
        Self {
            seed: state.seed,
            frames: state.frame,
            waves: state.wave,
            targets_destroyed: state.score.targets_destroyed,
            shells_used: state.score.shells_used,
            score: state.score.score(),
            quit,
        }
    }
}

/// Run a single frame wrapped in clear/present. Returns the quit flag.
pub fn run_frame<I, R>(state: &mut GameState, input: &mut I, renderer: &mut R) -> bool
where
    I: InputSource + ?Sized,
    R: Renderer,
{
    renderer.clear(Color::BLACK);
    let quit = process(state, input, renderer);
    renderer.present();
    quit
}

/// Run frames until quit or the frame limit
pub fn run_session<I, R>(
    state: &mut GameState,
    input: &mut I,
    renderer: &mut R,
    options: &RunOptions,
) -> SessionSummary
where
    I: InputSource + ?Sized,
    R: Renderer,
{
    log::info!(
        "Session starting (seed {}, {} frames max, realtime {})",
        state.seed,
        options
            .max_frames
            .map_or_else(|| "no".to_string(), |n| n.to_string()),
        options.realtime
    );

    let limit_reached = |state: &GameState| options.max_frames.is_some_and(|max| state.frame >= max);

    let mut clock = FrameClock::new(options.frame_rate);
    let mut last = Instant::now();
    let mut quit = false;

    while !quit && !limit_reached(&*state) {
        let due = if options.realtime {
            let now = Instant::now();
            let due = clock.tick((now - last).as_secs_f32());
            last = now;
            if due == 0 {
                std::thread::sleep(clock.time_until_next());
                continue;
            }
            due
        } else {
            1
        };

        for _ in 0..due {
            if run_frame(state, input, renderer) {
                quit = true;
                break;
            }
            if limit_reached(&*state) {
                break;
            }
        }
    }

    let summary = SessionSummary::from_state(state, quit);
    log::info!(
        "Session over after {} frames: wave {}, destroyed {}, shells {}, score {}",
        summary.frames,
        summary.waves,
        summary.targets_destroyed,
        summary.shells_used,
        summary.score
    );
    summary
}
