//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Drawing only through the `Renderer` trait

pub mod body;
pub mod cannon;
pub mod collision;
pub mod score;
pub mod shell;
pub mod state;
pub mod target;
pub mod tick;

pub use body::Body;
pub use cannon::Cannon;
pub use collision::{bodies_touch, circle_circle};
pub use score::ScoreTable;
pub use shell::Shell;
pub use state::GameState;
pub use target::{Target, TargetKind};
pub use tick::{advance, collide, draw, handle_events, new_mission, process, target_radius_range};
