//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per tick, unit timestep
//! - Stable brick order (row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod state;
pub mod tick;

#[cfg(test)]
mod properties;

pub use collision::{WallHit, brick_hits, paddle_bounce, side_wall_hit, vertical_wall_hit};
pub use frame::{Frame, Sprite, SpriteColor, assemble};
pub use geometry::{Direction, Rect};
pub use layout::BrickLayout;
pub use state::{Ball, Brick, BrickColor, BrickId, GamePhase, GameState, Paddle, starting_bricks};
pub use tick::{InputSample, Outcome, Tick};
