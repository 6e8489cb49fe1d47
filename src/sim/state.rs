//! Game state and core simulation types
//!
//! One `GameState` is one session: created with every brick present and the
//! ball centered, mutated once per tick, dropped after game-over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Rect};
use super::layout::BrickLayout;
use super::tick::Tick;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being processed
    Playing,
    /// Game-over was reported; no further ticks are accepted
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Lower-left corner
    pub pos: Vec2,
    /// Position at the end of the previous tick (rollback target)
    pub prev_pos: Vec2,
    pub direction: Direction,
    /// Units per tick; only ever increases
    pub speed: f32,
    pub size: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            prev_pos: pos,
            direction: Direction::SouthWest,
            speed,
            size: Vec2::splat(BALL_SIZE),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Where the ball would be after one tick of travel
    pub fn integrated(&self) -> Vec2 {
        self.pos + self.direction.vector() * self.speed
    }
}

/// The paddle. Rebuilt from input every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, clamped into the playfield
    pub x: f32,
    pub size: Vec2,
}

impl Paddle {
    /// Center the paddle on `pointer_x`, then clamp it into `[0, width - paddle]`
    pub fn from_pointer(pointer_x: f32, playfield_width: f32) -> Self {
        let max_x = (playfield_width - PADDLE_WIDTH).max(0.0);
        let candidate = pointer_x - PADDLE_WIDTH / 2.0;
        // NaN input lands on the left wall
        let x = if candidate.is_nan() {
            0.0
        } else {
            candidate.clamp(0.0, max_x)
        };
        Self {
            x,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Vec2::new(self.x, 0.0), self.size)
    }
}

/// Brick colors, cycled per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Green,
    Blue,
}

impl BrickColor {
    const CYCLE: [BrickColor; 3] = [BrickColor::Red, BrickColor::Green, BrickColor::Blue];

    /// Color of the brick at (row, column). Each row starts one step further
    /// back in the cycle: row 0 is red-green-blue, row 1 blue-red-green.
    pub fn for_cell(row: u32, column: u32) -> Self {
        let len = Self::CYCLE.len() as u32;
        let index = (column + (len - row % len)) % len;
        Self::CYCLE[index as usize]
    }
}

/// Stable brick identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BrickId {
    pub row: u32,
    pub column: u32,
}

/// A brick. Its rectangle comes from `BrickLayout`, not from the brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub color: BrickColor,
}

impl Brick {
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            id: BrickId { row, column },
            color: BrickColor::for_cell(row, column),
        }
    }
}

/// The full starting grid, row-major
pub fn starting_bricks() -> Vec<Brick> {
    (0..BRICK_ROWS)
        .flat_map(|row| (0..BRICK_COLUMNS).map(move |column| Brick::new(row, column)))
        .collect()
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    /// Score
    pub score: u64,
    /// Points per brick
    pub multiplier: u64,
    pub phase: GamePhase,
    /// Set by a quit request or a floor breach during the current tick
    pub game_over: bool,
    /// Timestamp of the last tick that moved the ball
    pub last_tick: Option<Tick>,
    pub ball: Ball,
    /// Most recent paddle (derived from input each tick)
    pub paddle: Paddle,
    /// Remaining bricks (row-major; only ever shrinks)
    pub bricks: Vec<Brick>,
    /// Brick rectangles, fixed for the whole session
    pub layout: BrickLayout,
}

impl GameState {
    /// Create a fresh session
    pub fn new(settings: Settings) -> Self {
        let center = Vec2::new(settings.playfield_width, settings.playfield_height) / 2.0;
        let bricks = starting_bricks();
        let layout = BrickLayout::new(&bricks, settings.playfield_width, settings.playfield_height);
        let paddle = Paddle::from_pointer(0.0, settings.playfield_width);

        Self {
            ball: Ball::new(center, settings.ball_speed),
            settings,
            score: 0,
            multiplier: SCORE_MULTIPLIER,
            phase: GamePhase::Playing,
            game_over: false,
            last_tick: None,
            paddle,
            bricks,
            layout,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Rectangle of a remaining or former brick
    pub fn brick_rect(&self, id: BrickId) -> Option<Rect> {
        self.layout.rect(id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
