//! Frame assembly
//!
//! A frame is built fresh each tick: ball, paddle, then one sprite per
//! remaining brick. The presentation layer turns sprites into drawn rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{BrickColor, GameState};

/// Fill color of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteColor {
    White,
    Red,
    Green,
    Blue,
}

impl SpriteColor {
    /// Linear RGBA
    pub fn rgba(self) -> [f32; 4] {
        match self {
            SpriteColor::White => [1.0, 1.0, 1.0, 1.0],
            SpriteColor::Red => [1.0, 0.0, 0.0, 1.0],
            SpriteColor::Green => [0.0, 1.0, 0.0, 1.0],
            SpriteColor::Blue => [0.0, 0.0, 1.0, 1.0],
        }
    }
}

impl From<BrickColor> for SpriteColor {
    fn from(color: BrickColor) -> Self {
        match color {
            BrickColor::Red => SpriteColor::Red,
            BrickColor::Green => SpriteColor::Green,
            BrickColor::Blue => SpriteColor::Blue,
        }
    }
}

/// A colored rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Lower-left corner
    pub position: Vec2,
    pub size: Vec2,
    pub color: SpriteColor,
}

impl Sprite {
    pub fn new(rect: Rect, color: SpriteColor) -> Self {
        Self {
            position: rect.origin,
            size: rect.size,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// One tick's drawable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Ball, paddle, then bricks
    pub sprites: Vec<Sprite>,
    pub score: u64,
}

impl Frame {
    pub fn ball(&self) -> Option<&Sprite> {
        self.sprites.first()
    }

    pub fn paddle(&self) -> Option<&Sprite> {
        self.sprites.get(1)
    }

    pub fn bricks(&self) -> &[Sprite] {
        self.sprites.get(2..).unwrap_or(&[])
    }
}

/// Build the frame for the current state
pub fn assemble(state: &GameState) -> Frame {
    let mut sprites = Vec::with_capacity(2 + state.bricks.len());
    sprites.push(Sprite::new(state.ball.rect(), SpriteColor::White));
    sprites.push(Sprite::new(state.paddle.rect(), SpriteColor::White));
    sprites.extend(state.bricks.iter().filter_map(|brick| {
        state
            .brick_rect(brick.id)
            .map(|rect| Sprite::new(rect, brick.color.into()))
    }));

    Frame {
        sprites,
        score: state.score,
    }
}
