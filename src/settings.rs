//! Engine settings
//!
//! Selects between the scored game and the classic variant, and carries the
//! playfield and ball tuning. Loaded from JSON; missing fields use defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// How a paddle hit redirects the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaddlePolicy {
    /// Flip toward an upward diagonal based on the incoming direction
    Simple,
    /// Left half sends the ball north-west, right half north-east
    #[default]
    Split,
}

impl PaddlePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddlePolicy::Simple => "Simple",
            PaddlePolicy::Split => "Split",
        }
    }
}

/// What happens when the ball passes the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BottomWall {
    /// Ends the session
    #[default]
    Lethal,
    /// Bounces like the top wall
    Bounce,
}

impl BottomWall {
    pub fn as_str(&self) -> &'static str {
        match self {
            BottomWall::Lethal => "Lethal",
            BottomWall::Bounce => "Bounce",
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in units
    pub playfield_width: f32,
    /// Playfield height in units
    pub playfield_height: f32,

    // === Ball ===
    /// Launch speed (units per tick)
    pub ball_speed: f32,
    /// Speed added per destroyed brick
    pub speed_step: f32,

    // === Rules ===
    pub paddle_policy: PaddlePolicy,
    pub bottom_wall: BottomWall,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            ball_speed: BALL_START_SPEED,
            speed_step: BALL_SPEED_STEP,

            paddle_policy: PaddlePolicy::Split,
            bottom_wall: BottomWall::Lethal,
        }
    }
}

impl Settings {
    /// The unscored variant: slow ball, simple paddle, bouncing floor
    pub fn classic() -> Self {
        Self {
            ball_speed: BALL_CLASSIC_SPEED,
            paddle_policy: PaddlePolicy::Simple,
            bottom_wall: BottomWall::Bounce,
            ..Self::default()
        }
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} paddle, {} floor)",
            path.display(),
            settings.paddle_policy.as_str(),
            settings.bottom_wall.as_str()
        );
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.ball_speed.is_finite() || self.ball_speed <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "ball_speed",
                reason: format!("must be positive, got {}", self.ball_speed),
            });
        }
        if !self.speed_step.is_finite() || self.speed_step < 0.0 {
            return Err(SettingsError::Invalid {
                field: "speed_step",
                reason: format!("must not be negative, got {}", self.speed_step),
            });
        }
        let grid_width = BRICK_COLUMNS as f32 * BRICK_WIDTH;
        if !self.playfield_width.is_finite() || self.playfield_width < PADDLE_WIDTH.max(grid_width) {
            return Err(SettingsError::Invalid {
                field: "playfield_width",
                reason: format!(
                    "must fit the paddle and a {grid_width}-wide brick row, got {}",
                    self.playfield_width
                ),
            });
        }
        let grid_height = (BRICK_ROWS + 2) as f32 * BRICK_HEIGHT;
        if !self.playfield_height.is_finite()
            || self.playfield_height < grid_height + PADDLE_HEIGHT + BALL_SIZE
        {
            return Err(SettingsError::Invalid {
                field: "playfield_height",
                reason: format!("too short for the brick grid, got {}", self.playfield_height),
            });
        }
        Ok(())
    }
}
