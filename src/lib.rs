//! Brickfall - A single-screen ball and paddle arcade game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (motion, collisions, bricks, scoring)
//! - `platform`: Latest-input slot and fixed-rate tick clock
//! - `session`: Start/stop driver feeding ticks into the simulation
//! - `settings`: Engine configuration variants

pub mod error;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{EngineError, SettingsError};
pub use session::Session;
pub use settings::{BottomWall, PaddlePolicy, Settings};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (Hz)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per clock update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Scored-game launch speed (units per tick)
    pub const BALL_START_SPEED: f32 = 3.0;
    /// Classic (unscored) launch speed
    pub const BALL_CLASSIC_SPEED: f32 = 1.0;
    /// Speed gained per destroyed brick
    pub const BALL_SPEED_STEP: f32 = 1.0;

    /// Paddle defaults - sits on the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_COLUMNS: u32 = 6;

    /// Points per brick (no combo mechanics yet)
    pub const SCORE_MULTIPLIER: u64 = 1;
}
