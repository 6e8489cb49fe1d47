//! Fixed-rate simulation tick
//!
//! One call to `GameState::advance` runs the whole pipeline for a tick:
//! motion, paddle clamp, side walls, floor/ceiling, paddle, bricks, then frame
//! assembly. The stage order matters because each stage may overwrite the
//! position or direction chosen by an earlier one.

use serde::{Deserialize, Serialize};

use super::collision::{WallHit, brick_hits, paddle_bounce, side_wall_hit, vertical_wall_hit};
use super::frame::{Frame, assemble};
use super::geometry::Direction;
use super::state::{GamePhase, GameState, Paddle};
use crate::error::EngineError;
use crate::settings::BottomWall;

/// Monotonic tick timestamp. A repeated value means "no new tick".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tick(pub u64);

/// Latest input observed by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSample {
    /// Pointer x in playfield units
    pub pointer_x: f32,
    /// Quit key pressed
    pub quit: bool,
}

impl InputSample {
    pub fn pointer(pointer_x: f32) -> Self {
        Self {
            pointer_x,
            quit: false,
        }
    }

    pub fn quit() -> Self {
        Self {
            pointer_x: 0.0,
            quit: true,
        }
    }
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The session continues
    Frame(Frame),
    /// The session ended; no further ticks are accepted
    GameOver { final_score: u64 },
}

impl Outcome {
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Outcome::Frame(frame) => Some(frame),
            Outcome::GameOver { .. } => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Outcome::GameOver { .. })
    }
}

impl GameState {
    /// Advance the session by one tick.
    ///
    /// `input` is `None` until the host has seen any input; the pointer then
    /// defaults to x = 0. Calling this after a `GameOver` outcome is rejected
    /// with `EngineError::SessionTerminated` and leaves the state untouched.
    pub fn advance(&mut self, tick: Tick, input: Option<InputSample>) -> Result<Outcome, EngineError> {
        if self.phase == GamePhase::GameOver {
            log::warn!("Tick {} rejected: session already over", tick.0);
            return Err(EngineError::SessionTerminated {
                final_score: self.score,
            });
        }

        let input = input.unwrap_or_default();
        if input.quit {
            log::info!("Quit requested at tick {}", tick.0);
            self.game_over = true;
        }

        // Every bounce table keys off the direction held before this tick
        let prior = self.ball.direction;

        self.integrate(tick);
        self.paddle = Paddle::from_pointer(input.pointer_x, self.settings.playfield_width);

        let mut new_direction = self.resolve_walls(prior);
        if let Some(dir) = self.resolve_paddle(prior) {
            new_direction = Some(dir);
        }
        if let Some(dir) = self.resolve_bricks(prior) {
            new_direction = Some(dir);
        }
        self.ball.direction = new_direction.unwrap_or(prior);

        // The settled position is next tick's rollback target
        self.ball.prev_pos = self.ball.pos;

        if self.game_over {
            self.phase = GamePhase::GameOver;
            log::info!("Game over at tick {} with score {}", tick.0, self.score);
            return Ok(Outcome::GameOver {
                final_score: self.score,
            });
        }

        log::trace!(
            "Tick {}: ball ({:.1}, {:.1}) {:?}, {} bricks left",
            tick.0,
            self.ball.pos.x,
            self.ball.pos.y,
            self.ball.direction,
            self.bricks.len()
        );
        Ok(Outcome::Frame(assemble(self)))
    }

    /// Euler step with a unit timestep. A repeated timestamp holds the ball.
    fn integrate(&mut self, tick: Tick) {
        if self.last_tick == Some(tick) {
            return;
        }
        self.last_tick = Some(tick);
        self.ball.pos = self.ball.integrated();
    }

    /// Side walls, then floor and ceiling. Bounces roll the ball back to where
    /// it ended the previous tick.
    fn resolve_walls(&mut self, prior: Direction) -> Option<Direction> {
        let mut new_direction = None;

        if let Some(hit) = side_wall_hit(&self.ball.rect(), self.settings.playfield_width) {
            self.ball.pos = self.ball.prev_pos;
            new_direction = Some(hit.bounce(prior));
            log::debug!("Ball hit {:?} wall", hit);
        }

        match vertical_wall_hit(&self.ball.rect(), self.settings.playfield_height) {
            Some(WallHit::Floor) if self.settings.bottom_wall == BottomWall::Lethal => {
                log::debug!("Ball fell past the floor");
                self.game_over = true;
            }
            Some(hit) => {
                self.ball.pos = self.ball.prev_pos;
                new_direction = Some(hit.bounce(prior));
                log::debug!("Ball hit {:?} wall", hit);
            }
            None => {}
        }

        new_direction
    }

    fn resolve_paddle(&self, prior: Direction) -> Option<Direction> {
        let dir = paddle_bounce(
            &self.ball.rect(),
            &self.paddle,
            prior,
            self.settings.paddle_policy,
        )?;
        log::debug!("Paddle hit at x {:.1}: {:?} -> {:?}", self.paddle.x, prior, dir);
        Some(dir)
    }

    /// Destroy every brick the ball overlaps. Each hit speeds the ball up and
    /// scores once.
    fn resolve_bricks(&mut self, prior: Direction) -> Option<Direction> {
        let hits = brick_hits(&self.ball.rect(), &self.bricks, &self.layout);
        if hits.is_empty() {
            return None;
        }

        for id in &hits {
            self.ball.speed += self.settings.speed_step;
            self.score += self.multiplier;
            log::debug!(
                "Brick ({}, {}) destroyed, score {}, speed {}",
                id.row,
                id.column,
                self.score,
                self.ball.speed
            );
        }
        self.bricks.retain(|brick| !hits.contains(&brick.id));

        Some(prior.off_ceiling())
    }
}
