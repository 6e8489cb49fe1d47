//! Session driver
//!
//! Owns the start/stop lifecycle: `start` allocates a fresh `GameState`, each
//! tick pulls the newest input sample and advances the game, and game-over
//! drops the state so a restart begins from scratch.

use crate::error::EngineError;
use crate::platform::InputSlot;
use crate::settings::Settings;
use crate::sim::{GameState, Outcome, Tick};

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    input: InputSlot,
    state: Option<GameState>,
    /// Sessions started so far
    started: u32,
}

impl Session {
    pub fn new(settings: Settings, input: InputSlot) -> Self {
        Self {
            settings,
            input,
            state: None,
            started: 0,
        }
    }

    /// The slot input handlers should write into
    pub fn input(&self) -> &InputSlot {
        &self.input
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn sessions_started(&self) -> u32 {
        self.started
    }

    /// Live state of the running session
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Start a new session, discarding any running one
    pub fn start(&mut self) {
        if let Some(old) = self.state.take() {
            log::info!("Restart discards running session (score {})", old.score);
        }
        self.input.clear();
        self.state = Some(GameState::new(self.settings.clone()));
        self.started += 1;
        log::info!("Session {} started", self.started);
    }

    /// Run one tick of the current session. On game-over the session state is
    /// released and later ticks fail with `EngineError::NotRunning` until the
    /// next `start`.
    pub fn on_tick(&mut self, tick: Tick) -> Result<Outcome, EngineError> {
        let state = self.state.as_mut().ok_or(EngineError::NotRunning)?;
        let outcome = state.advance(tick, self.input.latest())?;

        if let Outcome::GameOver { final_score } = outcome {
            log::info!("Session {} ended with score {}", self.started, final_score);
            self.state = None;
        }
        Ok(outcome)
    }

    /// Tear down the running session, returning its score
    pub fn stop(&mut self) -> Option<u64> {
        let state = self.state.take()?;
        log::info!("Session {} stopped with score {}", self.started, state.score);
        Some(state.score)
    }
}
