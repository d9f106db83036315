//! One run of the game: the pure per-frame update.
//!
//! Input, physics, spawning, scoring and collision live here. Rendering and
//! frame pacing stay in the binary so this can be driven frame by frame in
//! tests.

use super::avatar::Avatar;
use super::stream::ObstacleStream;
use crate::config::GameConfig;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up, Enter or `k`.
    Jump,
    /// Esc, `q` or Ctrl-C.
    Quit,
    /// Any other key.
    Other,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverReason {
    /// The player asked to leave.
    Quit,
    /// Avatar flew above the ceiling or fell through the floor.
    OutOfBounds,
    /// Avatar hit a pipe.
    Collision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal. Nothing moves once a game is over.
    Over(OverReason),
}

/// What happened during one `step`, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub jumped: bool,
    pub spawned: bool,
    pub retired: u32,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    pub avatar: Avatar,
    pub stream: ObstacleStream,
    status: GameStatus,
    frame: u64,
}

impl Game {
    /// Fresh run. `config` should already have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            avatar: Avatar::new(&config),
            stream: ObstacleStream::new(config),
            status: GameStatus::Running,
            frame: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    pub fn score(&self) -> u32 {
        self.stream.score()
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulate one frame given the inputs drained since the last one.
    ///
    /// Order: inputs, avatar physics, spawn, obstacle advance and scoring,
    /// bounds check, collision check. A quit skips the physics entirely.
    pub fn step<R: Rng>(&mut self, inputs: &[GameInput], rng: &mut R) -> StepOutcome {
        let mut outcome = StepOutcome {
            jumped: false,
            spawned: false,
            retired: 0,
            status: self.status,
        };
        if self.is_over() {
            return outcome;
        }

        for input in inputs {
            match input {
                GameInput::Quit => {
                    self.finish(OverReason::Quit);
                    outcome.status = self.status;
                    return outcome;
                }
                GameInput::Jump => {
                    self.avatar.impulse();
                    outcome.jumped = true;
                }
                GameInput::Other => {}
            }
        }

        self.frame += 1;
        self.avatar.advance();
        outcome.spawned = self.stream.maybe_spawn(rng);
        outcome.retired = self.stream.tick();

        if self.avatar.is_out_of_bounds(self.config.screen_height) {
            self.finish(OverReason::OutOfBounds);
        } else if self.stream.any_collides_with(&self.avatar.rect()) {
            self.finish(OverReason::Collision);
        }

        outcome.status = self.status;
        outcome
    }

    fn finish(&mut self, reason: OverReason) {
        self.status = GameStatus::Over(reason);
        log::info!(
            "game over after {} frames: {:?}, score {}",
            self.frame,
            reason,
            self.score()
        );
    }
}
