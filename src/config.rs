//! Game tuning gathered into one value.
//!
//! There is no config file or CLI surface: `GameConfig::default()` is built
//! from the constants and is what the binary plays with. Tests build their
//! own values to pin down geometry.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// All tunables for a single run, in world units per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub avatar_x: f64,
    pub avatar_width: f64,
    pub avatar_height: f64,
    /// Added to the avatar's velocity every frame (positive = downward).
    pub gravity: f64,
    /// Velocity the avatar is set to on a jump (negative = upward).
    pub jump_velocity: f64,

    pub pipe_width: f64,
    /// Vertical size of the passable gap.
    pub pipe_gap: f64,
    /// Leftward distance travelled by every obstacle per frame.
    pub pipe_velocity: f64,
    /// Minimum distance between the gap and the top/bottom screen edge.
    pub pipe_margin: f64,
    /// Horizontal distance the newest obstacle must travel before the next spawns.
    pub spawn_spacing: f64,

    pub target_fps: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_velocity: PIPE_VELOCITY,
            pipe_margin: PIPE_MARGIN,
            spawn_spacing: SPAWN_SPACING,
            target_fps: TARGET_FPS,
        }
    }
}

impl GameConfig {
    /// Smallest allowed `gap_top` for a new obstacle.
    pub fn min_gap_top(&self) -> f64 {
        self.pipe_margin
    }

    /// Largest allowed `gap_top` for a new obstacle.
    pub fn max_gap_top(&self) -> f64 {
        self.screen_height - self.pipe_gap - self.pipe_margin
    }

    /// The newest obstacle must be left of this `x` before another spawns.
    pub fn spawn_threshold(&self) -> f64 {
        self.screen_width - self.spawn_spacing
    }

    /// Starting avatar height: the vertical middle of the screen.
    pub fn avatar_start_y(&self) -> f64 {
        self.screen_height / 2.0
    }

    /// Check that the configuration leaves a playable world.
    ///
    /// Obstacle construction relies on this having passed: an empty gap
    /// range is rejected here rather than during play.
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            self.screen_width,
            self.screen_height,
            self.avatar_x,
            self.avatar_width,
            self.avatar_height,
            self.gravity,
            self.jump_velocity,
            self.pipe_width,
            self.pipe_gap,
            self.pipe_velocity,
            self.pipe_margin,
            self.spawn_spacing,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("All dimensions and speeds must be finite numbers".to_string());
        }

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err("Screen dimensions must be positive".to_string());
        }

        if self.avatar_width <= 0.0 || self.avatar_height <= 0.0 {
            return Err("Avatar dimensions must be positive".to_string());
        }

        if self.avatar_x < 0.0 || self.avatar_x + self.avatar_width > self.screen_width {
            return Err("Avatar must fit horizontally on screen".to_string());
        }

        if self.avatar_start_y() + self.avatar_height > self.screen_height {
            return Err("Avatar must fit vertically at its starting height".to_string());
        }

        if self.pipe_width < 0.0 || self.pipe_gap <= 0.0 || self.pipe_margin < 0.0 {
            return Err("Pipe width and margin must be non-negative, gap positive".to_string());
        }

        if self.pipe_velocity <= 0.0 {
            return Err("Pipe velocity must be positive or pipes never retire".to_string());
        }

        if self.max_gap_top() < self.min_gap_top() {
            return Err(format!(
                "Gap of {} with margin {} does not fit a screen {} high",
                self.pipe_gap, self.pipe_margin, self.screen_height
            ));
        }

        if self.spawn_spacing <= 0.0 {
            return Err("Spawn spacing must be positive".to_string());
        }

        if self.target_fps == 0 {
            return Err("Target frame rate must be at least 1".to_string());
        }

        Ok(())
    }
}
