//! A top/bottom pipe pair with a passable gap.

use super::geometry::Rect;
use crate::config::GameConfig;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge. Decreases every frame.
    pub x: f64,
    /// Height of the top pipe, i.e. where the gap starts. Fixed at creation.
    pub gap_top: f64,
    pub width: f64,
    pub gap_height: f64,
    screen_height: f64,
    velocity: f64,
}

impl Obstacle {
    /// New obstacle at the right edge of the screen with a random gap.
    ///
    /// `config` must have passed [`GameConfig::validate`]; otherwise the gap
    /// range may be empty.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let min = config.min_gap_top();
        let max = config.max_gap_top().max(min);
        let gap_top = rng.gen_range(min..=max);
        Self::with_gap_top(config, gap_top)
    }

    /// New obstacle at the right edge with a chosen gap.
    pub fn with_gap_top(config: &GameConfig, gap_top: f64) -> Self {
        Self {
            x: config.screen_width,
            gap_top,
            width: config.pipe_width,
            gap_height: config.pipe_gap,
            screen_height: config.screen_height,
            velocity: config.pipe_velocity,
        }
    }

    pub fn advance(&mut self) {
        self.x -= self.velocity;
    }

    /// Trailing edge has passed the left boundary.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap_height
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    pub fn bottom_rect(&self) -> Rect {
        let bottom = self.gap_bottom();
        Rect::new(self.x, bottom, self.width, self.screen_height - bottom)
    }

    pub fn collides_with(&self, avatar: &Rect) -> bool {
        self.top_rect().intersects(avatar) || self.bottom_rect().intersects(avatar)
    }
}
