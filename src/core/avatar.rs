//! The player-controlled falling entity.

use super::geometry::Rect;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    /// Fixed for the whole run.
    pub x: f64,
    /// Top edge; row 0 is the ceiling.
    pub y: f64,
    /// Vertical velocity in units/frame (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    gravity: f64,
    jump_velocity: f64,
}

impl Avatar {
    /// Avatar at rest in the vertical middle of the screen.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.avatar_x,
            y: config.avatar_start_y(),
            velocity: 0.0,
            width: config.avatar_width,
            height: config.avatar_height,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
        }
    }

    /// One frame of gravity. Bounds are the game loop's business.
    pub fn advance(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
    }

    /// Override velocity with the jump velocity. Repeated jumps don't stack.
    pub fn impulse(&mut self) {
        self.velocity = self.jump_velocity;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Above the ceiling or with the bottom edge below the floor.
    pub fn is_out_of_bounds(&self, screen_height: f64) -> bool {
        self.y < 0.0 || self.y + self.height > screen_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar() -> Avatar {
        Avatar::new(&GameConfig::default())
    }

    #[test]
    fn test_starts_at_rest_mid_screen() {
        let a = avatar();
        assert_eq!(a.x, 50.0);
        assert_eq!(a.y, 600.0);
        assert_eq!(a.velocity, 0.0);
    }

    #[test]
    fn test_first_advance_from_rest() {
        let mut a = avatar();
        a.advance();
        assert_eq!(a.velocity, 0.5);
        assert_eq!(a.y, 600.5);
    }

    #[test]
    fn test_advance_adds_gravity_exactly() {
        let mut a = avatar();
        for _ in 0..50 {
            let before = a.velocity;
            a.advance();
            assert_eq!(a.velocity, before + 0.5);
        }
    }

    #[test]
    fn test_advance_never_clamps() {
        let mut a = avatar();
        a.y = -100.0;
        a.velocity = -3.0;
        a.advance();
        assert_eq!(a.y, -102.5);
    }

    #[test]
    fn test_impulse_replaces_velocity() {
        let mut a = avatar();
        a.velocity = 3.0;
        a.impulse();
        assert_eq!(a.velocity, -10.0);
    }

    #[test]
    fn test_repeated_impulses_do_not_stack() {
        let mut a = avatar();
        a.impulse();
        a.impulse();
        a.impulse();
        assert_eq!(a.velocity, -10.0);
    }

    #[test]
    fn test_x_fixed_through_physics() {
        let mut a = avatar();
        for i in 0..30 {
            if i % 7 == 0 {
                a.impulse();
            }
            a.advance();
        }
        assert_eq!(a.x, 50.0);
    }

    #[test]
    fn test_rect_tracks_position() {
        let mut a = avatar();
        a.y = 123.0;
        assert_eq!(a.rect(), Rect::new(50.0, 123.0, 51.0, 54.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut a = avatar();
        assert!(!a.is_out_of_bounds(1200.0));

        a.y = -0.1;
        assert!(a.is_out_of_bounds(1200.0));

        a.y = 0.0;
        assert!(!a.is_out_of_bounds(1200.0));

        // Bottom edge exactly on the floor is still in bounds
        a.y = 1200.0 - 54.0;
        assert!(!a.is_out_of_bounds(1200.0));

        a.y = 1200.0 - 53.0;
        assert!(a.is_out_of_bounds(1200.0));
    }
}
