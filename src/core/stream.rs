//! Spawn / advance / retire lifecycle of the live obstacles, and the score.

use super::geometry::Rect;
use super::obstacle::Obstacle;
use crate::config::GameConfig;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct ObstacleStream {
    config: GameConfig,
    /// Creation order, oldest first: `x` increases along the vec and the
    /// newest obstacle sits last, furthest right.
    obstacles: Vec<Obstacle>,
    score: u32,
}

impl ObstacleStream {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            obstacles: Vec::new(),
            score: 0,
        }
    }

    /// Stream seeded with already-placed obstacles, oldest first.
    pub fn with_obstacles(config: GameConfig, obstacles: Vec<Obstacle>) -> Self {
        Self {
            config,
            obstacles,
            score: 0,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Obstacles fully passed so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Whether a new obstacle is due. Judged by the newest obstacle's
    /// position so spacing stays even whatever the frame timing.
    pub fn should_spawn(&self) -> bool {
        match self.obstacles.last() {
            None => true,
            Some(newest) => newest.x < self.config.spawn_threshold(),
        }
    }

    /// Append a new obstacle if one is due. Returns true when it spawned.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.should_spawn() {
            return false;
        }
        let obstacle = Obstacle::new(&self.config, rng);
        log::debug!(
            "spawned obstacle #{} with gap at {:.1}",
            self.obstacles.len() + 1,
            obstacle.gap_top
        );
        self.obstacles.push(obstacle);
        true
    }

    /// Advance every obstacle, retiring the ones now off-screen.
    /// Each retirement scores exactly one point. Returns how many retired.
    pub fn tick(&mut self) -> u32 {
        let mut retired = 0;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.advance();
            if obstacle.is_offscreen() {
                retired += 1;
                false
            } else {
                true
            }
        });
        if retired > 0 {
            self.score += retired;
            log::debug!("retired {} obstacle(s), score {}", retired, self.score);
        }
        retired
    }

    pub fn any_collides_with(&self, avatar: &Rect) -> bool {
        self.obstacles.iter().any(|o| o.collides_with(avatar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_new_stream_is_empty() {
        let stream = ObstacleStream::new(GameConfig::default());
        assert!(stream.is_empty());
        assert_eq!(stream.score(), 0);
        assert!(stream.should_spawn());
    }

    #[test]
    fn test_spawns_into_empty_stream() {
        let mut stream = ObstacleStream::new(GameConfig::default());
        assert!(stream.maybe_spawn(&mut create_test_rng()));
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.obstacles()[0].x, 800.0);
    }

    #[test]
    fn test_second_spawn_waits_for_spacing() {
        let mut stream = ObstacleStream::new(GameConfig::default());
        let mut rng = create_test_rng();
        stream.maybe_spawn(&mut rng);

        // 80 ticks brings the first obstacle to exactly 400: not yet below
        for _ in 0..80 {
            stream.tick();
            assert!(!stream.maybe_spawn(&mut rng));
        }
        assert_eq!(stream.obstacles()[0].x, 400.0);
        assert_eq!(stream.len(), 1);

        stream.tick();
        assert_eq!(stream.obstacles()[0].x, 395.0);
        assert!(stream.maybe_spawn(&mut rng));
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.obstacles()[1].x, 800.0);
    }

    #[test]
    fn test_tick_advances_in_creation_order() {
        let config = GameConfig::default();
        let mut stream = ObstacleStream::new(config);
        stream.obstacles.push(Obstacle::with_gap_top(&config, 200.0));
        stream.obstacles.push(Obstacle::with_gap_top(&config, 400.0));
        stream.obstacles[0].x = 300.0;

        stream.tick();
        assert_eq!(stream.obstacles()[0].x, 295.0);
        assert_eq!(stream.obstacles()[1].x, 795.0);
        assert_eq!(stream.obstacles()[0].gap_top, 200.0);
    }

    #[test]
    fn test_retirement_scores_once() {
        let config = GameConfig::default();
        let mut stream = ObstacleStream::new(config);
        let mut obstacle = Obstacle::with_gap_top(&config, 300.0);
        obstacle.x = -76.0;
        stream.obstacles.push(obstacle);

        // -81 + 80 = -1 < 0
        assert_eq!(stream.tick(), 1);
        assert_eq!(stream.score(), 1);
        assert!(stream.is_empty());

        assert_eq!(stream.tick(), 0);
        assert_eq!(stream.score(), 1);
    }

    #[test]
    fn test_no_score_while_partly_visible() {
        let config = GameConfig::default();
        let mut stream = ObstacleStream::new(config);
        let mut obstacle = Obstacle::with_gap_top(&config, 300.0);
        obstacle.x = -70.0;
        stream.obstacles.push(obstacle);

        // -75, then -80: trailing edge at 0, not yet past
        assert_eq!(stream.tick(), 0);
        assert_eq!(stream.tick(), 0);
        assert_eq!(stream.score(), 0);
        assert_eq!(stream.len(), 1);

        assert_eq!(stream.tick(), 1);
        assert_eq!(stream.score(), 1);
    }

    #[test]
    fn test_score_counts_every_pass() {
        let mut stream = ObstacleStream::new(GameConfig::default());
        let mut rng = create_test_rng();
        let mut previous = 0;
        for _ in 0..2_000 {
            stream.maybe_spawn(&mut rng);
            let retired = stream.tick();
            assert!(retired <= 1);
            assert_eq!(stream.score(), previous + retired);
            previous = stream.score();
        }
        // First obstacle needs 177 ticks to leave; one more every 81 after
        assert_eq!(stream.score(), 1 + (2_000 - 177) / 81);
    }

    #[test]
    fn test_live_count_stays_bounded() {
        let mut stream = ObstacleStream::new(GameConfig::default());
        let mut rng = create_test_rng();
        for _ in 0..5_000 {
            stream.maybe_spawn(&mut rng);
            stream.tick();
            assert!(stream.len() <= 3);
        }
    }

    #[test]
    fn test_any_collides_with() {
        let config = GameConfig::default();
        let mut stream = ObstacleStream::new(config);
        let avatar = Rect::new(50.0, 100.0, 51.0, 54.0);
        assert!(!stream.any_collides_with(&avatar));

        let mut far = Obstacle::with_gap_top(&config, 300.0);
        far.x = 600.0;
        stream.obstacles.push(far);
        assert!(!stream.any_collides_with(&avatar));

        let mut near = Obstacle::with_gap_top(&config, 300.0);
        near.x = 60.0;
        stream.obstacles.push(near);
        assert!(stream.any_collides_with(&avatar));
    }
}
