//! Spawn scheduling and difficulty scaling
//!
//! Each entity kind has an independent frame timer. When the timer reaches
//! the current delay, one entity spawns and the delay is recomputed from the
//! score: higher scores shrink the gap between spawns, down to a per-kind
//! floor.

use crate::consts::*;

/// Which difficulty curve a scheduler follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Curve {
    Balls,
    Bombs,
}

/// Frame timer/delay pair for one entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnScheduler {
    pub timer: u32,
    pub delay: u32,
    curve: Curve,
}

impl SpawnScheduler {
    /// Scheduler for balls, starting at the base delay
    pub fn balls() -> Self {
        Self {
            timer: 0,
            delay: BALL_SPAWN_DELAY_START,
            curve: Curve::Balls,
        }
    }

    /// Scheduler for bombs, starting at the base delay
    pub fn bombs() -> Self {
        Self {
            timer: 0,
            delay: BOMB_SPAWN_DELAY_START,
            curve: Curve::Bombs,
        }
    }

    /// Advance one frame. Returns true when a spawn fires; on fire the
    /// timer resets and the delay is recomputed from the current score.
    pub fn advance(&mut self, score: u32) -> bool {
        self.timer += 1;
        if self.timer >= self.delay {
            self.timer = 0;
            self.delay = self.delay_for(score);
            return true;
        }
        false
    }

    /// Difficulty curve: monotone non-increasing in score, floored.
    pub fn delay_for(&self, score: u32) -> u32 {
        match self.curve {
            Curve::Balls => BALL_SPAWN_DELAY_START
                .saturating_sub((score / 5).saturating_mul(5))
                .max(BALL_SPAWN_DELAY_FLOOR),
            Curve::Bombs => BOMB_SPAWN_DELAY_START
                .saturating_sub((score / 10).saturating_mul(15))
                .max(BOMB_SPAWN_DELAY_FLOOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fires_at_delay_and_resets() {
        let mut scheduler = SpawnScheduler::balls();
        for _ in 0..BALL_SPAWN_DELAY_START - 1 {
            assert!(!scheduler.advance(0));
        }
        assert!(scheduler.advance(0));
        assert_eq!(scheduler.timer, 0);
    }

    #[test]
    fn test_delay_recomputed_from_score_on_fire() {
        let mut scheduler = SpawnScheduler::balls();
        scheduler.timer = scheduler.delay - 1;
        assert!(scheduler.advance(10));
        // 60 - (10/5)*5 = 50
        assert_eq!(scheduler.delay, 50);
    }

    #[test]
    fn test_ball_curve_values() {
        let scheduler = SpawnScheduler::balls();
        assert_eq!(scheduler.delay_for(0), 60);
        assert_eq!(scheduler.delay_for(4), 60);
        assert_eq!(scheduler.delay_for(5), 55);
        assert_eq!(scheduler.delay_for(10), 50);
        assert_eq!(scheduler.delay_for(45), 15);
        assert_eq!(scheduler.delay_for(100), 15);
    }

    #[test]
    fn test_bomb_curve_values() {
        let scheduler = SpawnScheduler::bombs();
        assert_eq!(scheduler.delay_for(0), 180);
        assert_eq!(scheduler.delay_for(9), 180);
        assert_eq!(scheduler.delay_for(10), 165);
        assert_eq!(scheduler.delay_for(20), 150);
        assert_eq!(scheduler.delay_for(80), 60);
        assert_eq!(scheduler.delay_for(200), 60);
    }

    proptest! {
        #[test]
        fn prop_ball_delay_monotone_and_floored(a in 0u32..10_000, b in 0u32..10_000) {
            let scheduler = SpawnScheduler::balls();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scheduler.delay_for(lo) >= scheduler.delay_for(hi));
            prop_assert!(scheduler.delay_for(hi) >= BALL_SPAWN_DELAY_FLOOR);
        }

        #[test]
        fn prop_bomb_delay_monotone_and_floored(a in 0u32..10_000, b in 0u32..10_000) {
            let scheduler = SpawnScheduler::bombs();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scheduler.delay_for(lo) >= scheduler.delay_for(hi));
            prop_assert!(scheduler.delay_for(hi) >= BOMB_SPAWN_DELAY_FLOOR);
        }

        #[test]
        fn prop_delay_never_exceeds_start(score in 0u32..u32::MAX) {
            prop_assert!(SpawnScheduler::balls().delay_for(score) <= BALL_SPAWN_DELAY_START);
            prop_assert!(SpawnScheduler::bombs().delay_for(score) <= BOMB_SPAWN_DELAY_START);
        }
    }
}
