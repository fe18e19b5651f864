//! Rock spawner with a shrinking interval
//!
//! Spawning is scheduled against level time, which starts accruing the
//! moment the world is built. The gap between spawns shrinks as the
//! level ages, down to a floor.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Interval-based rock spawn scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Gap between spawns at level start (seconds)
    pub interval_initial: f32,
    /// Floor the shrinking gap clamps to (seconds)
    pub interval_min: f32,
    /// Spawn x is drawn uniformly from [-band, +band]
    pub band_half_width: f32,
    /// Level time at which the next rock is due
    pub next_spawn_time: f32,
    /// Whether timed spawning has begun
    pub started: bool,
}

impl Spawner {
    pub fn new(interval_initial: f32, interval_min: f32, band_half_width: f32) -> Self {
        Self {
            interval_initial,
            interval_min,
            band_half_width,
            next_spawn_time: 0.0,
            started: false,
        }
    }

    /// Begin timed spawning; the first timed rock is due one full
    /// interval after this moment. Idempotent.
    pub fn start(&mut self, level_time: f32) {
        if self.started {
            return;
        }
        self.started = true;
        self.next_spawn_time = level_time + self.dynamic_interval(level_time);
    }

    /// Whether a rock is due at the given level time
    pub fn due(&self, level_time: f32) -> bool {
        self.started && level_time >= self.next_spawn_time
    }

    /// Schedule the next rock one dynamic interval past the current one
    pub fn schedule_next(&mut self, level_time: f32) {
        self.next_spawn_time += self.dynamic_interval(level_time);
    }

    /// Spawn gap as a function of level age, clamped to the floor
    pub fn dynamic_interval(&self, level_time: f32) -> f32 {
        (self.interval_initial - level_time / 30.0).clamp(self.interval_min, self.interval_initial)
    }

    /// Draw a spawn x coordinate within the horizontal band
    pub fn roll_x(&self, rng: &mut Pcg32) -> f32 {
        rng.random_range(-self.band_half_width..=self.band_half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_interval_shrinks_with_level_age() {
        let spawner = Spawner::new(3.0, 1.0, 5.0);
        assert_eq!(spawner.dynamic_interval(0.0), 3.0);
        assert_eq!(spawner.dynamic_interval(30.0), 2.0);
        assert_eq!(spawner.dynamic_interval(60.0), 1.0);
        // Clamped at the floor from here on
        assert_eq!(spawner.dynamic_interval(300.0), 1.0);
    }

    #[test]
    fn test_not_due_before_start() {
        let spawner = Spawner::new(3.0, 1.0, 5.0);
        assert!(!spawner.due(100.0));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut spawner = Spawner::new(3.0, 1.0, 5.0);
        spawner.start(0.0);
        let first_due = spawner.next_spawn_time;
        spawner.start(50.0);
        assert_eq!(spawner.next_spawn_time, first_due);
    }

    #[test]
    fn test_due_and_reschedule() {
        let mut spawner = Spawner::new(3.0, 1.0, 5.0);
        spawner.start(0.0);
        assert!(!spawner.due(2.9));
        assert!(spawner.due(3.0));
        spawner.schedule_next(3.0);
        assert!(!spawner.due(3.0));
        // 3.0 + (3.0 - 3.0/30) = 5.9
        assert!((spawner.next_spawn_time - 5.9).abs() < 1e-5);
    }

    #[test]
    fn test_roll_x_stays_in_band() {
        let spawner = Spawner::new(3.0, 1.0, 5.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let x = spawner.roll_x(&mut rng);
            assert!((-5.0..=5.0).contains(&x));
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the dynamic interval always lands inside
        /// [interval_min, interval_initial] no matter the level age.
        #[test]
        fn prop_interval_stays_clamped(level_time in 0.0f32..100_000.0) {
            let spawner = Spawner::new(3.0, 1.0, 5.0);
            let interval = spawner.dynamic_interval(level_time);
            prop_assert!(interval >= spawner.interval_min);
            prop_assert!(interval <= spawner.interval_initial);
        }

        /// Property: the interval never grows as the level ages.
        #[test]
        fn prop_interval_is_non_increasing(
            earlier in 0.0f32..1_000.0,
            gap in 0.0f32..1_000.0,
        ) {
            let spawner = Spawner::new(3.0, 1.0, 5.0);
            let later = earlier + gap;
            prop_assert!(spawner.dynamic_interval(later) <= spawner.dynamic_interval(earlier));
        }
    }
}
