//! Scroll clock - the ramping speed that drags the world downward
//!
//! The clock stays parked at its base speed until the first successful
//! grab activates it; from then on it ramps linearly with active run
//! time until it hits the cap.

use serde::{Deserialize, Serialize};

/// Ramping scroll speed driven by active run time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollClock {
    /// Speed while inactive and the ramp's starting point (units/sec)
    pub base_speed: f32,
    /// Speed gained per active second (units/sec²)
    pub ramp_rate: f32,
    /// Ceiling the ramp saturates at (units/sec)
    pub max_speed: f32,
    /// Seconds accumulated while active
    pub elapsed_active: f32,
    /// Whether the run has started and the ramp is accruing
    pub active: bool,
}

impl ScrollClock {
    pub fn new(base_speed: f32, ramp_rate: f32, max_speed: f32) -> Self {
        Self {
            base_speed,
            ramp_rate,
            max_speed,
            elapsed_active: 0.0,
            active: false,
        }
    }

    /// Start the ramp; idempotent
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Accrue active time
    pub fn tick(&mut self, dt: f32) {
        if self.active {
            self.elapsed_active += dt;
        }
    }

    /// Current downward scroll speed in units/sec
    pub fn current_speed(&self) -> f32 {
        (self.base_speed + self.ramp_rate * self.elapsed_active).min(self.max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_clock_holds_base_speed() {
        let mut clock = ScrollClock::new(1.0, 10.0, 10.0);
        for _ in 0..1000 {
            clock.tick(1.0 / 120.0);
        }
        assert_eq!(clock.elapsed_active, 0.0);
        assert_eq!(clock.current_speed(), 1.0);
    }

    #[test]
    fn test_ramp_accrues_after_activation() {
        let mut clock = ScrollClock::new(1.0, 10.0, 10.0);
        clock.activate();
        clock.tick(0.5);
        assert_eq!(clock.elapsed_active, 0.5);
        assert_eq!(clock.current_speed(), 6.0);
    }

    #[test]
    fn test_speed_saturates_at_cap() {
        let mut clock = ScrollClock::new(1.0, 10.0, 10.0);
        clock.activate();
        clock.tick(100.0);
        assert_eq!(clock.current_speed(), 10.0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the current speed never exceeds the configured cap
        /// and never drops below the base speed.
        #[test]
        fn prop_speed_stays_within_bounds(elapsed in 0.0f32..10_000.0) {
            let mut clock = ScrollClock::new(1.0, 10.0, 10.0);
            clock.activate();
            clock.tick(elapsed);
            let speed = clock.current_speed();
            prop_assert!(speed >= clock.base_speed);
            prop_assert!(speed <= clock.max_speed);
        }

        /// Property: accruing more active time never slows the clock down.
        #[test]
        fn prop_speed_is_monotonic(
            first in 0.0f32..100.0,
            extra in 0.0f32..100.0,
        ) {
            let mut clock = ScrollClock::new(1.0, 10.0, 10.0);
            clock.activate();
            clock.tick(first);
            let before = clock.current_speed();
            clock.tick(extra);
            prop_assert!(clock.current_speed() >= before);
        }
    }
}
