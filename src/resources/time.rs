use bevy::prelude::Resource;
use std::time::Duration;

use crate::utils::non_negative;

/// Simulated flight clock. Advanced once per tick by the driver, never by wall time.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimClock {
    tick: Duration,
    delta: Duration,
    elapsed: Duration,
    tick_count: u64,
}

impl SimClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Negative or NaN minutes give a zero tick; lengths past [`Duration::MAX`] saturate.
    pub fn from_minutes(minutes: f64) -> Self {
        let seconds = non_negative(minutes) * 60.0;
        Self::new(Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX))
    }

    /// Advances by the configured tick.
    pub fn advance(&mut self) {
        self.advance_by(self.tick);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed = self.elapsed.saturating_add(delta);
        self.tick_count += 1;
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn set_tick(&mut self, tick: Duration) {
        self.tick = tick;
    }

    /// Length of the step currently being simulated.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn delta_minutes(&self) -> f64 {
        self.delta.as_secs_f64() / 60.0
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed.as_secs_f64() / 60.0
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn reset(&mut self) {
        self.delta = Duration::ZERO;
        self.elapsed = Duration::ZERO;
        self.tick_count = 0;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::from_minutes(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = SimClock::from_minutes(2.0);
        assert_eq!(clock.delta_minutes(), 0.0);

        clock.advance();
        clock.advance();
        assert_eq!(clock.tick_count(), 2);
        assert_relative_eq!(clock.delta_minutes(), 2.0);
        assert_relative_eq!(clock.elapsed_minutes(), 4.0);

        clock.advance_by(Duration::from_secs(30));
        assert_relative_eq!(clock.delta_minutes(), 0.5);
        assert_relative_eq!(clock.elapsed_minutes(), 4.5);
    }

    #[test]
    fn test_reset_keeps_tick() {
        let mut clock = SimClock::from_minutes(1.0);
        clock.advance();
        clock.reset();
        assert_eq!(clock.tick_count(), 0);
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.tick(), Duration::from_secs(60));
    }

    #[test]
    fn test_negative_minutes_clamped() {
        assert_eq!(SimClock::from_minutes(-3.0).tick(), Duration::ZERO);
        assert_eq!(SimClock::from_minutes(f64::NAN).tick(), Duration::ZERO);
    }

    #[test]
    fn test_oversized_tick_saturates() {
        let mut clock = SimClock::from_minutes(1e300);
        assert_eq!(clock.tick(), Duration::MAX);
        assert_eq!(SimClock::from_minutes(f64::INFINITY).tick(), Duration::MAX);

        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed(), Duration::MAX);
        assert_eq!(clock.tick_count(), 2);
    }
}
