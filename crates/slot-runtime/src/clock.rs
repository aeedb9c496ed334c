//! Game clock with fixed-timestep accumulator

use slot_core::Millis;
use std::time::Instant;

/// Tracks game time and provides a fixed-timestep accumulator for simulation updates
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    /// Accumulated time for fixed-step consumption
    accumulator: f64,
    /// Simulated time covered by consumed fixed steps, in seconds
    step_time: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            fixed_timestep: 1.0 / 60.0,
            accumulator: 0.0,
            step_time: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    /// Create a new game clock with default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom fixed timestep
    pub fn with_fixed_timestep(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Advance the clock from the wall clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Advance by an explicit amount of seconds
    pub fn advance(&mut self, elapsed: f64) {
        // Clamp to avoid spiral of death (max 250ms frame time)
        self.delta_time = elapsed.clamp(0.0, 0.25);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Frame timestamp in whole milliseconds. Never decreases.
    pub fn now_ms(&self) -> Millis {
        (self.total_time * 1000.0) as Millis
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_fixed_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
        self.step_time += self.fixed_timestep;
    }

    /// Timestamp of the next fixed step in whole milliseconds. Advances by
    /// exactly one timestep per consumed step.
    pub fn step_ms(&self) -> Millis {
        ((self.step_time + self.fixed_timestep) * 1000.0).round() as Millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.fixed_timestep - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn test_custom_timestep() {
        let clock = GameClock::with_fixed_timestep(30.0);
        assert!((clock.fixed_timestep - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = GameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
    }

    #[test]
    fn test_accumulator_logic() {
        let mut clock = GameClock::new();
        clock.advance(1.0 / 30.0 + 1e-9); // Two fixed steps worth

        assert!(clock.should_fixed_update());
        clock.consume_fixed_step();
        assert!(clock.should_fixed_update());
        clock.consume_fixed_step();
        assert!(!clock.should_fixed_update());
    }

    #[test]
    fn test_step_time_advances_per_step() {
        let mut clock = GameClock::with_fixed_timestep(50.0);
        clock.advance(0.1);
        assert_eq!(clock.step_ms(), 20);
        clock.consume_fixed_step();
        assert_eq!(clock.step_ms(), 40);
        clock.consume_fixed_step();
        assert_eq!(clock.step_ms(), 60);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = GameClock::new();
        clock.advance(5.0);
        assert_eq!(clock.delta_time, 0.25);
        assert_eq!(clock.now_ms(), 250);
    }

    #[test]
    fn test_negative_elapsed_never_rewinds() {
        let mut clock = GameClock::new();
        clock.advance(0.1);
        clock.advance(-1.0);
        assert_eq!(clock.now_ms(), 100);
    }
}
