//! Tick clock driving the difficulty ramp
//!
//! Time is counted in fixed simulation ticks, so interval checks are exact
//! integer comparisons instead of floating-point timestamp differences.

use crate::tuning::Tuning;

/// Timers that fired on a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockEvents {
    /// Award one point
    pub score: bool,
    /// Grow the speed multiplier
    pub speed_up: bool,
    /// Show the bonus pickup
    pub bonus: bool,
}

/// Tick counter plus the tick each periodic event last fired on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    /// Ticks since the run started
    pub ticks: u64,
    last_score: u64,
    last_speed_up: u64,
    last_bonus: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick and report which intervals elapsed
    pub fn advance(&mut self, tuning: &Tuning) -> ClockEvents {
        self.ticks += 1;
        let mut events = ClockEvents::default();

        if self.ticks - self.last_score >= tuning.score_interval_ticks() {
            events.score = true;
            self.last_score = self.ticks;
        }
        if self.ticks - self.last_speed_up >= tuning.speed_interval_ticks() {
            events.speed_up = true;
            self.last_speed_up = self.ticks;
        }
        // Strictly greater: the bonus waits one tick past its interval
        if self.ticks - self.last_bonus > tuning.bonus_interval_ticks() {
            events.bonus = true;
            self.last_bonus = self.ticks;
        }

        events
    }

    /// Seconds of play represented by the tick count
    pub fn elapsed_secs(&self) -> f32 {
        self.ticks as f32 * crate::consts::SIM_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(clock: &mut GameClock, tuning: &Tuning, ticks: u64) -> (u32, u32, u32) {
        let (mut score, mut speed, mut bonus) = (0, 0, 0);
        for _ in 0..ticks {
            let events = clock.advance(tuning);
            score += events.score as u32;
            speed += events.speed_up as u32;
            bonus += events.bonus as u32;
        }
        (score, speed, bonus)
    }

    #[test]
    fn test_score_every_fifth_of_a_second() {
        let tuning = Tuning::default();
        let mut clock = GameClock::new();
        // 11 ticks is just short of 0.2s
        assert_eq!(run(&mut clock, &tuning, 11).0, 0);
        assert_eq!(run(&mut clock, &tuning, 1).0, 1);
        // One more second: five more points
        assert_eq!(run(&mut clock, &tuning, 60).0, 5);
    }

    #[test]
    fn test_speed_up_every_four_seconds() {
        let tuning = Tuning::default();
        let mut clock = GameClock::new();
        let (_, speed, _) = run(&mut clock, &tuning, 3 * 240);
        assert_eq!(speed, 3);
        let (_, speed, _) = run(&mut clock, &tuning, 239);
        assert_eq!(speed, 0);
    }

    #[test]
    fn test_bonus_strictly_after_interval() {
        let tuning = Tuning::default();
        let mut clock = GameClock::new();
        assert_eq!(run(&mut clock, &tuning, 1800).2, 0);
        assert_eq!(run(&mut clock, &tuning, 1).2, 1);
        assert_eq!(run(&mut clock, &tuning, 1800).2, 0);
        assert_eq!(run(&mut clock, &tuning, 1).2, 1);
    }

    #[test]
    fn test_elapsed_secs() {
        let tuning = Tuning::default();
        let mut clock = GameClock::new();
        run(&mut clock, &tuning, 120);
        assert!((clock.elapsed_secs() - 2.0).abs() < 1e-4);
    }
}
