//! Data-driven game balance
//!
//! Every gameplay number lives here so it can be overridden at launch with a
//! JSON document. Missing fields fall back to the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;

/// Error parsing a tuning override
#[derive(Debug)]
pub struct TuningError(serde_json::Error);

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tuning JSON: {}", self.0)
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty ramp ===
    /// Seconds between score increments
    pub score_interval: f32,
    /// Seconds between speed multiplier increases
    pub speed_interval: f32,
    /// Factor applied to the speed multiplier at each increase
    pub speed_growth: f32,
    /// Multiplier at the start of a run
    pub initial_speed_multiplier: f32,

    // === Bonus pickup ===
    /// Seconds between bonus appearances (strictly exceeded)
    pub bonus_interval: f32,
    /// Score awarded on pickup
    pub bonus_score: u64,
    /// Speed multiplier set on pickup
    pub bonus_slowdown: f32,
    /// Half-extent of the bonus hitbox
    pub bonus_half_extent: f32,

    // === Player ===
    /// Offset change per tick while a direction key is held
    pub player_step: f32,
    /// Half-extent of the player hitbox
    pub player_half_extent: f32,
    /// Vertical anchor the y offset is measured from
    pub player_base_y: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_min_x: f32,
    pub player_max_x: f32,
    pub player_min_y: f32,
    pub player_max_y: f32,

    // === Patterns ===
    /// Height obstacles are reset to when a pattern is (re)selected
    pub spawn_height: f32,
    /// A pattern is complete once every obstacle is at or below this line
    pub completion_line: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            score_interval: 0.2,
            speed_interval: 4.0,
            speed_growth: 1.15,
            initial_speed_multiplier: 1.0,

            bonus_interval: 30.0,
            bonus_score: 100,
            bonus_slowdown: 0.5,
            bonus_half_extent: 0.05,

            player_step: 0.01,
            player_half_extent: 0.07,
            player_base_y: -0.9,
            player_start_x: 0.9,
            player_start_y: 0.2,
            player_min_x: -0.9,
            player_max_x: 0.9,
            player_min_y: 0.1,
            player_max_y: 1.8,

            spawn_height: 1.0,
            completion_line: -1.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        serde_json::from_str(json).map_err(TuningError)
    }

    pub fn score_interval_ticks(&self) -> u64 {
        secs_to_ticks(self.score_interval)
    }

    pub fn speed_interval_ticks(&self) -> u64 {
        secs_to_ticks(self.speed_interval)
    }

    pub fn bonus_interval_ticks(&self) -> u64 {
        secs_to_ticks(self.bonus_interval)
    }
}

/// Convert seconds to whole simulation ticks (at least one)
pub fn secs_to_ticks(secs: f32) -> u64 {
    ((secs / SIM_DT).round() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_ticks() {
        let tuning = Tuning::default();
        assert_eq!(tuning.score_interval_ticks(), 12);
        assert_eq!(tuning.speed_interval_ticks(), 240);
        assert_eq!(tuning.bonus_interval_ticks(), 1800);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "speed_growth": 1.5, "bonus_score": 250 }"#).unwrap();
        assert_eq!(tuning.speed_growth, 1.5);
        assert_eq!(tuning.bonus_score, 250);
        assert_eq!(tuning.score_interval, 0.2);
        assert_eq!(tuning.player_half_extent, 0.07);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = Tuning::from_json("{ speed_growth: }").unwrap_err();
        assert!(err.to_string().starts_with("invalid tuning JSON"));
    }

    #[test]
    fn test_tiny_interval_is_one_tick() {
        assert_eq!(secs_to_ticks(0.0), 1);
        assert_eq!(secs_to_ticks(0.001), 1);
    }
}
