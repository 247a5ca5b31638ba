//! Game state and core simulation types
//!
//! Everything the update step reads or writes lives in `GameState`, passed by
//! reference through tick, collision and scene building.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bonus::Bonus;
use super::catalog;
use super::clock::GameClock;
use super::pattern::{Pattern, PatternCatalog};
use super::player::Player;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    Title,
    /// Obstacles falling, clock running
    Playing,
    /// Player was hit
    GameOver,
}

/// End-of-run record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub score: u64,
    pub level: u32,
    pub ticks_played: u64,
    pub patterns_cleared: u32,
    pub bonuses_collected: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Pattern selection RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Starts at 1, +1 per pattern switch
    pub level: u32,
    /// Applied to every obstacle's fall speed
    pub speed_multiplier: f32,
    pub player: Player,
    /// Lone obstacles present at launch; fall once, never reset
    pub opening: Pattern,
    pub catalog: PatternCatalog,
    pub bonus: Bonus,
    pub clock: GameClock,
    pub patterns_cleared: u32,
    pub bonuses_collected: u32,
}

impl GameState {
    /// Create a new game with the built-in catalog
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_catalog(seed, tuning, PatternCatalog::builtin())
    }

    /// Create a new game with a custom catalog
    pub fn with_catalog(seed: u64, tuning: Tuning, catalog: PatternCatalog) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            score: 0,
            level: 1,
            speed_multiplier: tuning.initial_speed_multiplier,
            player: Player::new(&tuning),
            opening: catalog::opening_wave(),
            catalog,
            bonus: Bonus::new(tuning.bonus_half_extent),
            clock: GameClock::new(),
            patterns_cleared: 0,
            bonuses_collected: 0,
            tuning,
        }
    }

    /// Leave the title screen (no-op once started)
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Title {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("Run started (seed {})", self.seed);
        true
    }

    /// Obstacles only fall while a run is in progress
    pub fn movement_enabled(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Return to the title screen with fresh counters.
    ///
    /// The active pattern is kept but put back at spawn height; the opening
    /// wave is not restored. The RNG stream continues.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Title;
        self.score = 0;
        self.level = 1;
        self.speed_multiplier = self.tuning.initial_speed_multiplier;
        self.player = Player::new(&self.tuning);
        self.catalog.active_mut().reset(self.tuning.spawn_height);
        self.bonus = Bonus::new(self.tuning.bonus_half_extent);
        self.clock = GameClock::new();
        self.patterns_cleared = 0;
        self.bonuses_collected = 0;
        log::info!("Game reset");
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            score: self.score,
            level: self.level,
            ticks_played: self.clock.ticks,
            patterns_cleared: self.patterns_cleared,
            bonuses_collected: self.bonuses_collected,
        }
    }
}
