//! Fixed timestep simulation tick
//!
//! One call advances the game by one frame in a fixed order:
//! 1. Difficulty clock (score, speed ramp)
//! 2. Player movement
//! 3. Obstacle fall
//! 4. Pattern completion and switch
//! 5. Lethal collisions
//! 6. Bonus spawn and pickup

use super::collision::first_hit;
use super::player::MoveInput;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys
    pub movement: MoveInput,
    /// Start the run (edge-triggered by the caller)
    pub start: bool,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Index of the newly activated pattern
    pub pattern_switched: Option<usize>,
    pub bonus_spawned: bool,
    pub bonus_collected: bool,
    /// The player was hit this tick
    pub game_over: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if input.start {
        state.start();
    }

    // Title and game-over screens freeze the simulation
    if state.phase != GamePhase::Playing {
        return events;
    }

    let tuning = &state.tuning;

    // Difficulty ramp
    let clock = state.clock.advance(tuning);
    if clock.score {
        state.score += 1;
    }
    if clock.speed_up {
        state.speed_multiplier *= tuning.speed_growth;
        log::debug!("Speed multiplier now {:.3}", state.speed_multiplier);
    }

    state.player.step(input.movement, tuning);

    if state.movement_enabled() {
        state.opening.advance(state.speed_multiplier);
        state.catalog.active_mut().advance(state.speed_multiplier);
    }

    if state.catalog.active().is_complete(tuning.completion_line) {
        let next = state.catalog.select_next(&mut state.rng, tuning.spawn_height);
        state.level += 1;
        state.patterns_cleared += 1;
        events.pattern_switched = Some(next);
        log::debug!("Pattern cleared, switching to #{} (level {})", next, state.level);
    }

    let player_pos = state.player.pos(tuning);
    let player_half = tuning.player_half_extent;

    if !state.is_game_over() {
        let hit = first_hit(
            player_pos,
            player_half,
            state.opening.iter().chain(state.catalog.active().iter()),
        );
        if let Some(obstacle) = hit {
            log::info!(
                "Player hit at ({:.2}, {:.2}) by obstacle at ({:.2}, {:.2})",
                player_pos.x,
                player_pos.y,
                obstacle.pos.x,
                obstacle.pos.y
            );
            state.phase = GamePhase::GameOver;
            events.game_over = true;
        }
    }

    if clock.bonus {
        state.bonus.show();
        events.bonus_spawned = true;
    }
    if state.bonus.try_collect(player_pos, player_half) {
        state.score += tuning.bonus_score;
        state.speed_multiplier = tuning.bonus_slowdown;
        state.bonuses_collected += 1;
        events.bonus_collected = true;
        log::debug!("Bonus collected, score {}", state.score);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::pattern::{Pattern, PatternCatalog};
    use crate::tuning::Tuning;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345, Tuning::default());
        state.start();
        state
    }

    /// A state where nothing can hit the player
    fn safe_state() -> GameState {
        let far = |y| Obstacle::new(-0.9, y, 0.05, [1.0; 3], 0.0);
        let catalog = PatternCatalog::new(vec![Pattern::new(vec![far(5.0)])]).unwrap();
        let mut state = GameState::with_catalog(1, Tuning::default(), catalog);
        state.opening = Pattern::default();
        state.start();
        state
    }

    #[test]
    fn test_title_screen_is_frozen() {
        let mut state = GameState::new(12345, Tuning::default());
        let before = state.catalog.active().clone();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score, 0);
        assert_eq!(state.clock.ticks, 0);
        assert_eq!(state.catalog.active(), &before);
    }

    #[test]
    fn test_start_input_begins_run() {
        let mut state = GameState::new(12345, Tuning::default());
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.clock.ticks, 1);
    }

    #[test]
    fn test_obstacles_fall_while_playing() {
        let mut state = playing_state();
        let before: Vec<f32> = state.catalog.active().iter().map(|o| o.pos.y).collect();
        tick(&mut state, &TickInput::default());
        for (ob, y0) in state.catalog.active().iter().zip(before) {
            assert!((ob.pos.y - (y0 - ob.fall_speed)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_score_and_speed_ramp() {
        let mut state = safe_state();
        for _ in 0..3 * 240 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Playing);
        // 12 seconds at one point per 0.2s
        assert_eq!(state.score, 60);
        assert!((state.speed_multiplier - 1.15f32.powi(3)).abs() < 1e-4);
        assert!((state.speed_multiplier - 1.521).abs() < 1e-3);
    }

    #[test]
    fn test_pattern_switch_on_completion() {
        let mut state = playing_state();
        state.opening = Pattern::default();
        // Keep the player clear of any respawned obstacle
        state.player.offset.x = -0.9;
        for ob in &mut state.catalog.active_mut().obstacles {
            ob.pos.y = -1.5;
        }

        let events = tick(&mut state, &TickInput::default());

        let index = events.pattern_switched.expect("pattern should switch");
        assert_eq!(state.catalog.active_index(), index);
        assert_eq!(state.level, 2);
        assert_eq!(state.patterns_cleared, 1);
        assert!(state.catalog.active().iter().all(|o| o.pos.y == 1.0));
    }

    #[test]
    fn test_collision_latches_game_over() {
        let mut state = safe_state();
        let player_pos = state.player.pos(&state.tuning);
        state.opening = Pattern::new(vec![Obstacle::new(
            player_pos.x,
            player_pos.y + 0.05,
            0.05,
            [1.0; 3],
            0.0,
        )]);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.game_over);
        assert!(state.is_game_over());

        // Further ticks change nothing
        let score = state.score;
        state.opening = Pattern::default();
        for _ in 0..50 {
            let events = tick(&mut state, &TickInput::default());
            assert!(!events.game_over);
        }
        assert!(state.is_game_over());
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_bonus_pickup() {
        let mut state = safe_state();
        state.speed_multiplier = 2.0;
        state.bonus.show();
        // Park the player on the pickup at the origin
        state.player.offset = glam::Vec2::new(0.0, -state.tuning.player_base_y);
        let score = state.score;

        let events = tick(&mut state, &TickInput::default());

        assert!(events.bonus_collected);
        assert!(!events.game_over);
        assert_eq!(state.score, score + 100);
        assert_eq!(state.speed_multiplier, 0.5);
        assert!(!state.bonus.visible);
        assert_eq!(state.bonuses_collected, 1);
    }

    #[test]
    fn test_bonus_appears_after_interval() {
        let mut state = safe_state();
        for _ in 0..1800 {
            let events = tick(&mut state, &TickInput::default());
            assert!(!events.bonus_spawned);
        }
        let events = tick(&mut state, &TickInput::default());
        assert!(events.bonus_spawned);
        assert!(state.bonus.visible);

        // Not collected: stays visible
        for _ in 0..600 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.bonus.visible);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state1, &start);
        tick(&mut state2, &start);

        for state in [&mut state1, &mut state2] {
            state.opening = Pattern::default();
            state.player.offset.x = -0.9;
        }

        let mut switches1 = Vec::new();
        let mut switches2 = Vec::new();
        for _ in 0..5000 {
            if let Some(i) = tick(&mut state1, &TickInput::default()).pattern_switched {
                switches1.push(i);
            }
            if let Some(i) = tick(&mut state2, &TickInput::default()).pattern_switched {
                switches2.push(i);
            }
        }

        assert_eq!(switches1, switches2);
        assert_eq!(state1.level, state2.level);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
    }
}
