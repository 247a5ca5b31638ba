//! Frame driver
//!
//! Turns variable frame times into fixed simulation ticks and owns the flow
//! around a run: start on the start key, and on game over either restart
//! (restart key held at that moment) or hold the game-over screen for a
//! while and then quit.

use crate::consts::{GAME_OVER_LINGER, MAX_SUBSTEPS, SIM_DT};
use crate::input::InputState;
use crate::renderer::scene::{Scene, build_scene};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

/// What the event loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    accumulator: f32,
    /// Start key seen but not yet consumed by a tick
    pending_start: bool,
    /// Seconds left on the game-over screen before exiting
    linger: Option<f32>,
    /// Game-over screen shown while lingering
    final_scene: Option<Scene>,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        Self::from_state(GameState::new(seed, settings.tuning.clone()))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            input: InputState::new(),
            accumulator: 0.0,
            pending_start: false,
            linger: None,
            final_scene: None,
        }
    }

    /// Run simulation ticks for `dt` seconds of wall time
    pub fn frame(&mut self, dt: f32) -> Flow {
        if self.input.quit_held() {
            log::info!("Quit requested");
            return Flow::Exit;
        }

        if let Some(remaining) = self.linger.as_mut() {
            *remaining -= dt;
            self.input.end_frame();
            return if *remaining <= 0.0 {
                Flow::Exit
            } else {
                Flow::Continue
            };
        }

        if self.input.start_pressed() {
            self.pending_start = true;
        }

        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                movement: self.input.movement(),
                start: std::mem::take(&mut self.pending_start),
            };
            let events = tick(&mut self.state, &input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if events.game_over {
                self.on_game_over();
                break;
            }
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiralling
            self.accumulator = 0.0;
        }

        self.input.end_frame();
        Flow::Continue
    }

    /// The restart key is only looked at once, right as the run ends. Either
    /// way the game-over screen is then held until the program exits.
    fn on_game_over(&mut self) {
        let summary = self.state.summary();
        let played = self.state.clock.elapsed_secs();
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Game over after {:.1}s: {}", played, json),
            Err(e) => log::warn!("Game over (summary unavailable: {})", e),
        }

        self.accumulator = 0.0;
        self.final_scene = Some(build_scene(&self.state, false));
        if self.input.restart_held() {
            self.state.restart();
        }
        self.linger = Some(GAME_OVER_LINGER);
    }

    /// Draw list for the current frame
    pub fn scene(&self) -> Scene {
        match &self.final_scene {
            Some(scene) => scene.clone(),
            None => build_scene(&self.state, self.input.instructions_held()),
        }
    }
}
