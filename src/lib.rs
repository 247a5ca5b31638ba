//! Pixel Peril - dodge the falling blocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, patterns, collisions, scoring)
//! - `renderer`: Scene building and wgpu presentation
//! - `game`: Fixed-timestep frame driver (start, game over, restart)
//! - `input`: Keyboard state
//! - `tuning`: Data-driven game balance
//! - `settings`: Launch settings from the environment

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Flow, Game};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions (not resizable)
    pub const WINDOW_WIDTH: u32 = 1700;
    pub const WINDOW_HEIGHT: u32 = 950;
    pub const WINDOW_TITLE: &str = "Pixel Peril!";

    /// How long the game-over screen stays up before the program exits (seconds)
    pub const GAME_OVER_LINGER: f32 = 15.0;
}
