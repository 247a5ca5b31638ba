//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod bonus;
pub mod catalog;
pub mod clock;
pub mod collision;
pub mod obstacle;
pub mod pattern;
pub mod player;
pub mod state;
pub mod tick;

pub use bonus::Bonus;
pub use clock::{ClockEvents, GameClock};
pub use collision::{boxes_overlap, collides, first_hit};
pub use obstacle::Obstacle;
pub use pattern::{CatalogError, Pattern, PatternCatalog};
pub use player::{MoveInput, Player};
pub use state::{GamePhase, GameState, RunSummary};
pub use tick::{TickEvents, TickInput, tick};
