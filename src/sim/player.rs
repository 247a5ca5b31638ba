//! The player's block

use glam::Vec2;

use crate::tuning::Tuning;

/// Held directional input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Player position as offsets from the bottom-center anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// x is the world x; y is measured up from `player_base_y`
    pub offset: Vec2,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            offset: Vec2::new(tuning.player_start_x, tuning.player_start_y),
        }
    }

    /// Hitbox center in world coordinates
    pub fn pos(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.offset.x, tuning.player_base_y + self.offset.y)
    }

    /// Apply one tick of movement, clamped to the play area
    pub fn step(&mut self, input: MoveInput, tuning: &Tuning) {
        let step = tuning.player_step;
        if input.left {
            self.offset.x = (self.offset.x - step).max(tuning.player_min_x);
        }
        if input.right {
            self.offset.x = (self.offset.x + step).min(tuning.player_max_x);
        }
        if input.up {
            self.offset.y = (self.offset.y + step).min(tuning.player_max_y);
        }
        if input.down {
            self.offset.y = (self.offset.y - step).max(tuning.player_min_y);
        }
    }
}
