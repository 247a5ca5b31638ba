//! Time-gated bonus pickup
//!
//! Hidden until its interval elapses, then stays visible until the player
//! touches it. There is no timeout: an uncollected bonus waits indefinitely.

use glam::Vec2;

use super::collision::collides;
use super::obstacle::Obstacle;

/// Pickup color (pure green)
pub const BONUS_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bonus {
    /// Stationary hitbox (never falls)
    pub body: Obstacle,
    pub visible: bool,
}

impl Bonus {
    /// A hidden pickup at the center of the screen
    pub fn new(half_extent: f32) -> Self {
        Self {
            body: Obstacle::new(0.0, 0.0, half_extent, BONUS_COLOR, 0.0),
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Collect the pickup if it is visible and the player overlaps it.
    /// Returns true when collected; the pickup is hidden again.
    pub fn try_collect(&mut self, player_pos: Vec2, player_half: f32) -> bool {
        if !self.visible || !collides(player_pos, player_half, &self.body) {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bonus_cannot_be_collected() {
        let mut bonus = Bonus::new(0.05);
        assert!(!bonus.try_collect(Vec2::ZERO, 0.07));
    }

    #[test]
    fn test_collect_hides() {
        let mut bonus = Bonus::new(0.05);
        bonus.show();
        assert!(!bonus.try_collect(Vec2::new(0.5, 0.5), 0.07));
        assert!(bonus.visible);

        assert!(bonus.try_collect(Vec2::new(0.1, -0.1), 0.07));
        assert!(!bonus.visible);
        assert!(!bonus.try_collect(Vec2::new(0.1, -0.1), 0.07));
    }
}
