//! Falling obstacle blocks

use glam::Vec2;

/// A square obstacle (position is the box center)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Half-extent of the square
    pub size: f32,
    pub color: [f32; 3],
    /// Distance fallen per tick at speed multiplier 1.0
    pub fall_speed: f32,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32, size: f32, color: [f32; 3], fall_speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size,
            color,
            fall_speed,
        }
    }

    /// Move down by one tick's worth of fall
    #[inline]
    pub fn advance(&mut self, speed_multiplier: f32) {
        self.pos.y -= self.fall_speed * speed_multiplier;
    }

    /// True once the obstacle is at or below the given line
    #[inline]
    pub fn is_below(&self, line: f32) -> bool {
        self.pos.y <= line
    }
}
