//! Axis-aligned box collision
//!
//! Every hitbox is a square described by its center and half-extent. Tests are
//! discrete: an obstacle moving further than the combined extents in one tick
//! can pass through the player.

use glam::Vec2;

use super::obstacle::Obstacle;

/// Overlap test between two squares, axis by axis.
///
/// Touching edges (distance exactly equal to the summed half-extents) do not
/// count as a collision.
#[inline]
pub fn boxes_overlap(a: Vec2, a_half: f32, b: Vec2, b_half: f32) -> bool {
    let reach = a_half + b_half;
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Check the player's hitbox against one obstacle
#[inline]
pub fn collides(player_pos: Vec2, player_half: f32, obstacle: &Obstacle) -> bool {
    boxes_overlap(player_pos, player_half, obstacle.pos, obstacle.size)
}

/// First obstacle the player overlaps, in iteration order
pub fn first_hit<'a, I>(player_pos: Vec2, player_half: f32, obstacles: I) -> Option<&'a Obstacle>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles
        .into_iter()
        .find(|o| collides(player_pos, player_half, o))
}
