//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Append an axis-aligned rectangle (two triangles)
pub fn push_quad(out: &mut Vec<Vertex>, center: Vec2, half: Vec2, color: [f32; 4]) {
    let (l, r) = (center.x - half.x, center.x + half.x);
    let (b, t) = (center.y - half.y, center.y + half.y);

    out.push(Vertex::new(l, t, color));
    out.push(Vertex::new(l, b, color));
    out.push(Vertex::new(r, b, color));

    out.push(Vertex::new(r, b, color));
    out.push(Vertex::new(r, t, color));
    out.push(Vertex::new(l, t, color));
}

/// Generate vertices for a filled ellipse.
///
/// Radii are given per axis so a circle stays round on a non-square viewport.
pub fn ellipse(center: Vec2, radius: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius.x * theta1.cos(),
            center.y + radius.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius.x * theta2.cos(),
            center.y + radius.y * theta2.sin(),
            color,
        ));
    }

    vertices
}
