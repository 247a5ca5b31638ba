//! Bitmap text built from quads
//!
//! 5x7 glyphs, one quad per lit pixel. Lowercase letters use the uppercase
//! glyphs; characters without a glyph render as blank space.

use glam::Vec2;

use super::shapes::push_quad;
use super::vertex::Vertex;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal advance per character, in font pixels
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

/// Rows top to bottom, bit 4 is the leftmost column
fn glyph(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => [0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => [0; GLYPH_HEIGHT],
    }
}

/// Append the quads for a line of text.
///
/// `origin` is the left end of the baseline (bottom of the glyph cell);
/// `pixel` is the size of one font pixel in NDC.
pub fn push_text(out: &mut Vec<Vertex>, text: &str, origin: Vec2, pixel: Vec2, color: [f32; 4]) {
    let half = pixel * 0.5;
    for (i, ch) in text.chars().enumerate() {
        let cell_x = origin.x + (i * ADVANCE) as f32 * pixel.x;
        for (row, &bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                    continue;
                }
                let x = cell_x + col as f32 * pixel.x;
                let y = origin.y + (GLYPH_HEIGHT - 1 - row) as f32 * pixel.y;
                push_quad(out, Vec2::new(x, y) + half, half, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_width(text: &str, pixel: Vec2) -> f32 {
        let chars = text.chars().count();
        ((chars.max(1) - 1) * ADVANCE + GLYPH_WIDTH) as f32 * pixel.x
    }

    fn lit_pixels(ch: char) -> u32 {
        glyph(ch).iter().map(|row| row.count_ones()).sum()
    }

    #[test]
    fn test_glyph_rows_fit_width() {
        for ch in ('A'..='Z').chain('0'..='9').chain("!?:.,'-()".chars()) {
            assert!(glyph(ch).iter().all(|&row| row < 1 << GLYPH_WIDTH), "{ch}");
            assert!(lit_pixels(ch) > 0, "{ch} has no pixels");
        }
    }

    #[test]
    fn test_lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph('q'), glyph('Q'));
        assert_eq!(glyph(' '), [0; GLYPH_HEIGHT]);
        assert_eq!(glyph('~'), [0; GLYPH_HEIGHT]);
    }

    #[test]
    fn test_one_quad_per_lit_pixel() {
        let mut out = Vec::new();
        push_text(&mut out, "I 1", Vec2::ZERO, Vec2::splat(0.01), [1.0; 4]);
        let expected = (lit_pixels('I') + lit_pixels('1')) as usize * 6;
        assert_eq!(out.len(), expected);
    }

    #[test]
    fn test_text_sits_on_baseline() {
        let mut out = Vec::new();
        let origin = Vec2::new(-0.5, 0.2);
        let pixel = Vec2::new(0.002, 0.004);
        push_text(&mut out, "Score: 10", origin, pixel, [1.0; 4]);

        let min_y = out.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        let max_y = out.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        let min_x = out.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = out.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((min_y - origin.y).abs() < 1e-5);
        assert!((max_y - (origin.y + 7.0 * pixel.y)).abs() < 1e-5);
        assert!(min_x >= origin.x - 1e-5);
        assert!(max_x <= origin.x + text_width("Score: 10", pixel) + 1e-5);
    }
}
