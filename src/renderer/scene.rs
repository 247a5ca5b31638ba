//! Scene building
//!
//! `build_scene` reads the game state into a flat list of draw commands;
//! `Scene::tessellate` turns that list into NDC triangles for the pipeline.
//! Neither touches the game state.

use glam::Vec2;

use super::shapes::{ellipse, push_quad};
use super::text::push_text;
use super::vertex::{Vertex, colors, rgba};
use crate::sim::{GamePhase, GameState};

/// Screen pixels per font pixel
pub const TEXT_SCALE: f32 = 2.0;
const CIRCLE_SEGMENTS: u32 = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Quad {
        center: Vec2,
        half: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: Vec2,
        color: [f32; 4],
    },
    /// `origin` is the left end of the baseline
    Text {
        text: String,
        origin: Vec2,
        color: [f32; 4],
    },
}

/// One frame's worth of drawing, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear: [f32; 4],
    pub commands: Vec<DrawCommand>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            clear: colors::BACKGROUND,
            commands: Vec::new(),
        }
    }
}

impl Scene {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            origin: Vec2::new(x, y),
            color,
        });
    }

    fn quad(&mut self, center: Vec2, half: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Quad {
            center,
            half: Vec2::splat(half),
            color,
        });
    }

    /// All text lines in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Triangles for the whole scene. The viewport size only affects text,
    /// which is sized in screen pixels.
    pub fn tessellate(&self, viewport: (u32, u32)) -> Vec<Vertex> {
        let (width, height) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
        let pixel = Vec2::new(2.0 * TEXT_SCALE / width, 2.0 * TEXT_SCALE / height);

        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Quad {
                    center,
                    half,
                    color,
                } => push_quad(&mut out, *center, *half, *color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => out.extend(ellipse(*center, *radius, *color, CIRCLE_SEGMENTS)),
                DrawCommand::Text {
                    text,
                    origin,
                    color,
                } => push_text(&mut out, text, *origin, pixel, *color),
            }
        }
        out
    }
}

/// Build the draw list for the current state
pub fn build_scene(state: &GameState, show_instructions: bool) -> Scene {
    let mut scene = Scene::default();

    if show_instructions {
        scene.text(
            "Welcome to Pixel Peril! You are a white block who has to avoid all other blocks.",
            -0.5,
            0.0,
            colors::TEXT,
        );
        scene.text(
            "Press A to move Left and D to move right. The game speeds up after every level you pass!",
            -0.5,
            -0.1,
            colors::TEXT,
        );
        scene.text("Have fun:))))", -0.1, -0.2, colors::TEXT);
        return scene;
    }

    if state.phase == GamePhase::Title {
        scene.text("Pixel Peril!", -0.1, 0.1, colors::HEADLINE);
        scene.text("Press Spacebar to Start game", -0.2, 0.0, colors::TEXT);
        scene.text("Hold down I for Instructions", -0.2, -0.1, colors::TEXT);
        return scene;
    }

    scene.text(format!("Score: {}", state.score), -0.15, -0.9, colors::TEXT);
    scene.text(format!("Level: {}", state.level), 0.05, -0.9, colors::TEXT);

    let tuning = &state.tuning;
    scene.quad(
        state.player.pos(tuning),
        tuning.player_half_extent,
        colors::PLAYER,
    );

    for obstacle in state.opening.iter().chain(state.catalog.active().iter()) {
        scene.quad(obstacle.pos, obstacle.size, rgba(obstacle.color));
    }

    if state.bonus.visible {
        let body = &state.bonus.body;
        scene.commands.push(DrawCommand::Circle {
            center: body.pos,
            radius: Vec2::splat(body.size),
            color: rgba(body.color),
        });
    }

    if state.phase == GamePhase::GameOver {
        scene.text("GAME OVER", -0.1, 0.0, colors::HEADLINE);
        scene.text(format!("Final Score: {}", state.score), -0.15, -0.1, colors::TEXT);
        scene.text(format!("Final Level: {}", state.level), -0.15, -0.2, colors::TEXT);
    }

    scene
}
