//! Keyboard input handling
//!
//! Tracks held keys plus keys that went down since the last frame, so the
//! start key can be edge-triggered while movement keys are level-triggered.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::sim::MoveInput;

pub const KEY_LEFT: KeyCode = KeyCode::KeyA;
pub const KEY_RIGHT: KeyCode = KeyCode::KeyD;
pub const KEY_UP: KeyCode = KeyCode::KeyW;
pub const KEY_DOWN: KeyCode = KeyCode::KeyS;
pub const KEY_INSTRUCTIONS: KeyCode = KeyCode::KeyI;
pub const KEY_START: KeyCode = KeyCode::Space;
pub const KEY_RESTART: KeyCode = KeyCode::KeyR;
pub const KEY_QUIT: KeyCode = KeyCode::Escape;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event (OS key repeat is ignored)
    pub fn key_down(&mut self, code: KeyCode) {
        if self.held.insert(code) {
            self.pressed.insert(code);
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Went down since the last `end_frame`
    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Forget this frame's key-down edges
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub fn movement(&self) -> MoveInput {
        MoveInput {
            left: self.is_held(KEY_LEFT),
            right: self.is_held(KEY_RIGHT),
            up: self.is_held(KEY_UP),
            down: self.is_held(KEY_DOWN),
        }
    }

    pub fn instructions_held(&self) -> bool {
        self.is_held(KEY_INSTRUCTIONS)
    }

    pub fn start_pressed(&self) -> bool {
        self.was_pressed(KEY_START)
    }

    pub fn restart_held(&self) -> bool {
        self.is_held(KEY_RESTART)
    }

    pub fn quit_held(&self) -> bool {
        self.is_held(KEY_QUIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();
        input.key_down(KEY_START);
        assert!(input.start_pressed());
        input.end_frame();
        assert!(!input.start_pressed());

        // Repeat while held does not re-trigger
        input.key_down(KEY_START);
        assert!(!input.start_pressed());

        input.key_up(KEY_START);
        input.key_down(KEY_START);
        assert!(input.start_pressed());
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut input = InputState::new();
        input.key_down(KEY_LEFT);
        input.key_down(KEY_UP);
        input.end_frame();

        let movement = input.movement();
        assert!(movement.left && movement.up);
        assert!(!movement.right && !movement.down);

        input.key_up(KEY_LEFT);
        assert!(!input.movement().left);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputState::new();
        input.key_down(KEY_INSTRUCTIONS);
        input.key_down(KEY_QUIT);
        input.clear();
        assert!(!input.instructions_held());
        assert!(!input.quit_held());
    }
}
