//! Accumulates winit events into per-frame snapshots

use crate::PointerButtons;
use crayon_math::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Everything a camera manipulator needs to know about one frame of input
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// Cursor position in window pixels (origin top-left)
    pub pointer: Vec2,
    /// Cursor movement since the previous snapshot
    pub pointer_delta: Vec2,
    /// Buttons held at snapshot time
    pub buttons: PointerButtons,
    /// Zoom-in key held
    pub zoom_in: bool,
    /// Zoom-out key held
    pub zoom_out: bool,
}

/// Event accumulator for pointer and zoom keys
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pointer: Vec2,
    pending_delta: Vec2,
    has_pointer: bool,
    buttons: PointerButtons,
    zoom_in: bool,
    zoom_out: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input, returns true if the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyA => { self.zoom_in = pressed; true }
            KeyCode::KeyZ => { self.zoom_out = pressed; true }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let flag = PointerButtons::from_mouse_button(button);
        self.buttons.set(flag, state == ElementState::Pressed);
    }

    /// Process an absolute cursor position
    ///
    /// The first position seen produces no delta.
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        let position = Vec2::new(x as f32, y as f32);
        if self.has_pointer {
            self.pending_delta = self.pending_delta + (position - self.pointer);
        }
        self.pointer = position;
        self.has_pointer = true;
    }

    /// Current cursor position
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Buttons currently held
    pub fn buttons(&self) -> PointerButtons {
        self.buttons
    }

    /// Take this frame's snapshot and reset accumulated motion
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            pointer: self.pointer,
            pointer_delta: self.pending_delta,
            buttons: self.buttons,
            zoom_in: self.zoom_in,
            zoom_out: self.zoom_out,
        };
        self.pending_delta = Vec2::ZERO;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_delta_accumulates_until_snapshot() {
        let mut input = InputState::new();
        input.process_cursor_moved(100.0, 100.0);
        input.process_cursor_moved(110.0, 95.0);
        input.process_cursor_moved(115.0, 90.0);

        let snap = input.snapshot();
        assert_eq!(snap.pointer, Vec2::new(115.0, 90.0));
        assert_eq!(snap.pointer_delta, Vec2::new(15.0, -10.0));

        let snap = input.snapshot();
        assert_eq!(snap.pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn test_buttons_track_press_and_release() {
        let mut input = InputState::new();
        input.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(input.buttons(), PointerButtons::PRIMARY | PointerButtons::SECONDARY);

        input.process_mouse_button(MouseButton::Right, ElementState::Released);
        assert_eq!(input.snapshot().buttons, PointerButtons::PRIMARY);
    }

    #[test]
    fn test_zoom_keys() {
        let mut input = InputState::new();
        assert!(input.process_keyboard(KeyCode::KeyA, ElementState::Pressed));
        assert!(!input.process_keyboard(KeyCode::KeyR, ElementState::Pressed));
        let snap = input.snapshot();
        assert!(snap.zoom_in);
        assert!(!snap.zoom_out);

        input.process_keyboard(KeyCode::KeyA, ElementState::Released);
        assert!(!input.snapshot().zoom_in);
    }
}
