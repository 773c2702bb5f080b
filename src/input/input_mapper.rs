//! Input mapping from raw events to semantic actions
//!
//! Maps keys to application actions like ReloadShaders, ResetWorld, Exit.
//! Zoom keys (A/Z) are NOT mapped here - they go directly to InputState.

use winit::keyboard::KeyCode;
use winit::event::ElementState;

/// Actions triggered by special keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Re-read the shader file and rebuild pipelines (R key)
    ReloadShaders,
    /// Destroy every body (Backspace)
    ResetWorld,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::KeyR => Some(InputAction::ReloadShaders),
            KeyCode::Backspace => Some(InputAction::ResetWorld),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ReloadShaders)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Backspace, ElementState::Pressed),
            Some(InputAction::ResetWorld)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_zoom_keys_not_mapped() {
        for key in [KeyCode::KeyA, KeyCode::KeyZ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Backspace, ElementState::Released);
        assert_eq!(action, None);
    }
}
