//! Pointer button set

use bitflags::bitflags;
use winit::event::MouseButton;

bitflags! {
    /// Pointer buttons currently held
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Left button, draws sketches
        const PRIMARY = 0b0001;
        /// Right button, orbits the camera
        const SECONDARY = 0b0010;
        const MIDDLE = 0b0100;
    }
}

impl PointerButtons {
    /// Map a winit button to its flag (empty for back/forward/other buttons)
    pub fn from_mouse_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::PRIMARY,
            MouseButton::Right => Self::SECONDARY,
            MouseButton::Middle => Self::MIDDLE,
            _ => Self::empty(),
        }
    }
}
