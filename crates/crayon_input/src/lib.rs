//! Input handling for the crayon physics sandbox
//!
//! This crate turns winit events into per-frame [`InputSnapshot`]s and
//! drives the camera through the [`CameraManipulator`] trait.
//!
//! Controls:
//! - Right-drag: orbit the turntable camera
//! - A/Z (held): zoom in/out

mod buttons;
mod input_state;
mod manipulator;

pub use buttons::PointerButtons;
pub use input_state::{InputSnapshot, InputState};
pub use manipulator::{CameraManipulator, TurntableManipulator, TurntableSettings};
