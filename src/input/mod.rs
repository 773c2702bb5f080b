//! Keyboard shortcuts
//!
//! Pointer and zoom input go straight to `InputState` and the sketch
//! session; this module only names the one-shot application actions.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
