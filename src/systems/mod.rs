//! Application systems
//!
//! Window, simulation and rendering, kept out of main.rs so the frame loop
//! reads as input, step, render.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
