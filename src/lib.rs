//! Crayon Physics
//!
//! Sketch shapes with the mouse and watch them fall. The library side exposes
//! the application configuration; the pipeline lives in the `crayon_*` crates.

pub mod config;
