//! 2D physics for sketched bodies
//!
//! This crate is the only caller into the physics engine (rapier2d). It provides:
//! - Creation of dynamic circles and boxes and static polyline chains
//! - A generational body table mapping keys to render-time shape parameters
//! - Fixed-timestep stepping and world reset

pub mod body;
pub mod material;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, BodyPose, SimBody, SimShape};
pub use material::PhysicsMaterial;
pub use world::{PhysicsConfig, PhysicsWorld, DEFAULT_GRAVITY, DEFAULT_TIMESTEP, FALLBACK_MASS};
